//! Style animation.
//!
//! The animation system is the "animate to style over duration" capability
//! notifications rely on for their show and hide transitions:
//!
//! - [`easing`] - Easing functions for smooth animations
//! - [`Animator`] - Drives active style animations and reports completions

pub mod easing;

mod animator;

pub use animator::{AnimationId, Animator, FinishAction};
pub use easing::{Easing, ease, lerp};
