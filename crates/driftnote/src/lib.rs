//! Transient on-screen notifications with swipe-to-dismiss.
//!
//! Driftnote is a small widget toolkit for stacking, timed notification
//! panels: each notification shows itself with a style transition, optionally
//! hides itself after a delay unless the user hovers it, and can be dismissed
//! by a close press or a rightward swipe gesture.
//!
//! Everything hangs off a [`NotificationCenter`], which the host drives from
//! its event loop:
//!
//! ```
//! use std::collections::HashMap;
//! use std::time::{Duration, Instant};
//! use driftnote::{MessageContent, NotificationCenter, NotificationConfig};
//!
//! let t0 = Instant::now();
//! let mut center = NotificationCenter::new(t0);
//! let container = center.add_container(0.0);
//!
//! let id = center.create(
//!     "Build finished",
//!     &MessageContent::new("all targets up to date"),
//!     NotificationConfig::default(),
//!     HashMap::new(),
//! );
//! center.attach(id, container).unwrap();
//!
//! // The host ticks the center; the show transition completes and the
//! // auto-hide timer is armed.
//! center.advance(t0 + Duration::from_millis(250));
//! assert_eq!(center.notification_count(), 1);
//!
//! // Past the auto-hide delay plus the hide transition, the notification
//! // is gone.
//! center.advance(t0 + Duration::from_millis(250 + 3000));
//! center.advance(t0 + Duration::from_millis(250 + 3000 + 500));
//! assert_eq!(center.notification_count(), 0);
//! ```
//!
//! Module map:
//!
//! - [`center`] - The [`NotificationCenter`] orchestrator
//! - [`notification`] - Configuration and the lifecycle state machine
//! - [`swipe`] - Horizontal swipe-to-dismiss recognition
//! - [`panel`] - Panels, containers, and the selection affordance
//! - [`animation`] - Style transitions and easing
//! - [`style`] - The animatable style model
//! - [`events`] - Pointer event types
//! - [`template`] - Panel construction from message content

pub mod animation;
pub mod center;
pub mod error;
pub mod events;
pub mod notification;
pub mod panel;
pub mod style;
pub mod swipe;
pub mod template;

pub use center::NotificationCenter;
pub use error::{LifecycleError, Result};
pub use events::{Point, PointerMoveEvent, PointerPressEvent, PointerReleaseEvent};
pub use notification::{
    HoverResponse, Lifecycle, Notification, NotificationConfig, NotificationId, PressResponse,
    METADATA_ALERT_ID,
};
pub use panel::{Container, ContainerId, Panel, PanelId, SelectionAffordance};
pub use style::{Style, StyleProperty};
pub use swipe::{SwipeConfig, SwipeTracker};
pub use template::{DefaultTemplate, MessageContent, PanelTemplate};
