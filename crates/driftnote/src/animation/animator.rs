//! The style animation driver.
//!
//! An [`Animator`] owns every in-flight style animation. The notification
//! center calls [`Animator::advance`] from its cooperative loop; the animator
//! writes interpolated styles onto the affected panels and returns a
//! [`FinishAction`] for each animation that completed, which the center then
//! dispatches (arming an auto-hide timer after a show, destroying after a
//! hide).

use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use super::easing::{Easing, ease};
use crate::notification::NotificationId;
use crate::panel::{PanelId, PanelRegistry};
use crate::style::Style;

new_key_type! {
    /// A unique identifier for an in-flight animation.
    pub struct AnimationId;
}

/// What the notification center should do when an animation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishAction {
    /// A show transition reached its target style.
    ShowFinished(NotificationId),
    /// A hide transition reached its target style.
    HideFinished(NotificationId),
}

/// An in-flight style animation.
#[derive(Debug)]
struct ActiveAnimation {
    /// The panel whose style is being animated.
    panel: PanelId,
    /// Style at animation start.
    from: Style,
    /// Target style.
    to: Style,
    /// When the animation started.
    start: Instant,
    /// Total animation duration.
    duration: Duration,
    /// Easing applied to raw progress.
    easing: Easing,
    /// Dispatched when the animation completes.
    action: FinishAction,
}

/// Drives style animations for the notification center.
#[derive(Debug, Default)]
pub struct Animator {
    /// All in-flight animations.
    animations: SlotMap<AnimationId, ActiveAnimation>,
}

impl Animator {
    /// Creates an animator with no active animations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating `panel` from its current style toward `to`.
    ///
    /// A zero `duration` applies the target style on the next
    /// [`advance`](Self::advance) call and completes immediately.
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        &mut self,
        now: Instant,
        panel: PanelId,
        from: Style,
        to: Style,
        duration: Duration,
        easing: Easing,
        action: FinishAction,
    ) -> AnimationId {
        tracing::trace!(
            target: "driftnote::animation",
            ?panel,
            ?duration,
            ?action,
            "animation started"
        );
        self.animations.insert(ActiveAnimation {
            panel,
            from,
            to,
            start: now,
            duration,
            easing,
            action,
        })
    }

    /// Cancels every animation targeting `panel`.
    ///
    /// Cancelled animations never report their finish action; the panel keeps
    /// whatever style was last written to it.
    pub fn cancel_for_panel(&mut self, panel: PanelId) -> usize {
        let before = self.animations.len();
        self.animations.retain(|_, anim| anim.panel != panel);
        before - self.animations.len()
    }

    /// Returns whether any animation is targeting `panel`.
    pub fn is_animating(&self, panel: PanelId) -> bool {
        self.animations.values().any(|anim| anim.panel == panel)
    }

    /// Returns the number of in-flight animations.
    pub fn active_count(&self) -> usize {
        self.animations.len()
    }

    /// Advances every animation to `now`.
    ///
    /// Interpolated styles are written onto the panels in `panels`; an
    /// animation whose panel no longer exists is dropped silently. Returns
    /// the finish actions of animations that completed, for the caller to
    /// dispatch.
    pub fn advance(&mut self, now: Instant, panels: &mut PanelRegistry) -> Vec<FinishAction> {
        let mut finished = Vec::new();
        let mut done = Vec::new();

        for (id, anim) in &self.animations {
            let raw_progress = if anim.duration.is_zero() {
                1.0
            } else {
                let elapsed = now.saturating_duration_since(anim.start);
                (elapsed.as_secs_f32() / anim.duration.as_secs_f32()).min(1.0)
            };

            let Some(panel) = panels.get_mut(anim.panel) else {
                // Panel destroyed out from under the animation.
                done.push(id);
                continue;
            };

            if raw_progress >= 1.0 {
                panel.style.apply(&anim.to);
                finished.push(anim.action);
                done.push(id);
            } else {
                let progress = ease(anim.easing, raw_progress);
                panel.style.apply(&Style::lerp(&anim.from, &anim.to, progress));
            }
        }

        for id in done {
            self.animations.remove(id);
        }

        finished
    }
}
