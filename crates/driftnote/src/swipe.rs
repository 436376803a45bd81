//! Horizontal swipe-to-dismiss recognition.
//!
//! A [`SwipeTracker`] holds at most one live session at a time: a press on a
//! panel opens the session, moves either feed back a horizontal drag offset
//! or abort the candidate, and the release decides between a confirmed
//! dismissal and a rejected one. Cancellation is sticky: once any move sample
//! violates the path constraints the session is gone, and the eventual
//! release is a no-op.
//!
//! The tracker itself never touches panels or containers; every outcome names
//! the affected panel (and its container, where selection must be restored)
//! and the notification center applies the effects.

use std::time::Instant;

use crate::events::{Point, PointerMoveEvent, PointerPressEvent, PointerReleaseEvent};
use crate::panel::{ContainerId, PanelId};

/// Maximum vertical drift from the press origin, in pixels.
///
/// Wide enough to allow natural hand tremor during a horizontal swipe while
/// still rejecting vertical scroll gestures.
pub const DEFAULT_VERTICAL_TOLERANCE: f32 = 50.0;

/// Minimum rightward travel to confirm a swipe, in pixels.
///
/// Keeps accidental taps and clicks from being misread as swipes.
pub const DEFAULT_MIN_TRAVEL: f32 = 100.0;

/// Thresholds governing swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Maximum vertical drift from the press origin before the candidate is
    /// aborted.
    pub vertical_tolerance: f32,
    /// Minimum rightward displacement at release for confirmation.
    pub min_travel: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            vertical_tolerance: DEFAULT_VERTICAL_TOLERANCE,
            min_travel: DEFAULT_MIN_TRAVEL,
        }
    }
}

/// One in-flight swipe candidate.
#[derive(Debug, Clone, Copy)]
struct SwipeSession {
    /// Panel being dragged.
    panel: PanelId,
    /// Container the panel was attached to at press time.
    container: ContainerId,
    /// Pointer position at press.
    origin: Point,
    /// Container left edge at press, the leftward bound for the gesture.
    container_left: f32,
    /// When the press happened.
    pressed_at: Instant,
}

/// Outcome of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A new session started; selection on the panel's container must be
    /// suppressed.
    Started,
    /// A press arrived while a session was already live. The live session is
    /// discarded and the pressed panel is reset instead of tracked: its drag
    /// offset returns to zero and its container's selection is restored.
    CancelledStale {
        /// The panel that received the second press.
        panel: PanelId,
        /// That panel's container.
        container: ContainerId,
    },
}

/// Outcome of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No live session; nothing to do.
    NotTracking,
    /// The candidate is still valid; render the panel at this horizontal
    /// offset from its resting position.
    Feedback {
        /// Panel being dragged.
        panel: PanelId,
        /// Offset right of the resting position, in pixels.
        offset: f32,
    },
    /// A path constraint was violated. The session is discarded; the panel's
    /// offset must return to zero and its container's selection restored.
    Aborted {
        /// Panel that was being dragged.
        panel: PanelId,
        /// That panel's container.
        container: ContainerId,
    },
}

/// Outcome of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No live session; nothing to do.
    NotTracking,
    /// The path satisfied both thresholds: dismiss the panel's notification
    /// and restore its container's selection.
    Confirmed {
        /// Panel whose notification is to be dismissed.
        panel: PanelId,
        /// That panel's container.
        container: ContainerId,
    },
    /// The path fell short: reset the panel's offset to zero and restore its
    /// container's selection.
    Rejected {
        /// Panel that was being dragged.
        panel: PanelId,
        /// That panel's container.
        container: ContainerId,
    },
}

/// Tracks the single process-wide swipe session.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    /// Recognition thresholds.
    config: SwipeConfig,
    /// The live session, if a press is being tracked.
    session: Option<SwipeSession>,
}

impl SwipeTracker {
    /// Creates a tracker with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with the given thresholds.
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Returns whether a session is live.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Handles a pointer press on `panel`.
    ///
    /// `container_left` is the left-edge position of `container` at press
    /// time. A press while a session is already live cancels instead of
    /// starting a new session.
    pub fn press(
        &mut self,
        now: Instant,
        panel: PanelId,
        container: ContainerId,
        container_left: f32,
        event: &PointerPressEvent,
    ) -> PressOutcome {
        if self.session.take().is_some() {
            tracing::debug!(
                target: "driftnote::swipe",
                ?panel,
                "press while a session was live, cancelling"
            );
            return PressOutcome::CancelledStale { panel, container };
        }

        tracing::trace!(
            target: "driftnote::swipe",
            ?panel,
            origin = ?event.page_pos,
            container_left,
            "swipe session started"
        );
        self.session = Some(SwipeSession {
            panel,
            container,
            origin: event.page_pos,
            container_left,
            pressed_at: now,
        });
        PressOutcome::Started
    }

    /// Handles a pointer move.
    ///
    /// Violating any path constraint discards the session for good; the
    /// eventual release will not see it.
    pub fn pointer_move(&mut self, event: &PointerMoveEvent) -> MoveOutcome {
        let Some(session) = self.session else {
            return MoveOutcome::NotTracking;
        };

        let pos = event.page_pos;
        let degenerate_origin = session.origin.x == 0.0;
        let left_of_container = pos.x < session.container_left;
        let vertical_drift = (pos.y - session.origin.y).abs() > self.config.vertical_tolerance;
        let moved_backward = pos.x < session.origin.x;

        if degenerate_origin || left_of_container || vertical_drift || moved_backward {
            tracing::trace!(
                target: "driftnote::swipe",
                panel = ?session.panel,
                degenerate_origin,
                left_of_container,
                vertical_drift,
                moved_backward,
                "swipe candidate aborted"
            );
            self.session = None;
            return MoveOutcome::Aborted {
                panel: session.panel,
                container: session.container,
            };
        }

        MoveOutcome::Feedback {
            panel: session.panel,
            offset: pos.x - session.origin.x,
        }
    }

    /// Handles a pointer release, ending the session.
    pub fn release(&mut self, now: Instant, event: &PointerReleaseEvent) -> ReleaseOutcome {
        let Some(session) = self.session.take() else {
            return ReleaseOutcome::NotTracking;
        };

        let pos = event.page_pos;
        let within_tolerance =
            (pos.y - session.origin.y).abs() <= self.config.vertical_tolerance;
        let travelled = pos.x - session.origin.x >= self.config.min_travel;

        if within_tolerance && travelled {
            tracing::debug!(
                target: "driftnote::swipe",
                panel = ?session.panel,
                held = ?now.saturating_duration_since(session.pressed_at),
                "swipe confirmed"
            );
            ReleaseOutcome::Confirmed {
                panel: session.panel,
                container: session.container,
            }
        } else {
            tracing::trace!(
                target: "driftnote::swipe",
                panel = ?session.panel,
                "swipe rejected at release"
            );
            ReleaseOutcome::Rejected {
                panel: session.panel,
                container: session.container,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_at(x: f32, y: f32) -> PointerPressEvent {
        PointerPressEvent::new(Point::new(x, y))
    }

    fn move_to(x: f32, y: f32) -> PointerMoveEvent {
        PointerMoveEvent::new(Point::new(x, y))
    }

    fn release_at(x: f32, y: f32) -> PointerReleaseEvent {
        PointerReleaseEvent::new(Point::new(x, y))
    }

    fn ids() -> (PanelId, ContainerId) {
        (PanelId::default(), ContainerId::default())
    }

    #[test]
    fn test_rightward_swipe_confirms() {
        let (panel, container) = ids();
        let mut tracker = SwipeTracker::new();
        let t0 = Instant::now();

        assert_eq!(
            tracker.press(t0, panel, container, 0.0, &press_at(100.0, 100.0)),
            PressOutcome::Started
        );
        assert_eq!(
            tracker.pointer_move(&move_to(250.0, 110.0)),
            MoveOutcome::Feedback {
                panel,
                offset: 150.0
            }
        );
        assert_eq!(
            tracker.release(t0, &release_at(260.0, 108.0)),
            ReleaseOutcome::Confirmed { panel, container }
        );
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_vertical_drift_aborts_and_is_sticky() {
        let (panel, container) = ids();
        let mut tracker = SwipeTracker::new();
        let t0 = Instant::now();

        tracker.press(t0, panel, container, 0.0, &press_at(100.0, 100.0));
        assert_eq!(
            tracker.pointer_move(&move_to(170.0, 160.0)),
            MoveOutcome::Aborted { panel, container }
        );
        // Later samples and the release see no session.
        assert_eq!(
            tracker.pointer_move(&move_to(300.0, 100.0)),
            MoveOutcome::NotTracking
        );
        assert_eq!(
            tracker.release(t0, &release_at(300.0, 100.0)),
            ReleaseOutcome::NotTracking
        );
    }

    #[test]
    fn test_backward_motion_aborts() {
        let (panel, container) = ids();
        let mut tracker = SwipeTracker::new();
        let t0 = Instant::now();

        tracker.press(t0, panel, container, 0.0, &press_at(100.0, 100.0));
        assert_eq!(
            tracker.pointer_move(&move_to(99.0, 100.0)),
            MoveOutcome::Aborted { panel, container }
        );
    }

    #[test]
    fn test_left_of_container_aborts() {
        let (panel, container) = ids();
        let mut tracker = SwipeTracker::new();
        let t0 = Instant::now();

        tracker.press(t0, panel, container, 150.0, &press_at(200.0, 100.0));
        // Still right of the origin check would pass, but left of the
        // container's own edge.
        assert_eq!(
            tracker.pointer_move(&move_to(140.0, 100.0)),
            MoveOutcome::Aborted { panel, container }
        );
    }

    #[test]
    fn test_degenerate_origin_aborts_on_move() {
        let (panel, container) = ids();
        let mut tracker = SwipeTracker::new();
        let t0 = Instant::now();

        tracker.press(t0, panel, container, 0.0, &press_at(0.0, 100.0));
        assert_eq!(
            tracker.pointer_move(&move_to(50.0, 100.0)),
            MoveOutcome::Aborted { panel, container }
        );
    }

    #[test]
    fn test_short_travel_rejected_at_release() {
        let (panel, container) = ids();
        let mut tracker = SwipeTracker::new();
        let t0 = Instant::now();

        tracker.press(t0, panel, container, 0.0, &press_at(100.0, 100.0));
        assert_eq!(
            tracker.pointer_move(&move_to(150.0, 100.0)),
            MoveOutcome::Feedback {
                panel,
                offset: 50.0
            }
        );
        assert_eq!(
            tracker.release(t0, &release_at(199.0, 100.0)),
            ReleaseOutcome::Rejected { panel, container }
        );
    }

    #[test]
    fn test_second_press_cancels_instead_of_tracking() {
        let (panel_a, container_a) = ids();
        let mut tracker = SwipeTracker::new();
        let t0 = Instant::now();

        tracker.press(t0, panel_a, container_a, 0.0, &press_at(100.0, 100.0));
        let outcome = tracker.press(t0, panel_a, container_a, 0.0, &press_at(120.0, 100.0));
        assert_eq!(
            outcome,
            PressOutcome::CancelledStale {
                panel: panel_a,
                container: container_a
            }
        );
        assert!(!tracker.is_active());

        // The next press starts fresh.
        assert_eq!(
            tracker.press(t0, panel_a, container_a, 0.0, &press_at(100.0, 100.0)),
            PressOutcome::Started
        );
    }

    #[test]
    fn test_exact_thresholds_confirm() {
        let (panel, container) = ids();
        let mut tracker = SwipeTracker::with_config(SwipeConfig::default());
        let t0 = Instant::now();

        tracker.press(t0, panel, container, 0.0, &press_at(10.0, 100.0));
        // Exactly 100px right and exactly 50px down still confirm.
        assert_eq!(
            tracker.release(t0, &release_at(110.0, 150.0)),
            ReleaseOutcome::Confirmed { panel, container }
        );
    }
}
