//! The notification center.
//!
//! [`NotificationCenter`] owns every panel, container, notification, timer,
//! animation, and the single swipe session, and wires them together into the
//! lifecycle the widget promises:
//!
//! ```text
//! create -> attach -> show -> (auto-hide | close | swipe) -> hide -> destroy
//! ```
//!
//! The host drives it cooperatively: input handlers feed pointer and hover
//! events in, and [`advance`](NotificationCenter::advance) is called with the
//! current time to progress animations and fire due timers. All completion
//! dispatch happens inside `advance`, in a fixed order (animation completions
//! first, then expired timers), so observable ordering is deterministic.
//!
//! Outward collaboration happens over two signals: [`delete_requested`] fires
//! with the alert identifier when the user closes a notification by hand, and
//! [`entity_ignored`] fires with the entity identifier when a swipe dismissal
//! is confirmed.
//!
//! [`delete_requested`]: NotificationCenter::delete_requested
//! [`entity_ignored`]: NotificationCenter::entity_ignored

use std::collections::HashMap;
use std::time::{Duration, Instant};

use driftnote_core::{Signal, TimerId, TimerManager};
use slotmap::SlotMap;

use crate::animation::{Animator, FinishAction};
use crate::error::{LifecycleError, Result};
use crate::events::{PointerMoveEvent, PointerPressEvent, PointerReleaseEvent};
use crate::notification::{
    HoverResponse, Lifecycle, Notification, NotificationConfig, NotificationId, PressResponse,
    METADATA_ALERT_ID,
};
use crate::panel::{Container, ContainerId, PanelId, PanelRegistry};
use crate::swipe::{MoveOutcome, PressOutcome, ReleaseOutcome, SwipeTracker};
use crate::template::{DefaultTemplate, MessageContent, PanelTemplate};

/// Owns and orchestrates all notification state.
pub struct NotificationCenter {
    /// All live panels plus panel-to-notification back-references.
    panels: PanelRegistry,
    /// Registered host containers.
    containers: SlotMap<ContainerId, Container>,
    /// All live notifications.
    notifications: SlotMap<NotificationId, Notification>,
    /// Deferred auto-hide timers.
    timers: TimerManager,
    /// In-flight show and hide transitions.
    animator: Animator,
    /// The single process-wide swipe session.
    swipe: SwipeTracker,
    /// Builds panels from message content.
    template: Box<dyn PanelTemplate>,
    /// Maps pending auto-hide timers back to their notification.
    auto_hide_owners: HashMap<TimerId, NotificationId>,
    /// Last time passed to [`advance`](Self::advance).
    now: Instant,
    /// Emitted with the alert identifier when a notification is closed by
    /// hand. Not emitted when the metadata carries no identifier.
    pub delete_requested: Signal<String>,
    /// Emitted with the entity identifier when a swipe dismissal confirms.
    /// Not emitted when the panel carries no entity.
    pub entity_ignored: Signal<u64>,
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("notifications", &self.notifications.len())
            .field("containers", &self.containers.len())
            .field("swipe_active", &self.swipe.is_active())
            .finish_non_exhaustive()
    }
}

impl NotificationCenter {
    /// Creates a center using the stock panel template.
    pub fn new(now: Instant) -> Self {
        Self::with_template(now, Box::new(DefaultTemplate))
    }

    /// Creates a center building panels through `template`.
    pub fn with_template(now: Instant, template: Box<dyn PanelTemplate>) -> Self {
        Self {
            panels: PanelRegistry::new(),
            containers: SlotMap::with_key(),
            notifications: SlotMap::with_key(),
            timers: TimerManager::new(),
            animator: Animator::new(),
            swipe: SwipeTracker::new(),
            template,
            auto_hide_owners: HashMap::new(),
            now,
            delete_requested: Signal::new(),
            entity_ignored: Signal::new(),
        }
    }

    /// Registers a host container with the given left-edge position.
    pub fn add_container(&mut self, left_edge: f32) -> ContainerId {
        self.containers.insert(Container::new(left_edge))
    }

    /// Creates a notification with its panel, unattached and hidden.
    ///
    /// The panel is built through the template, then the configured classes
    /// and initial style are applied. Metadata keys the configuration never
    /// reads are carried verbatim for collaborator calls.
    pub fn create(
        &mut self,
        title: &str,
        content: &MessageContent,
        config: NotificationConfig,
        metadata: HashMap<String, String>,
    ) -> NotificationId {
        let mut panel = self.template.build(title, content);
        for class in &config.classes {
            panel.add_class(class.clone());
        }
        panel.style = config.initial_style();

        let panel_id = self.panels.insert(panel);
        let id = self.notifications.insert(Notification {
            config,
            metadata,
            panel: panel_id,
            container: None,
            state: Lifecycle::Hidden,
        });
        self.panels.set_owner(panel_id, id);

        tracing::debug!(
            target: "driftnote::lifecycle",
            notification = ?id,
            panel = ?panel_id,
            title,
            "notification created"
        );
        id
    }

    /// Attaches a notification's panel to `container` and starts its show
    /// transition.
    ///
    /// The panel is prepended or appended per the notification's
    /// configuration.
    pub fn attach(&mut self, id: NotificationId, container: ContainerId) -> Result<()> {
        let notification = self
            .notifications
            .get(id)
            .ok_or(LifecycleError::UnknownNotification(id))?;
        if notification.container.is_some() {
            return Err(LifecycleError::AlreadyAttached(id));
        }
        let panel = notification.panel;
        let prepend = notification.config.prepend;

        let host = self
            .containers
            .get_mut(container)
            .ok_or(LifecycleError::UnknownContainer(container))?;
        if prepend {
            host.prepend(panel);
        } else {
            host.append(panel);
        }
        if let Some(notification) = self.notifications.get_mut(id) {
            notification.container = Some(container);
        }

        tracing::debug!(
            target: "driftnote::lifecycle",
            notification = ?id,
            ?container,
            prepend,
            "notification attached"
        );
        self.show(id)
    }

    /// Starts a notification's show transition.
    ///
    /// Auto-hide is armed now if the configuration calls for it; the timer
    /// itself is scheduled only once the transition completes.
    pub fn show(&mut self, id: NotificationId) -> Result<()> {
        let notification = self
            .notifications
            .get_mut(id)
            .ok_or(LifecycleError::UnknownNotification(id))?;
        if notification.container.is_none() {
            return Err(LifecycleError::NotAttached(id));
        }
        if notification.state != Lifecycle::Hidden {
            return Err(LifecycleError::AlreadyVisible(id));
        }

        let armed = notification.config.arms_auto_hide();
        notification.state = Lifecycle::Showing { armed };
        let panel = notification.panel;
        let to = notification.config.show_style.clone();
        let duration = notification.config.show_duration;
        let easing = notification.config.show_easing;

        let from = self
            .panels
            .get(panel)
            .map(|p| p.style.clone())
            .unwrap_or_default();
        self.animator.start(
            self.now,
            panel,
            from,
            to,
            duration,
            easing,
            FinishAction::ShowFinished(id),
        );

        tracing::debug!(
            target: "driftnote::lifecycle",
            notification = ?id,
            armed,
            "show started"
        );
        Ok(())
    }

    /// Starts a notification's hide transition.
    ///
    /// This is the single dismissal path for every trigger: the auto-hide
    /// timer, manual close, and confirmed swipe all land here. Destruction
    /// follows when the transition completes.
    pub fn hide(&mut self, id: NotificationId) -> Result<()> {
        let notification = self
            .notifications
            .get_mut(id)
            .ok_or(LifecycleError::UnknownNotification(id))?;
        if notification.container.is_none() {
            return Err(LifecycleError::NotAttached(id));
        }
        if notification.state == Lifecycle::Hiding {
            return Err(LifecycleError::AlreadyHiding(id));
        }

        // Leaving the armed state invalidates any pending auto-hide timer.
        if let Some(timer) = notification.state.disarm() {
            let _ = self.timers.stop(timer);
            self.auto_hide_owners.remove(&timer);
        }
        notification.state = Lifecycle::Hiding;
        let panel = notification.panel;
        let to = notification.config.hide_style.clone();
        let duration = notification.config.hide_duration;
        let easing = notification.config.hide_easing;

        // A show transition still in flight must not finish after this.
        self.animator.cancel_for_panel(panel);

        let from = self
            .panels
            .get(panel)
            .map(|p| p.style.clone())
            .unwrap_or_default();
        self.animator.start(
            self.now,
            panel,
            from,
            to,
            duration,
            easing,
            FinishAction::HideFinished(id),
        );

        tracing::debug!(
            target: "driftnote::lifecycle",
            notification = ?id,
            "hide started"
        );
        Ok(())
    }

    /// Handles a press on a notification's close affordance.
    ///
    /// Emits [`delete_requested`](Self::delete_requested) with the alert
    /// identifier when the metadata carries one; the hide proceeds either
    /// way.
    pub fn close_pressed(&mut self, panel: PanelId) {
        let Some(id) = self.panels.owner_of(panel) else {
            return;
        };
        if let Some(notification) = self.notifications.get(id) {
            match notification.metadata.get(METADATA_ALERT_ID) {
                Some(alert_id) => self.delete_requested.emit(alert_id.clone()),
                None => tracing::debug!(
                    target: "driftnote::lifecycle",
                    notification = ?id,
                    "close without alert identifier, skipping delete request"
                ),
            }
        }
        if let Err(err) = self.hide(id) {
            tracing::debug!(
                target: "driftnote::lifecycle",
                notification = ?id,
                %err,
                "close pressed but hide not possible"
            );
        }
    }

    /// Handles hover-enter on a panel.
    ///
    /// With the default configuration this permanently disarms auto-hide for
    /// that notification; there is no re-arm on hover-leave.
    pub fn hover_entered(&mut self, panel: PanelId) {
        let Some(id) = self.panels.owner_of(panel) else {
            return;
        };
        let Some(notification) = self.notifications.get_mut(id) else {
            return;
        };
        if notification.config.on_hover != HoverResponse::DisarmAutoHide {
            return;
        }
        if let Some(timer) = notification.state.disarm() {
            let _ = self.timers.stop(timer);
            self.auto_hide_owners.remove(&timer);
        }
        tracing::trace!(
            target: "driftnote::lifecycle",
            notification = ?id,
            "auto-hide disarmed by hover"
        );
    }

    /// Handles hover-leave on a panel. Intentionally does nothing: once a
    /// user has focused on a panel it waits for explicit dismissal.
    pub fn hover_left(&mut self, _panel: PanelId) {}

    /// Handles a pointer press on a panel's press surface.
    pub fn pointer_pressed(&mut self, panel: PanelId, event: &PointerPressEvent) {
        let Some(id) = self.panels.owner_of(panel) else {
            return;
        };
        let Some(notification) = self.notifications.get(id) else {
            return;
        };
        if notification.config.on_press != PressResponse::TrackSwipe {
            return;
        }
        let Some(container) = notification.container else {
            return;
        };
        let Some(left_edge) = self.containers.get(container).map(|c| c.left_edge) else {
            return;
        };

        match self.swipe.press(self.now, panel, container, left_edge, event) {
            PressOutcome::Started => {
                if let Some(host) = self.containers.get_mut(container) {
                    host.selection.suppress();
                }
            }
            PressOutcome::CancelledStale { panel, container } => {
                self.reset_after_swipe(panel, container);
            }
        }
    }

    /// Handles a pointer move during a potential swipe.
    pub fn pointer_moved(&mut self, event: &PointerMoveEvent) {
        match self.swipe.pointer_move(event) {
            MoveOutcome::NotTracking => {}
            MoveOutcome::Feedback { panel, offset } => {
                if let Some(panel) = self.panels.get_mut(panel) {
                    panel.drag_offset = offset;
                }
            }
            MoveOutcome::Aborted { panel, container } => {
                self.reset_after_swipe(panel, container);
            }
        }
    }

    /// Handles a pointer release, finalizing any live swipe session.
    ///
    /// A confirmed swipe emits [`entity_ignored`](Self::entity_ignored) when
    /// the panel carries an entity identifier, then hides the notification
    /// through the ordinary hide path.
    pub fn pointer_released(&mut self, event: &PointerReleaseEvent) {
        match self.swipe.release(self.now, event) {
            ReleaseOutcome::NotTracking => {}
            ReleaseOutcome::Rejected { panel, container } => {
                self.reset_after_swipe(panel, container);
            }
            ReleaseOutcome::Confirmed { panel, container } => {
                if let Some(host) = self.containers.get_mut(container) {
                    host.selection.restore();
                }
                match self.panels.get(panel).and_then(|p| p.entity_id) {
                    Some(entity) => self.entity_ignored.emit(entity),
                    None => tracing::debug!(
                        target: "driftnote::swipe",
                        ?panel,
                        "confirmed swipe on panel without entity identifier"
                    ),
                }
                if let Some(id) = self.panels.owner_of(panel) {
                    if let Err(err) = self.hide(id) {
                        tracing::debug!(
                            target: "driftnote::swipe",
                            notification = ?id,
                            %err,
                            "swipe confirmed but hide not possible"
                        );
                    }
                }
            }
        }
    }

    /// Advances time to `now`, progressing animations and firing due timers.
    ///
    /// Animation completions are dispatched before expired timers, so a show
    /// that finishes at the same instant its host ticks will arm its
    /// auto-hide timer before any timer processing happens.
    pub fn advance(&mut self, now: Instant) {
        self.now = now;

        for action in self.animator.advance(now, &mut self.panels) {
            match action {
                FinishAction::ShowFinished(id) => self.show_finished(id),
                FinishAction::HideFinished(id) => {
                    let _ = self.destroy(id);
                }
            }
        }

        for timer in self.timers.process_expired(now) {
            self.auto_hide_fired(timer);
        }
    }

    /// Duration until the next pending auto-hide timer, if any.
    pub fn time_until_next_timer(&mut self) -> Option<Duration> {
        self.timers.time_until_next(self.now)
    }

    /// Returns whether any show or hide transition is in flight.
    pub fn has_active_animations(&self) -> bool {
        self.animator.active_count() > 0
    }

    /// Looks up a live notification.
    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.get(id)
    }

    /// Looks up the notification owning a panel.
    pub fn owner_of(&self, panel: PanelId) -> Option<NotificationId> {
        self.panels.owner_of(panel)
    }

    /// Looks up a live panel.
    pub fn panel(&self, id: PanelId) -> Option<&crate::panel::Panel> {
        self.panels.get(id)
    }

    /// Looks up a registered container.
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id)
    }

    /// Number of live notifications.
    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    /// Returns whether a swipe session is live.
    pub fn is_swipe_active(&self) -> bool {
        self.swipe.is_active()
    }

    /// Dispatches a completed show transition.
    ///
    /// The auto-hide timer is scheduled only if the notification is still in
    /// the armed Showing state; a hover or dismissal that raced the
    /// transition wins.
    fn show_finished(&mut self, id: NotificationId) {
        let Some(notification) = self.notifications.get_mut(id) else {
            return;
        };
        match notification.state {
            Lifecycle::Showing { armed: true } => {
                let timer = self
                    .timers
                    .start_one_shot(self.now, notification.config.auto_hide_delay);
                self.auto_hide_owners.insert(timer, id);
                notification.state = Lifecycle::Shown {
                    armed: true,
                    timer: Some(timer),
                };
                tracing::trace!(
                    target: "driftnote::lifecycle",
                    notification = ?id,
                    ?timer,
                    "shown, auto-hide scheduled"
                );
            }
            Lifecycle::Showing { armed: false } => {
                notification.state = Lifecycle::Shown {
                    armed: false,
                    timer: None,
                };
            }
            // Hidden or Hiding: a dismissal raced the transition.
            _ => {}
        }
    }

    /// Dispatches a fired auto-hide timer.
    ///
    /// The timer hides its notification only while the notification is still
    /// Shown and armed with this exact timer; anything else means a hover or
    /// dismissal got there first and the fire is stale.
    fn auto_hide_fired(&mut self, timer: TimerId) {
        let Some(id) = self.auto_hide_owners.remove(&timer) else {
            return;
        };
        let Some(notification) = self.notifications.get(id) else {
            return;
        };
        let armed_with_this_timer = matches!(
            notification.state,
            Lifecycle::Shown {
                armed: true,
                timer: Some(pending),
            } if pending == timer
        );
        if !armed_with_this_timer {
            tracing::trace!(
                target: "driftnote::lifecycle",
                notification = ?id,
                "stale auto-hide fire ignored"
            );
            return;
        }
        if let Err(err) = self.hide(id) {
            tracing::debug!(
                target: "driftnote::lifecycle",
                notification = ?id,
                %err,
                "auto-hide fired but hide not possible"
            );
        }
    }

    /// Removes a notification immediately, without the hide transition.
    ///
    /// Valid from any state, including created-but-never-attached. Any
    /// pending auto-hide timer and in-flight transition are cancelled; the
    /// panel leaves its container and the registry, which clears the
    /// back-reference, so later input events targeting the dead panel resolve
    /// to no owner and fall through. Hide completion lands here too, making
    /// this the single destruction path.
    pub fn destroy(&mut self, id: NotificationId) -> Result<()> {
        let Some(mut notification) = self.notifications.remove(id) else {
            return Err(LifecycleError::UnknownNotification(id));
        };
        if let Some(timer) = notification.state.disarm() {
            let _ = self.timers.stop(timer);
            self.auto_hide_owners.remove(&timer);
        }
        self.animator.cancel_for_panel(notification.panel);
        if let Some(container) = notification
            .container
            .and_then(|c| self.containers.get_mut(c))
        {
            container.remove_panel(notification.panel);
        }
        self.panels.remove(notification.panel);
        tracing::debug!(
            target: "driftnote::lifecycle",
            notification = ?id,
            "notification destroyed"
        );
        Ok(())
    }

    /// Common cleanup after a swipe candidate ends without confirming.
    fn reset_after_swipe(&mut self, panel: PanelId, container: ContainerId) {
        if let Some(panel) = self.panels.get_mut(panel) {
            panel.drag_offset = 0.0;
        }
        if let Some(host) = self.containers.get_mut(container) {
            host.selection.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Point;

    fn center() -> (NotificationCenter, Instant) {
        let t0 = Instant::now();
        (NotificationCenter::new(t0), t0)
    }

    #[test]
    fn test_attach_prepends_by_default() {
        let (mut center, _) = center();
        let container = center.add_container(0.0);

        let first = center.create(
            "a",
            &MessageContent::new(""),
            NotificationConfig::default(),
            HashMap::new(),
        );
        let second = center.create(
            "b",
            &MessageContent::new(""),
            NotificationConfig::default(),
            HashMap::new(),
        );
        center.attach(first, container).unwrap();
        center.attach(second, container).unwrap();

        let panels = center.container(container).unwrap().panels().to_vec();
        assert_eq!(
            panels,
            vec![
                center.notification(second).unwrap().panel(),
                center.notification(first).unwrap().panel()
            ]
        );
    }

    #[test]
    fn test_attach_twice_fails() {
        let (mut center, _) = center();
        let container = center.add_container(0.0);
        let id = center.create(
            "a",
            &MessageContent::new(""),
            NotificationConfig::default(),
            HashMap::new(),
        );
        center.attach(id, container).unwrap();
        assert_eq!(
            center.attach(id, container),
            Err(LifecycleError::AlreadyAttached(id))
        );
    }

    #[test]
    fn test_show_requires_attachment() {
        let (mut center, _) = center();
        let id = center.create(
            "a",
            &MessageContent::new(""),
            NotificationConfig::default(),
            HashMap::new(),
        );
        assert_eq!(center.show(id), Err(LifecycleError::NotAttached(id)));
    }

    #[test]
    fn test_close_without_alert_id_still_hides() {
        let (mut center, t0) = center();
        let container = center.add_container(0.0);
        let id = center.create(
            "a",
            &MessageContent::new(""),
            NotificationConfig::default(),
            HashMap::new(),
        );
        center.attach(id, container).unwrap();
        center.advance(t0 + Duration::from_millis(250));

        let panel = center.notification(id).unwrap().panel();
        center.close_pressed(panel);
        assert_eq!(center.notification(id).unwrap().state(), Lifecycle::Hiding);
    }

    #[test]
    fn test_destroy_cancels_timer_and_clears_container() {
        let (mut center, t0) = center();
        let container = center.add_container(0.0);
        let id = center.create(
            "a",
            &MessageContent::new(""),
            NotificationConfig::default(),
            HashMap::new(),
        );
        center.attach(id, container).unwrap();
        center.advance(t0 + Duration::from_millis(250));
        let panel = center.notification(id).unwrap().panel();

        center.destroy(id).unwrap();
        assert_eq!(center.notification_count(), 0);
        assert!(center.owner_of(panel).is_none());
        assert!(!center.container(container).unwrap().contains(panel));
        assert!(center.time_until_next_timer().is_none());

        // The cancelled timer's deadline passing is a non-event.
        center.advance(t0 + Duration::from_millis(3250));
        assert_eq!(center.notification_count(), 0);
    }

    #[test]
    fn test_second_press_resets_without_tracking() {
        let (mut center, t0) = center();
        let container = center.add_container(0.0);
        let id = center.create(
            "a",
            &MessageContent::new(""),
            NotificationConfig::default(),
            HashMap::new(),
        );
        center.attach(id, container).unwrap();
        center.advance(t0 + Duration::from_millis(250));
        let panel = center.notification(id).unwrap().panel();

        let press = PointerPressEvent::new(Point::new(100.0, 100.0));
        center.pointer_pressed(panel, &press);
        assert!(center.is_swipe_active());
        assert!(center.container(container).unwrap().selection.is_suppressed());

        center.pointer_moved(&PointerMoveEvent::new(Point::new(140.0, 100.0)));
        assert_eq!(center.panel(panel).unwrap().drag_offset, 40.0);

        center.pointer_pressed(panel, &press);
        assert!(!center.is_swipe_active());
        assert_eq!(center.panel(panel).unwrap().drag_offset, 0.0);
        assert!(!center.container(container).unwrap().selection.is_suppressed());
    }
}
