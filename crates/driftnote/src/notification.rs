//! Notification configuration and lifecycle.
//!
//! A notification's life is an explicit state machine:
//!
//! ```text
//! Hidden -> Showing -> Shown -> Hiding -> (removed)
//! ```
//!
//! The show transition arms auto-hide when configured; hovering a panel
//! disarms it for the rest of that panel's life, and the pending timer is
//! cancelled whenever the machine leaves the armed Shown state so a stale
//! fire can never hide a notification the user has touched.

use std::collections::HashMap;
use std::time::Duration;

use driftnote_core::TimerId;
use slotmap::new_key_type;

use crate::animation::Easing;
use crate::style::{Style, StyleProperty};

new_key_type! {
    /// A unique identifier for a notification.
    pub struct NotificationId;
}

/// Metadata key carrying the host's alert identifier.
///
/// Manual close emits the delete-notification collaborator call with this
/// value.
pub const METADATA_ALERT_ID: &str = "alertId";

/// Default auto-hide delay in milliseconds.
pub const DEFAULT_AUTO_HIDE_DELAY_MS: u64 = 3000;

/// Default show animation duration in milliseconds.
pub const DEFAULT_SHOW_DURATION_MS: u64 = 250;

/// Default hide animation duration in milliseconds.
pub const DEFAULT_HIDE_DURATION_MS: u64 = 500;

/// How a notification responds to hover-enter on its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverResponse {
    /// Permanently disarm auto-hide for this panel (the default).
    #[default]
    DisarmAutoHide,
    /// Ignore hover entirely.
    Ignore,
}

/// How a notification responds to pointer-press on its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressResponse {
    /// Start tracking a horizontal swipe-to-dismiss candidate (the default).
    #[default]
    TrackSwipe,
    /// Ignore presses entirely.
    Ignore,
}

/// Configuration for a notification.
///
/// All fields are fixed once the notification is created.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Whether the notification dismisses itself after a delay.
    pub auto_hide: bool,
    /// Delay between show completion and auto-hide. A zero delay disables
    /// auto-hide even when `auto_hide` is true.
    pub auto_hide_delay: Duration,
    /// CSS classes applied to the panel at construction.
    pub classes: Vec<String>,
    /// Insert new panels at the start of the container instead of the end.
    pub prepend: bool,
    /// Initial style override. When unset the panel starts at `hide_style`,
    /// so it always renders resting-invisible before the show transition.
    pub start_style: Option<Style>,
    /// Target style of the show transition.
    pub show_style: Style,
    /// Duration of the show transition.
    pub show_duration: Duration,
    /// Easing of the show transition.
    pub show_easing: Easing,
    /// Target style of the hide transition.
    pub hide_style: Style,
    /// Duration of the hide transition.
    pub hide_duration: Duration,
    /// Easing of the hide transition.
    pub hide_easing: Easing,
    /// Hover-enter behavior.
    pub on_hover: HoverResponse,
    /// Pointer-press behavior.
    pub on_press: PressResponse,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_hide: true,
            auto_hide_delay: Duration::from_millis(DEFAULT_AUTO_HIDE_DELAY_MS),
            classes: Vec::new(),
            prepend: true,
            start_style: None,
            show_style: Style::new().with(StyleProperty::Opacity, 1.0),
            show_duration: Duration::from_millis(DEFAULT_SHOW_DURATION_MS),
            show_easing: Easing::EaseInOut,
            hide_style: Style::new().with(StyleProperty::Opacity, 0.0),
            hide_duration: Duration::from_millis(DEFAULT_HIDE_DURATION_MS),
            hide_easing: Easing::EaseInOut,
            on_hover: HoverResponse::default(),
            on_press: PressResponse::default(),
        }
    }
}

impl NotificationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the notification auto-hides.
    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    /// Sets the auto-hide delay.
    pub fn with_auto_hide_delay(mut self, delay: Duration) -> Self {
        self.auto_hide_delay = delay;
        self
    }

    /// Adds a css class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets prepend-vs-append container insertion.
    pub fn with_prepend(mut self, prepend: bool) -> Self {
        self.prepend = prepend;
        self
    }

    /// Sets the initial style override.
    pub fn with_start_style(mut self, style: Style) -> Self {
        self.start_style = Some(style);
        self
    }

    /// Sets the show transition target and duration.
    pub fn with_show(mut self, style: Style, duration: Duration) -> Self {
        self.show_style = style;
        self.show_duration = duration;
        self
    }

    /// Sets the hide transition target and duration.
    pub fn with_hide(mut self, style: Style, duration: Duration) -> Self {
        self.hide_style = style;
        self.hide_duration = duration;
        self
    }

    /// Sets the hover-enter behavior.
    pub fn with_on_hover(mut self, response: HoverResponse) -> Self {
        self.on_hover = response;
        self
    }

    /// Sets the pointer-press behavior.
    pub fn with_on_press(mut self, response: PressResponse) -> Self {
        self.on_press = response;
        self
    }

    /// Returns whether this configuration arms auto-hide on show.
    pub fn arms_auto_hide(&self) -> bool {
        self.auto_hide && !self.auto_hide_delay.is_zero()
    }

    /// The style a freshly built panel starts at.
    pub fn initial_style(&self) -> Style {
        self.start_style
            .clone()
            .unwrap_or_else(|| self.hide_style.clone())
    }
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed (and possibly attached) but not yet showing.
    Hidden,
    /// Show transition in progress.
    Showing {
        /// Whether auto-hide will be armed when the transition completes.
        armed: bool,
    },
    /// Fully visible.
    Shown {
        /// Whether auto-hide is still armed.
        armed: bool,
        /// The pending auto-hide timer, present only while armed.
        timer: Option<TimerId>,
    },
    /// Hide transition in progress; destruction follows unconditionally.
    Hiding,
}

impl Lifecycle {
    /// Returns whether auto-hide is currently armed.
    pub fn is_armed(&self) -> bool {
        matches!(
            self,
            Lifecycle::Showing { armed: true } | Lifecycle::Shown { armed: true, .. }
        )
    }

    /// Clears the armed flag, returning a pending timer to cancel, if any.
    ///
    /// Once cleared the flag is never re-set; hover-leave intentionally has
    /// no inverse operation.
    pub fn disarm(&mut self) -> Option<TimerId> {
        match self {
            Lifecycle::Showing { armed } => {
                *armed = false;
                None
            }
            Lifecycle::Shown { armed, timer } => {
                *armed = false;
                timer.take()
            }
            _ => None,
        }
    }
}

/// One live notification.
#[derive(Debug)]
pub struct Notification {
    /// Merged configuration, immutable after construction.
    pub(crate) config: NotificationConfig,
    /// Caller-supplied metadata, immutable after construction.
    pub(crate) metadata: HashMap<String, String>,
    /// The owned panel.
    pub(crate) panel: crate::panel::PanelId,
    /// Container the panel is attached to, once attached.
    pub(crate) container: Option<crate::panel::ContainerId>,
    /// Current lifecycle state.
    pub(crate) state: Lifecycle,
}

impl Notification {
    /// The notification's configuration.
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// The caller-supplied metadata.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The owned panel.
    pub fn panel(&self) -> crate::panel::PanelId {
        self.panel
    }

    /// The container the panel is attached to, if any.
    pub fn container(&self) -> Option<crate::panel::ContainerId> {
        self.container
    }

    /// Current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = NotificationConfig::default();
        assert!(config.auto_hide);
        assert_eq!(config.auto_hide_delay, Duration::from_millis(3000));
        assert!(config.classes.is_empty());
        assert!(config.prepend);
        assert!(config.start_style.is_none());
        assert_eq!(config.show_style.get(StyleProperty::Opacity), Some(1.0));
        assert_eq!(config.show_duration, Duration::from_millis(250));
        assert_eq!(config.hide_style.get(StyleProperty::Opacity), Some(0.0));
        assert_eq!(config.hide_duration, Duration::from_millis(500));
        assert_eq!(config.on_hover, HoverResponse::DisarmAutoHide);
        assert_eq!(config.on_press, PressResponse::TrackSwipe);
    }

    #[test]
    fn test_zero_delay_disables_auto_hide() {
        let config = NotificationConfig::default().with_auto_hide_delay(Duration::ZERO);
        assert!(config.auto_hide);
        assert!(!config.arms_auto_hide());

        let config = NotificationConfig::default().with_auto_hide(false);
        assert!(!config.arms_auto_hide());
    }

    #[test]
    fn test_initial_style_falls_back_to_hide_style() {
        let config = NotificationConfig::default();
        assert_eq!(config.initial_style(), config.hide_style);

        let start = Style::new().with(StyleProperty::Opacity, 0.25);
        let config = NotificationConfig::default().with_start_style(start.clone());
        assert_eq!(config.initial_style(), start);
    }

    #[test]
    fn test_disarm_is_permanent_per_state() {
        let mut state = Lifecycle::Showing { armed: true };
        assert!(state.is_armed());
        assert_eq!(state.disarm(), None);
        assert!(!state.is_armed());

        let mut state = Lifecycle::Shown {
            armed: false,
            timer: None,
        };
        assert_eq!(state.disarm(), None);
        assert!(!state.is_armed());
    }
}
