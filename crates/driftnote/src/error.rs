//! Error types for the notification widget.

use crate::notification::NotificationId;
use crate::panel::ContainerId;

/// Errors from notification lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// The notification ID does not name a live notification.
    #[error("unknown notification: {0:?}")]
    UnknownNotification(NotificationId),

    /// The container ID does not name a registered container.
    #[error("unknown container: {0:?}")]
    UnknownContainer(ContainerId),

    /// Attach was called on a notification that is already attached.
    #[error("notification {0:?} is already attached")]
    AlreadyAttached(NotificationId),

    /// Show was called on a notification that is not hidden.
    #[error("notification {0:?} is already showing or shown")]
    AlreadyVisible(NotificationId),

    /// Hide was called on a notification that is already hiding.
    #[error("notification {0:?} is already hiding")]
    AlreadyHiding(NotificationId),

    /// Show or hide was called before the notification was attached.
    #[error("notification {0:?} is not attached to a container")]
    NotAttached(NotificationId),
}

/// Result type for lifecycle operations.
pub type Result<T> = std::result::Result<T, LifecycleError>;
