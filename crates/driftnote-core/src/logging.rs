//! Logging facilities for driftnote.
//!
//! driftnote uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "driftnote_core";
    /// Timer system target.
    pub const TIMER: &str = "driftnote_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "driftnote_core::signal";
    /// Notification lifecycle target.
    pub const LIFECYCLE: &str = "driftnote::lifecycle";
    /// Swipe recognizer target.
    pub const SWIPE: &str = "driftnote::swipe";
    /// Style animation target.
    pub const ANIMATION: &str = "driftnote::animation";
}
