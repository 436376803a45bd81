//! Core systems for driftnote.
//!
//! This crate provides the plumbing under the driftnote notification widget:
//!
//! - **Timers**: one-shot and repeating timers driven by a caller-supplied
//!   clock, so a cooperative event loop (or a test) decides when time moves
//! - **Signal/Slot System**: type-safe callbacks for collaborator
//!   notifications
//! - **Logging**: `tracing` target names for filtering by subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use driftnote_core::Signal;
//!
//! let dismissed = Signal::<String>::new();
//!
//! let conn_id = dismissed.connect(|alert_id| {
//!     println!("dismissed: {alert_id}");
//! });
//!
//! dismissed.emit("alert-7".to_string());
//! dismissed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use driftnote_core::TimerManager;
//! use std::time::{Duration, Instant};
//!
//! let mut timers = TimerManager::new();
//! let t0 = Instant::now();
//!
//! let id = timers.start_one_shot(t0, Duration::from_millis(100));
//! assert!(timers.process_expired(t0).is_empty());
//!
//! let fired = timers.process_expired(t0 + Duration::from_millis(100));
//! assert_eq!(fired, vec![id]);
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, SignalError, TimerError};
pub use signal::{ConnectionId, Signal};
pub use timer::{TimerId, TimerKind, TimerManager};
