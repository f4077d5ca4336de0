//! Utility types.
//!
//! Configuration of the message resources and the log levels used by
//! [`log_event!`](crate::log_event).

pub mod config;
pub mod logging;

pub use config::MessageConfig;
pub use logging::LogLevel;
