//! Minimalist asynchronous logging and micro-profiling.
//!
//! A [`Logger`] turns a severity level, a call site and a message into a
//! line rendered from a configurable template, then hands the line to a
//! detached task so the caller never waits on I/O. The same handle tracks
//! start/end timestamps per named tag and reports elapsed time as a
//! debug-level log line.
//!
//! ```no_run
//! use minilog::{log_info, LogConfig, Logger};
//!
//! # async fn demo() {
//! let logger = Logger::new(LogConfig::default());
//! log_info!(logger, "connected to ", "127.0.0.1", ":", 4000);
//!
//! logger.start_profiling("handshake");
//! // ... the region being measured ...
//! logger.end_profiling("handshake");
//! # }
//! ```
mod callsite;
mod config;
mod format;
mod level;
mod logger;
mod macros;
mod profiling;

pub use callsite::CallSite;
pub use config::{LogConfig, DEFAULT_LOG_FORMAT};
pub use format::format_message;
pub use level::LogLevel;
pub use logger::{Error, Logger};
