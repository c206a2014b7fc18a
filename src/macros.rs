//! This module defines the variadic logging macros.
//!
//! The macros concatenate any number of `Display` arguments into one
//! message with no separator, capture the call site implicitly and hand
//! everything to [`Logger::log`](crate::Logger::log).

/// Logs a message at an explicit level.
///
/// Arguments after the level are rendered with `Display` and concatenated
/// in order, with nothing inserted between them:
///
/// ```no_run
/// # use minilog::{log, LogConfig, LogLevel, Logger};
/// # let logger = Logger::new(LogConfig::default());
/// log!(logger, LogLevel::Warning, "retrying in ", 250, "ms");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut message = ::std::string::String::new();
        $(
            message.push_str(&::std::format!("{}", $arg));
        )*
        $logger.log($level, $crate::callsite!(), &message);
    }};
}

/// Logs at [`LogLevel::Info`](crate::LogLevel::Info).
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $arg)*)
    };
}

/// Logs at [`LogLevel::Warning`](crate::LogLevel::Warning).
#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning $(, $arg)*)
    };
}

/// Logs at [`LogLevel::Error`](crate::LogLevel::Error).
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $arg)*)
    };
}

/// Logs at [`LogLevel::Debug`](crate::LogLevel::Debug).
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $arg)*)
    };
}
