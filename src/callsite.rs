//! This module captures the source location of a log call.

/// The source location a log line is attributed to.
///
/// Captured at the log call, not at formatting time. The [`callsite!`]
/// macro produces one for the current invocation point; explicit
/// construction is available for call sites that want to attribute a line
/// elsewhere (e.g. a wrapper forwarding its own caller's location).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Source file path, as reported by `file!()`.
    pub file: &'static str,
    /// Line number within `file`.
    pub line: u32,
    /// Fully qualified path of the enclosing function.
    pub function: &'static str,
}

impl CallSite {
    /// Creates a call site from explicit components.
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/// Captures a [`CallSite`] for the current invocation point.
///
/// `file!()` and `line!()` are resolved where the macro is written. The
/// enclosing function name is recovered from the type name of a local
/// item, which the compiler qualifies with the full module path of the
/// surrounding function.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(here);
        let name = name.strip_suffix("::here").unwrap_or(name);
        $crate::CallSite::new(file!(), line!(), name)
    }};
}
