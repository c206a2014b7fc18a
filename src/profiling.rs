//! This module tracks elapsed time for tagged code regions.
//!
//! A tag identifies one open interval. Tags live in the map guarded by the
//! same mutex as the sinks, so profiling and log emission serialize
//! against each other.
use crate::{LogLevel, Logger};
use std::time::Instant;

impl Logger {
    /// Records "now" as the start of the interval named `tag`.
    ///
    /// An unclosed prior interval with the same tag is overwritten. An
    /// interval that is never closed stays in the map until the process
    /// exits.
    pub fn start_profiling(&self, tag: impl Into<String>) {
        self.shared
            .lock_sinks()
            .profiling
            .insert(tag.into(), Instant::now());
    }

    /// Closes the interval named `tag` and reports its duration.
    ///
    /// Emits one debug-level line with the elapsed microseconds through
    /// the normal asynchronous path and removes the entry. If `tag` has no
    /// open interval this is a silent no-op.
    pub fn end_profiling(&self, tag: &str) {
        let elapsed = self
            .shared
            .lock_sinks()
            .profiling
            .remove(tag)
            .map(|start| start.elapsed());
        if let Some(elapsed) = elapsed {
            self.log(
                LogLevel::Debug,
                crate::callsite!(),
                &format!(
                    "Execution time for {tag}: {} microseconds",
                    elapsed.as_micros()
                ),
            );
        }
    }

    /// Times a synchronous call and returns its result unchanged.
    ///
    /// Emits one debug-level duration line after `func` returns. A panic
    /// inside `func` unwinds through this wrapper untouched; the timing
    /// already taken is discarded and nothing is emitted.
    pub fn profile_function<F, R>(&self, tag: &str, func: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = func();
        let elapsed = start.elapsed();
        self.log(
            LogLevel::Debug,
            crate::callsite!(),
            &format!(
                "Execution time for {tag}: {} microseconds",
                elapsed.as_micros()
            ),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{LogConfig, Logger};
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, Instant};

    fn file_only_logger(path: &Path) -> Logger {
        Logger::new(LogConfig {
            console_output: false,
            file_output: true,
            log_filename: path.to_path_buf(),
            log_format: "%level% %message%\n".to_string(),
            ..LogConfig::default()
        })
    }

    /// Pulls the microsecond count out of a duration line.
    fn reported_micros(line: &str) -> u128 {
        line.rsplit(' ')
            .nth(1)
            .expect("duration line shape")
            .parse()
            .expect("numeric duration")
    }

    #[tokio::test]
    async fn start_then_end_emits_one_debug_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("profile.log");
        let logger = file_only_logger(&path);

        logger.start_profiling("x");
        logger.end_profiling("x");
        // A closed tag is gone; ending it again must emit nothing.
        logger.end_profiling("x");
        logger.drain().await;

        let contents = fs::read_to_string(&path).expect("log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[*] Execution time for x: "));
        assert!(lines[0].ends_with(" microseconds"));
    }

    #[tokio::test]
    async fn end_without_start_is_a_silent_noop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noop.log");
        let logger = file_only_logger(&path);

        logger.end_profiling("never-started");
        logger.drain().await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn restarting_a_tag_overwrites_the_open_interval() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("overwrite.log");
        let logger = file_only_logger(&path);

        logger.start_profiling("x");
        std::thread::sleep(Duration::from_millis(50));
        logger.start_profiling("x");
        logger.end_profiling("x");
        logger.drain().await;

        let contents = fs::read_to_string(&path).expect("log file");
        // Measured from the second start, not the first.
        assert!(reported_micros(contents.trim_end()) < 50_000);
    }

    #[tokio::test]
    async fn profile_function_returns_the_result_and_reports_elapsed_time() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wrapped.log");
        let logger = file_only_logger(&path);

        let before = Instant::now();
        let value = logger.profile_function("f", || {
            std::thread::sleep(Duration::from_millis(20));
            7 * 6
        });
        let outer = before.elapsed();
        logger.drain().await;

        assert_eq!(value, 42);
        let contents = fs::read_to_string(&path).expect("log file");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Execution time for f: "));

        let micros = reported_micros(lines[0]);
        assert!(micros >= 20_000, "reported {micros}us for a 20ms sleep");
        assert!(
            micros <= outer.as_micros() + 5_000,
            "reported {micros}us, independently measured {}us",
            outer.as_micros()
        );
    }

    #[tokio::test]
    async fn profile_function_propagates_panics() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("panic.log");
        let logger = file_only_logger(&path);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.profile_function("boom", || -> i32 { panic!("inner failure") })
        }));
        logger.drain().await;

        assert!(result.is_err());
        // The timing log is skipped when the callable fails.
        assert!(!path.exists());
    }
}
