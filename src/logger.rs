//! This module defines the logger handle, its sinks and the asynchronous
//! emission path.
use crate::{format, CallSite, LogConfig, LogLevel};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Errors surfaced by logger construction.
///
/// Emission and profiling never return errors: a log call must not become
/// the reason its caller fails, so sink failures are swallowed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// [`Logger::init_global`] was called after the global handle was
    /// already set (explicitly, or implicitly by [`Logger::global`]).
    #[error("global logger is already initialized")]
    GlobalAlreadyInitialized,
}

/// The process-wide handle, set at most once.
static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// State guarded by the single sink mutex.
///
/// Console writes, file writes and the profiling map all serialize on this
/// one lock, so a line reaches a sink whole and profiling contends with
/// emission by design.
pub(crate) struct SinkState {
    /// In-flight profiling intervals, keyed by tag.
    pub(crate) profiling: HashMap<String, Instant>,
}

pub(crate) struct Shared {
    sinks: Mutex<SinkState>,
    config: RwLock<Arc<LogConfig>>,
    in_flight: AtomicUsize,
}

impl Shared {
    /// Acquires the sink lock, recovering from poisoning.
    ///
    /// A panic elsewhere while holding this lock must not take the logger
    /// down with it; the sink state remains usable.
    pub(crate) fn lock_sinks(&self) -> MutexGuard<'_, SinkState> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes one formatted line to every enabled sink.
    ///
    /// Holds the sink lock for the duration, so concurrent emissions never
    /// interleave within a line. Sink failures are dropped.
    fn write_line(&self, line: &str, level: LogLevel, config: &LogConfig) {
        let _sinks = self.lock_sinks();

        if config.console_output {
            eprint!("{}", level.paint(line));
            let _ = std::io::stderr().flush();
        }

        if config.file_output {
            let file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&config.log_filename);
            if let Ok(mut file) = file {
                let _ = file.write_all(line.as_bytes()).and_then(|()| file.flush());
            }
        }
    }

    fn finish_emission(&self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

/// A logging and micro-profiling handle.
///
/// Cloning is cheap and every clone shares the same sinks, configuration
/// and profiling map. Construct one explicitly with [`Logger::new`], or
/// use the process-wide handle via [`Logger::global`].
#[derive(Clone)]
pub struct Logger {
    pub(crate) shared: Arc<Shared>,
}

impl Logger {
    /// Creates a logger with the given configuration.
    pub fn new(config: LogConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                sinks: Mutex::new(SinkState {
                    profiling: HashMap::new(),
                }),
                config: RwLock::new(Arc::new(config)),
                in_flight: AtomicUsize::new(0),
            }),
        }
    }

    /// Initializes the process-wide logger.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GlobalAlreadyInitialized`] if the global handle was
    /// already set, either by a previous call or implicitly by
    /// [`Logger::global`].
    pub fn init_global(config: LogConfig) -> Result<(), Error> {
        GLOBAL
            .set(Logger::new(config))
            .map_err(|_| Error::GlobalAlreadyInitialized)
    }

    /// Returns the process-wide logger, creating it with the default
    /// configuration if [`Logger::init_global`] was never called.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(|| Logger::new(LogConfig::default()))
    }

    /// Replaces the configuration.
    ///
    /// Log calls already past formatting keep the snapshot they took;
    /// subsequent calls observe the new configuration.
    pub fn set_config(&self, config: LogConfig) {
        let mut slot = self
            .shared
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Arc::new(config);
    }

    /// Takes an immutable snapshot of the current configuration.
    pub(crate) fn config_snapshot(&self) -> Arc<LogConfig> {
        self.shared
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Logs one message.
    ///
    /// The line is rendered from the configured template on the calling
    /// thread, then handed to a detached task for the actual sink writes,
    /// so the caller never waits on I/O. There is no bound on the number
    /// of in-flight emissions and no ordering guarantee across callers;
    /// output still pending when the process exits is dropped unless
    /// [`Logger::drain`] is awaited first.
    ///
    /// This method never fails. Outside a tokio runtime the sink writes
    /// run inline on the calling thread instead of being spawned.
    ///
    /// The [`log!`](crate::log) macro family wraps this with implicit
    /// call-site capture and variadic message concatenation.
    pub fn log(&self, level: LogLevel, site: CallSite, message: &str) {
        let config = self.config_snapshot();
        let line = format::format_message(&config, message, level, &site);

        self.shared.in_flight.fetch_add(1, Ordering::AcqRel);
        let shared = self.shared.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    shared.write_line(&line, level, &config);
                    shared.finish_emission();
                });
            }
            Err(_) => {
                shared.write_line(&line, level, &config);
                shared.finish_emission();
            }
        }
    }

    /// Waits until no emission task is in flight.
    ///
    /// Optional shutdown hook: without it, exiting the process may drop
    /// pending output, which is the documented best-effort baseline.
    pub async fn drain(&self) {
        while self.shared.in_flight.load(Ordering::Acquire) != 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}
