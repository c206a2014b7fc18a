//! This module renders a log line from the configured message template.
use crate::{CallSite, LogConfig, LogLevel};
use chrono::Local;

// The recognized placeholders, in substitution order.
const TIMESTAMP: &str = "%timestamp%";
const LEVEL: &str = "%level%";
const MESSAGE: &str = "%message%";
const FILE: &str = "%file%";
const LINE: &str = "%line%";
const FUNCTION: &str = "%function%";

/// Renders one log line from the configured template.
///
/// Each recognized placeholder is substituted exactly once, in a fixed
/// order (`%timestamp%`, `%level%`, `%message%`, `%file%`, `%line%`,
/// `%function%`), at its first occurrence in the string as it exists at
/// that step. There is no re-scanning: a placeholder appearing twice keeps
/// its second occurrence as literal text, and replacement text injected by
/// an earlier step is visible to the single find of a later step. A
/// placeholder absent from the template is skipped silently.
///
/// The timestamp is wall-clock local time at the moment of formatting,
/// rendered `YYYY-MM-DD HH:MM:SS`. Substituted values are inserted
/// literally, with no escaping.
pub fn format_message(
    config: &LogConfig,
    message: &str,
    level: LogLevel,
    site: &CallSite,
) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut line = config.log_format.clone();
    replace_first(&mut line, TIMESTAMP, &timestamp);
    replace_first(&mut line, LEVEL, level.prefix());
    replace_first(&mut line, MESSAGE, message);
    replace_first(&mut line, FILE, site.file);
    replace_first(&mut line, LINE, &site.line.to_string());
    replace_first(&mut line, FUNCTION, site.function);
    line
}

/// Replaces the first occurrence of `token` in `text`, if any.
fn replace_first(text: &mut String, token: &str, value: &str) {
    if let Some(start) = text.find(token) {
        text.replace_range(start..start + token.len(), value);
    }
}
