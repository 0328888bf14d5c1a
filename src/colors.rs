//! ANSI coloring for line headers.
//!
//! Backed by `colored`, so the usual `NO_COLOR` / `CLICOLOR_FORCE` switches
//! and [`colored::control::set_override`] apply.

use colored::{ColoredString, Colorize};

use crate::level::Level;

fn styled(level: Level, text: &str) -> ColoredString {
    match level {
        Level::Debug => text.bright_black(),
        Level::Verbose => text.cyan(),
        Level::Info => text.green(),
        Level::Warn => text.yellow(),
        Level::Error => text.red(),
        Level::Fatal => text.magenta(),
    }
}

/// Paint `text` in the color of `level`.
pub fn paint(level: Level, text: &str) -> String {
    styled(level, text).to_string()
}

/// Paint one topic label.
pub fn paint_topic(topic: &str) -> String {
    topic.magenta().to_string()
}

/// Paint a formatted timestamp.
pub fn paint_timestamp(timestamp: &str) -> String {
    timestamp.bright_black().to_string()
}
