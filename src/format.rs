//! Line header formatting.

use crate::colors;
use crate::effect::Timestamp;
use crate::level::Level;

/// Default timestamp rendering: `M/D/YYYY, HH:MM:SS`, 24-hour clock.
///
/// ```
/// use chrono::TimeZone;
/// use mono_logger::format::default_timestamp;
///
/// let ts = chrono::Local.with_ymd_and_hms(2024, 7, 26, 21, 5, 28).unwrap();
/// assert_eq!(default_timestamp(&ts), "7/26/2024, 21:05:28");
/// ```
pub fn default_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format("%-m/%-d/%Y, %H:%M:%S").to_string()
}

/// Assemble `"{timestamp} [{CODE}]{ prefix}{ a:b:c}"`.
///
/// The prefix part is left out when `prefix` is `None`; the topic part is left
/// out when `topics` is empty. The timestamp, level tag and each topic are
/// colorized.
pub fn header(timestamp: &str, level: Level, prefix: Option<&str>, topics: &[String]) -> String {
    let mut line = format!(
        "{} [{}]",
        colors::paint_timestamp(timestamp),
        colors::paint(level, level.code())
    );
    if let Some(prefix) = prefix {
        line.push(' ');
        line.push_str(prefix);
    }
    if !topics.is_empty() {
        let path = topics
            .iter()
            .map(|topic| colors::paint_topic(topic))
            .collect::<Vec<_>>()
            .join(":");
        line.push(' ');
        line.push_str(&path);
    }
    line
}
