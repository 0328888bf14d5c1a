//! Bridge from log calls to `tracing` events.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use crate::effect::Effect;
use crate::level::Level;

/// An effect that re-emits every call as a `tracing` event.
///
/// Levels map onto the closest `tracing` level: `debug` becomes `TRACE`,
/// `verbose` becomes `DEBUG`, and `error` and `fatal` both become `ERROR`.
/// The event carries the colon-joined topic path in a `topics` field and the
/// space-joined messages as its message.
///
/// # Example
///
/// ```rust,ignore
/// use mono_logger::{tracing_effect, Logger, LoggerConfig};
///
/// tracing_subscriber::fmt().init();
/// let logger = Logger::root("api", LoggerConfig::new().effect(tracing_effect()));
/// logger.warn(&[&"slow response"]);
/// ```
pub fn tracing_effect() -> Effect {
    Effect::callable(|_timestamp, level, topics, messages| {
        let topics = topics.join(":");
        let message = messages
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        match level {
            Level::Debug => tracing::trace!(topics = %topics, "{}", message),
            Level::Verbose => tracing::debug!(topics = %topics, "{}", message),
            Level::Info => tracing::info!(topics = %topics, "{}", message),
            Level::Warn => tracing::warn!(topics = %topics, "{}", message),
            Level::Error | Level::Fatal => {
                let fatal = level == Level::Fatal;
                tracing::error!(topics = %topics, fatal, "{}", message)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn forwards_message_and_topics() {
        let topics = vec!["db".to_string(), "pool".to_string()];
        tracing_effect().apply(&chrono::Local::now(), Level::Warn, &topics, &[&"exhausted", &3]);

        assert!(logs_contain("exhausted 3"));
        assert!(logs_contain("topics=db:pool"));
        assert!(logs_contain("WARN"));
    }

    #[traced_test]
    #[test]
    fn fatal_is_flagged_on_error_events() {
        tracing_effect().apply(&chrono::Local::now(), Level::Fatal, &[], &[&"disk gone"]);

        assert!(logs_contain("ERROR"));
        assert!(logs_contain("fatal=true"));
    }
}
