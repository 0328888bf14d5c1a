//! Logger configuration.
//!
//! A [`LoggerConfig`] is built once with consuming `with`-style setters and
//! never changes afterwards. Loggers share it through an `Arc`, so a child
//! created without its own configuration behaves exactly like its parent.
//!
//! # Example
//!
//! ```rust
//! use mono_logger::{Level, LoggerConfig};
//!
//! let config = LoggerConfig::new()
//!     .level(Level::Info)
//!     .prefix(|| "my-app".to_string())
//!     .transform(|arg| format!("<{}>", arg))
//!     .date_format(|ts| ts.to_rfc3339());
//!
//! assert_eq!(config.threshold(), Level::Info);
//! assert!(!config.forces_effect());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::console::{Console, StdConsole};
use crate::effect::{Effect, Timestamp};
use crate::format;
use crate::level::Level;

type TransformFn = Arc<dyn Fn(&dyn fmt::Display) -> String + Send + Sync>;
type PrefixFn = Arc<dyn Fn() -> String + Send + Sync>;
type DateFormatFn = Arc<dyn Fn(&Timestamp) -> String + Send + Sync>;

/// Options recognized by a [`Logger`](crate::Logger).
///
/// Every option is optional:
///
/// | option         | default                                   |
/// |----------------|-------------------------------------------|
/// | `level`        | `debug` (everything is shown)             |
/// | `effect`       | none                                      |
/// | `force_effect` | `false`                                   |
/// | `transform`    | each argument rendered with `Display`     |
/// | `prefix`       | none                                      |
/// | `date_format`  | [`format::default_timestamp`]             |
/// | `console`      | [`StdConsole`]                            |
#[derive(Clone, Default)]
pub struct LoggerConfig {
    level: Option<Level>,
    effect: Option<Effect>,
    force_effect: bool,
    transform: Option<TransformFn>,
    prefix: Option<PrefixFn>,
    date_format: Option<DateFormatFn>,
    console: Option<Arc<dyn Console>>,
}

impl LoggerConfig {
    /// A configuration with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum level that is formatted and written.
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Side-effect run after each written line.
    pub fn effect(mut self, effect: impl Into<Effect>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    /// Run the effect even for messages below [`level`](Self::level).
    pub fn force_effect(mut self, force: bool) -> Self {
        self.force_effect = force;
        self
    }

    /// Render each logged argument for display. The effect still receives
    /// the original arguments.
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn fmt::Display) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(f));
        self
    }

    /// Text inserted after the level tag.
    pub fn prefix<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.prefix = Some(Arc::new(f));
        self
    }

    /// Replace the default timestamp rendering.
    pub fn date_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&Timestamp) -> String + Send + Sync + 'static,
    {
        self.date_format = Some(Arc::new(f));
        self
    }

    /// Write lines to `console` instead of the process streams.
    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Some(Arc::new(console));
        self
    }

    /// The display threshold, `debug` when unset.
    pub fn threshold(&self) -> Level {
        self.level.unwrap_or_default()
    }

    /// The configured effect, if any.
    pub fn effect_ref(&self) -> Option<&Effect> {
        self.effect.as_ref()
    }

    /// Whether the effect runs for messages below the threshold.
    pub fn forces_effect(&self) -> bool {
        self.force_effect
    }

    pub(crate) fn render(&self, arg: &dyn fmt::Display) -> String {
        match &self.transform {
            Some(transform) => transform(arg),
            None => arg.to_string(),
        }
    }

    pub(crate) fn render_prefix(&self) -> Option<String> {
        self.prefix.as_ref().map(|prefix| prefix())
    }

    pub(crate) fn render_timestamp(&self, timestamp: &Timestamp) -> String {
        match &self.date_format {
            Some(date_format) => date_format(timestamp),
            None => format::default_timestamp(timestamp),
        }
    }

    pub(crate) fn write(&self, level: Level, header: &str, args: &[String]) {
        match &self.console {
            Some(console) => console.emit(level.channel(), header, args),
            None => StdConsole.emit(level.channel(), header, args),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("effect", &self.effect)
            .field("force_effect", &self.force_effect)
            .field("transform", &self.transform.is_some())
            .field("prefix", &self.prefix.is_some())
            .field("date_format", &self.date_format.is_some())
            .field("console", &self.console.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LoggerConfig::new();

        assert_eq!(config.threshold(), Level::Debug);
        assert!(config.effect_ref().is_none());
        assert!(!config.forces_effect());
        assert_eq!(config.render(&42), "42");
        assert_eq!(config.render_prefix(), None);
    }

    #[test]
    fn transform_renders_each_argument() {
        let config = LoggerConfig::new().transform(|arg| format!("T:{}", arg));

        assert_eq!(config.render(&"a"), "T:a");
        assert_eq!(config.render(&1.5), "T:1.5");
    }

    #[test]
    fn date_format_overrides_default() {
        let config = LoggerConfig::new().date_format(|_| "NOW".to_string());

        assert_eq!(config.render_timestamp(&chrono::Local::now()), "NOW");
    }

    #[test]
    fn prefix_is_called_per_render() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = LoggerConfig::new().prefix(move || {
            format!("#{}", counter.fetch_add(1, Ordering::SeqCst))
        });

        assert_eq!(config.render_prefix().as_deref(), Some("#0"));
        assert_eq!(config.render_prefix().as_deref(), Some("#1"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn debug_hides_callables() {
        let config = LoggerConfig::new().level(Level::Warn).prefix(String::new);
        let rendered = format!("{:?}", config);

        assert!(rendered.contains("level: Some(Warn)"));
        assert!(rendered.contains("prefix: true"));
        assert!(rendered.contains("transform: false"));
    }
}
