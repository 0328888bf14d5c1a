//! Topic-tagged loggers and the per-call dispatch pipeline.
//!
//! Loggers form a tree. Each node holds at most one topic label, an optional
//! [`LoggerConfig`] and a shared handle to its parent; the node's topic path
//! is its parent's path followed by its own label. Children never hold their
//! parent exclusively, and parents never point at children.
//!
//! Every logging call runs the same pipeline:
//!
//! 1. capture the timestamp and topic path once,
//! 2. compare the level with the configured threshold; below it, run the
//!    effect only if `force_effect` is set, then stop,
//! 3. transform each argument for display,
//! 4. format the header and write the line to the level's channel,
//! 5. run the effect with the original, untransformed arguments.
//!
//! Nothing in the pipeline catches panics raised by a transform, prefix,
//! date format or effect; they unwind out of the logging call.
//!
//! # Example
//!
//! ```rust
//! use mono_logger::{Level, Logger, LoggerConfig};
//!
//! let root = Logger::new();
//! let db = root.topic("app").topic("db");
//! assert_eq!(db.topics(), vec!["app", "db"]);
//!
//! let quiet = root.topic_with("jobs", LoggerConfig::new().level(Level::Warn));
//! quiet.debug(&[&"not shown"]);
//! quiet.warn(&[&"queue is backing up:", &128]);
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::config::LoggerConfig;
use crate::effect::Timestamp;
use crate::format;
use crate::level::Level;

static DEFAULT_CONFIG: LazyLock<LoggerConfig> = LazyLock::new(LoggerConfig::new);

struct Node {
    subject: Option<String>,
    config: Option<Arc<LoggerConfig>>,
    parent: Option<Logger>,
}

/// A node in the logger tree.
///
/// Cloning is cheap and yields a handle to the same node. A logger never
/// changes after construction.
#[derive(Clone)]
pub struct Logger {
    node: Arc<Node>,
}

impl Logger {
    /// An anonymous root with the default configuration.
    pub fn new() -> Self {
        Self::from_parts(None, None, None)
    }

    /// An anonymous root with `config`.
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::from_parts(None, Some(config), None)
    }

    /// A labelled root with `config`.
    pub fn root(subject: impl Into<String>, config: LoggerConfig) -> Self {
        Self::from_parts(Some(subject.into()), Some(config), None)
    }

    /// Build a node from its three parts, any of which may be absent.
    ///
    /// An empty label is treated as no label.
    pub fn from_parts(
        subject: Option<String>,
        config: Option<LoggerConfig>,
        parent: Option<&Logger>,
    ) -> Self {
        Self::from_shared(subject, config.map(Arc::new), parent.cloned())
    }

    fn from_shared(
        subject: Option<String>,
        config: Option<Arc<LoggerConfig>>,
        parent: Option<Logger>,
    ) -> Self {
        Self {
            node: Arc::new(Node {
                subject: subject.filter(|s| !s.is_empty()),
                config,
                parent,
            }),
        }
    }

    /// A child logger labelled `subject` that shares this logger's
    /// configuration.
    pub fn topic(&self, subject: impl Into<String>) -> Logger {
        Self::from_shared(Some(subject.into()), self.node.config.clone(), Some(self.clone()))
    }

    /// A child logger labelled `subject` with its own configuration.
    pub fn topic_with(&self, subject: impl Into<String>, config: LoggerConfig) -> Logger {
        Self::from_shared(Some(subject.into()), Some(Arc::new(config)), Some(self.clone()))
    }

    /// Topic labels from the root down to this node.
    pub fn topics(&self) -> Vec<String> {
        let mut topics = match &self.node.parent {
            Some(parent) => parent.topics(),
            None => Vec::new(),
        };
        if let Some(subject) = &self.node.subject {
            topics.push(subject.clone());
        }
        topics
    }

    /// This node's own label.
    pub fn subject(&self) -> Option<&str> {
        self.node.subject.as_deref()
    }

    /// The logger this one was derived from.
    pub fn parent(&self) -> Option<&Logger> {
        self.node.parent.as_ref()
    }

    /// The effective configuration.
    pub fn config(&self) -> &LoggerConfig {
        self.node.config.as_deref().unwrap_or(&*DEFAULT_CONFIG)
    }

    /// Alias for [`debug`](Self::debug).
    pub fn log(&self, args: &[&dyn fmt::Display]) {
        self.log_at(Level::Debug, args);
    }

    /// Log at `debug`.
    pub fn debug(&self, args: &[&dyn fmt::Display]) {
        self.log_at(Level::Debug, args);
    }

    /// Log at `verbose`.
    pub fn verbose(&self, args: &[&dyn fmt::Display]) {
        self.log_at(Level::Verbose, args);
    }

    /// Log at `info`.
    pub fn info(&self, args: &[&dyn fmt::Display]) {
        self.log_at(Level::Info, args);
    }

    /// Log at `warn`.
    pub fn warn(&self, args: &[&dyn fmt::Display]) {
        self.log_at(Level::Warn, args);
    }

    /// Log at `error`.
    pub fn error(&self, args: &[&dyn fmt::Display]) {
        self.log_at(Level::Error, args);
    }

    /// Log at `fatal`.
    pub fn fatal(&self, args: &[&dyn fmt::Display]) {
        self.log_at(Level::Fatal, args);
    }

    /// Run the dispatch pipeline for one call at `level`.
    pub fn log_at(&self, level: Level, args: &[&dyn fmt::Display]) {
        let timestamp = chrono::Local::now();
        let topics = self.topics();
        let config = self.config();

        if !level.passes(config.threshold()) {
            if config.forces_effect() {
                self.run_effect(&timestamp, level, &topics, args);
            }
            return;
        }

        let rendered: Vec<String> = args.iter().map(|arg| config.render(*arg)).collect();
        let header = format::header(
            &config.render_timestamp(&timestamp),
            level,
            config.render_prefix().as_deref(),
            &topics,
        );
        config.write(level, &header, &rendered);

        self.run_effect(&timestamp, level, &topics, args);
    }

    fn run_effect(
        &self,
        timestamp: &Timestamp,
        level: Level,
        topics: &[String],
        args: &[&dyn fmt::Display],
    ) {
        if let Some(effect) = self.config().effect_ref() {
            effect.apply(timestamp, level, topics, args);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("topics", &self.topics())
            .field("config", self.config())
            .finish()
    }
}
