//! Test doubles for code that logs.
//!
//! [`CaptureConsole`] stands in for the process streams and keeps every line a
//! logger writes; [`EffectRecorder`] stands in for an external sink and keeps
//! every effect call. Both are cheap handles: clone one into a configuration
//! and keep the other to assert on.
//!
//! # Examples
//!
//! ```rust
//! use mono_logger::testing::{CaptureConsole, EffectRecorder};
//! use mono_logger::{assert_emitted, Channel, Level, Logger, LoggerConfig};
//!
//! let console = CaptureConsole::new();
//! let recorder = EffectRecorder::new();
//! let logger = Logger::with_config(
//!     LoggerConfig::new()
//!         .level(Level::Info)
//!         .console(console.clone())
//!         .effect(recorder.effect()),
//! );
//!
//! logger.debug(&[&"dropped"]);
//! logger.warn(&[&"kept"]);
//!
//! assert_emitted!(console, [Channel::Warn]);
//! assert_eq!(recorder.count(), 1);
//! assert_eq!(recorder.calls()[0].messages, vec!["kept"]);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::console::{Channel, Console};
use crate::effect::{share, Effect, EffectFn, SingleEffect, Timestamp};
use crate::level::Level;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One line written to a [`CaptureConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    /// Channel the line went to.
    pub channel: Channel,
    /// Formatted header, colors included.
    pub header: String,
    /// Transformed arguments.
    pub args: Vec<String>,
}

/// A [`Console`] that records lines instead of printing them.
#[derive(Debug, Clone, Default)]
pub struct CaptureConsole {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl CaptureConsole {
    /// An empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line so far, oldest first.
    pub fn lines(&self) -> Vec<CapturedLine> {
        lock(&self.lines).clone()
    }

    /// The channel of every line so far.
    pub fn channels(&self) -> Vec<Channel> {
        lock(&self.lines).iter().map(|line| line.channel).collect()
    }

    /// Number of lines written.
    pub fn len(&self) -> usize {
        lock(&self.lines).len()
    }

    /// Whether nothing was written.
    pub fn is_empty(&self) -> bool {
        lock(&self.lines).is_empty()
    }

    /// Forget every recorded line.
    pub fn clear(&self) {
        lock(&self.lines).clear();
    }
}

impl Console for CaptureConsole {
    fn emit(&self, channel: Channel, header: &str, args: &[String]) {
        lock(&self.lines).push(CapturedLine {
            channel,
            header: header.to_string(),
            args: args.to_vec(),
        });
    }
}

/// One effect invocation seen by an [`EffectRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Timestamp passed to the effect.
    pub timestamp: Timestamp,
    /// Level passed to the effect.
    pub level: Level,
    /// Topic path passed to the effect.
    pub topics: Vec<String>,
    /// Messages passed to the effect, rendered with `Display`.
    pub messages: Vec<String>,
}

/// Records every call made through the effects it hands out.
#[derive(Debug, Clone, Default)]
pub struct EffectRecorder {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl EffectRecorder {
    /// A recorder with no calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared callable that records into this recorder.
    pub fn effect_fn(&self) -> EffectFn {
        let calls = Arc::clone(&self.calls);
        share(move |timestamp, level, topics, messages| {
            lock(&calls).push(RecordedCall {
                timestamp: *timestamp,
                level,
                topics: topics.to_vec(),
                messages: messages.iter().map(|m| m.to_string()).collect(),
            });
        })
    }

    /// A bare callable effect that records into this recorder.
    pub fn effect(&self) -> Effect {
        Effect::Callable(self.effect_fn())
    }

    /// A [`SingleEffect`] that records into this recorder.
    pub fn single(&self, min_level: Option<Level>) -> SingleEffect {
        SingleEffect::from_fn(self.effect_fn(), min_level)
    }

    /// Every call so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Number of calls so far.
    pub fn count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Forget every recorded call.
    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

/// Assert the exact sequence of channels a [`CaptureConsole`] received.
///
/// # Example
///
/// ```rust
/// use mono_logger::testing::CaptureConsole;
/// use mono_logger::{assert_emitted, Channel, Logger, LoggerConfig};
///
/// let console = CaptureConsole::new();
/// let logger = Logger::with_config(LoggerConfig::new().console(console.clone()));
/// logger.info(&[&"a"]);
/// logger.fatal(&[&"b"]);
///
/// assert_emitted!(console, [Channel::Info, Channel::Error]);
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($console:expr, [$($channel:expr),* $(,)?]) => {{
        let actual = $console.channels();
        let expected: ::std::vec::Vec<$crate::Channel> = ::std::vec![$($channel),*];
        if actual != expected {
            panic!("Expected channels {:?}, got {:?}", expected, actual);
        }
    }};
}
