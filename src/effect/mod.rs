//! Composable side-effects run on every log call.
//!
//! An effect receives `(timestamp, level, topics, messages)` for each call a
//! logger dispatches. Three shapes exist:
//!
//! - a bare callable ([`Effect::Callable`]),
//! - a [`SingleEffect`]: one callable plus an optional minimum level,
//! - a [`CompositeEffect`]: an ordered group of effects of any shape plus an
//!   optional minimum level for the whole group.
//!
//! Composites nest, so a single log call can fan out to many sinks, each with
//! its own level gate, through exactly one top-level [`Effect::apply`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use mono_logger::{CompositeEffect, Effect, Level, SingleEffect};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let audit = {
//!     let seen = Arc::clone(&seen);
//!     SingleEffect::gated(
//!         move |_, level, _, _| seen.lock().unwrap().push(format!("audit:{}", level)),
//!         Level::Warn,
//!     )
//! };
//! let group = CompositeEffect::new();
//! group.add(audit);
//! {
//!     let seen = Arc::clone(&seen);
//!     group.add_fn(move |_, level, _, _| seen.lock().unwrap().push(format!("trace:{}", level)));
//! }
//!
//! let effect = Effect::from(group);
//! let now = chrono::Local::now();
//! effect.apply(&now, Level::Info, &[], &[&"hello"]);
//! effect.apply(&now, Level::Error, &[], &[&"boom"]);
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec!["trace:info", "audit:error", "trace:error"]
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::level::Level;

mod composite;
mod single;

#[cfg(feature = "async")]
mod async_fn;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use composite::CompositeEffect;
pub use single::SingleEffect;

#[cfg(feature = "async")]
pub use async_fn::AsyncCall;
#[cfg(feature = "tracing")]
pub use self::tracing::tracing_effect;

/// Wall-clock time captured once per log call.
pub type Timestamp = chrono::DateTime<chrono::Local>;

/// A shared effect callable: `(timestamp, level, topics, messages)`.
///
/// `messages` are the arguments exactly as passed to the log call, before any
/// configured transform.
pub type EffectFn = Arc<dyn Fn(&Timestamp, Level, &[String], &[&dyn fmt::Display]) + Send + Sync>;

/// Share a closure as an [`EffectFn`].
pub(crate) fn share<F>(f: F) -> EffectFn
where
    F: Fn(&Timestamp, Level, &[String], &[&dyn fmt::Display]) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Any effect shape a logger configuration or a composite can hold.
#[derive(Clone)]
pub enum Effect {
    /// A bare callable, invoked unconditionally.
    Callable(EffectFn),
    /// A callable behind its own level gate.
    Single(SingleEffect),
    /// An ordered group of effects behind an optional group gate.
    Composite(CompositeEffect),
}

impl Effect {
    /// Wrap a closure as a bare callable effect.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&Timestamp, Level, &[String], &[&dyn fmt::Display]) + Send + Sync + 'static,
    {
        Effect::Callable(share(f))
    }

    /// Run this effect for one log call.
    ///
    /// Callables are invoked directly; single and composite effects apply
    /// their own gates first. A panic inside a callable unwinds to the caller.
    pub fn apply(
        &self,
        timestamp: &Timestamp,
        level: Level,
        topics: &[String],
        messages: &[&dyn fmt::Display],
    ) {
        match self {
            Effect::Callable(f) => f(timestamp, level, topics, messages),
            Effect::Single(single) => single.apply(timestamp, level, topics, messages),
            Effect::Composite(group) => group.apply(timestamp, level, topics, messages),
        }
    }

    /// Short description of the variant, used in error reports.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Effect::Callable(_) => "a callable",
            Effect::Single(_) => "a SingleEffect",
            Effect::Composite(_) => "a CompositeEffect",
        }
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Callable(_) => f.write_str("Callable(..)"),
            Effect::Single(single) => f.debug_tuple("Single").field(single).finish(),
            Effect::Composite(group) => f.debug_tuple("Composite").field(group).finish(),
        }
    }
}

impl From<EffectFn> for Effect {
    fn from(f: EffectFn) -> Self {
        Effect::Callable(f)
    }
}

impl From<SingleEffect> for Effect {
    fn from(single: SingleEffect) -> Self {
        Effect::Single(single)
    }
}

impl From<CompositeEffect> for Effect {
    fn from(group: CompositeEffect) -> Self {
        Effect::Composite(group)
    }
}
