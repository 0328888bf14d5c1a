//! A single callable behind an optional level gate.

use std::any::Any;
use std::fmt;

use crate::effect::{share, Effect, EffectFn, Timestamp};
use crate::error::EffectError;
use crate::level::Level;

/// One effect callable plus an optional minimum level.
///
/// Immutable after construction. Cloning shares the callable.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use mono_logger::{Level, SingleEffect};
///
/// let hits = Arc::new(AtomicUsize::new(0));
/// let effect = {
///     let hits = Arc::clone(&hits);
///     SingleEffect::gated(move |_, _, _, _| { hits.fetch_add(1, Ordering::SeqCst); }, Level::Info)
/// };
///
/// let now = chrono::Local::now();
/// effect.apply(&now, Level::Debug, &[], &[&"ignored"]);
/// effect.apply(&now, Level::Warn, &[], &[&"counted"]);
///
/// assert_eq!(hits.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct SingleEffect {
    target: EffectFn,
    min_level: Option<Level>,
}

impl SingleEffect {
    /// An ungated effect: runs on every call.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Timestamp, Level, &[String], &[&dyn fmt::Display]) + Send + Sync + 'static,
    {
        Self::from_fn(share(f), None)
    }

    /// An effect that only runs for calls at or above `min_level`.
    pub fn gated<F>(f: F, min_level: Level) -> Self
    where
        F: Fn(&Timestamp, Level, &[String], &[&dyn fmt::Display]) + Send + Sync + 'static,
    {
        Self::from_fn(share(f), Some(min_level))
    }

    /// Build from an already shared callable.
    pub fn from_fn(target: EffectFn, min_level: Option<Level>) -> Self {
        Self { target, min_level }
    }

    /// Build from an [`Effect`], which must be a bare callable.
    ///
    /// Wrapping a `SingleEffect` or a `CompositeEffect` is rejected.
    ///
    /// ```rust
    /// use mono_logger::{Effect, EffectError, SingleEffect};
    ///
    /// let inner = SingleEffect::new(|_, _, _, _| {});
    /// let err = SingleEffect::try_from_effect(Effect::from(inner), None).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     EffectError::InvalidEffectTarget { expected: "a callable", found: "a SingleEffect" }
    /// );
    /// ```
    pub fn try_from_effect(effect: Effect, min_level: Option<Level>) -> Result<Self, EffectError> {
        match effect {
            Effect::Callable(target) => Ok(Self::from_fn(target, min_level)),
            other => Err(EffectError::invalid_target("a callable", other.kind())),
        }
    }

    /// Build from a type-erased value, for callers that receive effects
    /// through loosely typed registration code.
    ///
    /// Accepts an [`EffectFn`] or an [`Effect::Callable`]. Anything else,
    /// including effect objects, fails with
    /// [`EffectError::InvalidEffectTarget`].
    pub fn try_from_any(
        value: Box<dyn Any + Send + Sync>,
        min_level: Option<Level>,
    ) -> Result<Self, EffectError> {
        let value = match value.downcast::<EffectFn>() {
            Ok(target) => return Ok(Self::from_fn(*target, min_level)),
            Err(value) => value,
        };
        let value = match value.downcast::<Effect>() {
            Ok(effect) => return Self::try_from_effect(*effect, min_level),
            Err(value) => value,
        };
        let found = if value.is::<SingleEffect>() {
            "a SingleEffect"
        } else if value.is::<super::CompositeEffect>() {
            "a CompositeEffect"
        } else {
            "an unrecognized value"
        };
        Err(EffectError::invalid_target("a callable", found))
    }

    /// The gate, if any.
    pub fn min_level(&self) -> Option<Level> {
        self.min_level
    }

    /// Invoke the callable unless the gate rejects `level`.
    ///
    /// The callable receives the arguments exactly as given here.
    pub fn apply(
        &self,
        timestamp: &Timestamp,
        level: Level,
        topics: &[String],
        messages: &[&dyn fmt::Display],
    ) {
        if let Some(min_level) = self.min_level {
            if !level.passes(min_level) {
                return;
            }
        }
        (self.target)(timestamp, level, topics, messages);
    }
}

impl fmt::Debug for SingleEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleEffect")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}
