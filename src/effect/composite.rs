//! An ordered, growable group of effects.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::effect::{Effect, EffectFn, SingleEffect, Timestamp};
use crate::error::EffectError;
use crate::level::Level;

struct Group {
    min_level: Option<Level>,
    children: RwLock<Vec<Effect>>,
}

/// An ordered list of effects with an optional gate for the whole group.
///
/// Children run in insertion order. Each child enforces only its own gate;
/// the group gate, when set, is checked once before any child runs.
///
/// Clones are handles to the same group, so children added after the group
/// was placed in a [`LoggerConfig`](crate::LoggerConfig) are seen by it. A
/// group must not contain itself, directly or through nested groups.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use mono_logger::{CompositeEffect, Level};
///
/// let order = Arc::new(Mutex::new(Vec::new()));
/// let inner = CompositeEffect::new();
/// let outer = CompositeEffect::gated(Level::Info);
///
/// for name in ["a", "b"] {
///     let order = Arc::clone(&order);
///     inner.add_fn(move |_, _, _, _| order.lock().unwrap().push(name));
/// }
/// {
///     let order = Arc::clone(&order);
///     outer.add_fn(move |_, _, _, _| order.lock().unwrap().push("first"));
/// }
/// outer.add(inner);
///
/// let now = chrono::Local::now();
/// outer.apply(&now, Level::Debug, &[], &[]);
/// assert!(order.lock().unwrap().is_empty());
///
/// outer.apply(&now, Level::Warn, &[], &[]);
/// assert_eq!(*order.lock().unwrap(), vec!["first", "a", "b"]);
/// ```
#[derive(Clone)]
pub struct CompositeEffect {
    group: Arc<Group>,
}

impl CompositeEffect {
    /// An empty, ungated group.
    pub fn new() -> Self {
        Self::with_gate(None)
    }

    /// An empty group that ignores calls below `min_level`.
    pub fn gated(min_level: Level) -> Self {
        Self::with_gate(Some(min_level))
    }

    fn with_gate(min_level: Option<Level>) -> Self {
        Self {
            group: Arc::new(Group {
                min_level,
                children: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Append an effect of any shape.
    ///
    /// No deduplication: adding the same effect twice runs it twice.
    pub fn add(&self, effect: impl Into<Effect>) -> &Self {
        self.group
            .children
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(effect.into());
        self
    }

    /// Append a plain callable.
    pub fn add_fn<F>(&self, f: F) -> &Self
    where
        F: Fn(&Timestamp, Level, &[String], &[&dyn fmt::Display]) + Send + Sync + 'static,
    {
        self.add(Effect::callable(f))
    }

    /// Append a type-erased value.
    ///
    /// Accepts an [`Effect`], a [`SingleEffect`], a [`CompositeEffect`] or an
    /// [`EffectFn`]; anything else fails with
    /// [`EffectError::InvalidEffectTarget`] and leaves the group unchanged.
    ///
    /// Downcasting needs the exact type, so a plain closure must first be
    /// shared as an [`EffectFn`] (`Arc::new(f) as EffectFn`); a bare
    /// `Box<closure>` is rejected.
    pub fn try_add(&self, value: Box<dyn Any + Send + Sync>) -> Result<&Self, EffectError> {
        let value = match value.downcast::<Effect>() {
            Ok(effect) => return Ok(self.add(*effect)),
            Err(value) => value,
        };
        let value = match value.downcast::<SingleEffect>() {
            Ok(single) => return Ok(self.add(*single)),
            Err(value) => value,
        };
        let value = match value.downcast::<CompositeEffect>() {
            Ok(group) => return Ok(self.add(*group)),
            Err(value) => value,
        };
        match value.downcast::<EffectFn>() {
            Ok(f) => Ok(self.add(*f)),
            Err(_) => Err(EffectError::invalid_target(
                "an EffectFn or an effect",
                "an unrecognized value",
            )),
        }
    }

    /// The group gate, if any.
    pub fn min_level(&self) -> Option<Level> {
        self.group.min_level
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.read_children().len()
    }

    /// Whether the group has no children yet.
    pub fn is_empty(&self) -> bool {
        self.read_children().is_empty()
    }

    /// Run every child in insertion order, unless the group gate rejects
    /// `level`, in which case no child runs.
    pub fn apply(
        &self,
        timestamp: &Timestamp,
        level: Level,
        topics: &[String],
        messages: &[&dyn fmt::Display],
    ) {
        if let Some(min_level) = self.group.min_level {
            if !level.passes(min_level) {
                return;
            }
        }
        // Snapshot so a child may add to this group without deadlocking.
        let children = self.read_children().clone();
        for child in &children {
            child.apply(timestamp, level, topics, messages);
        }
    }

    fn read_children(&self) -> std::sync::RwLockReadGuard<'_, Vec<Effect>> {
        self.group
            .children
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CompositeEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CompositeEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeEffect")
            .field("min_level", &self.group.min_level)
            .field("children", &*self.read_children())
            .finish()
    }
}
