//! Error types.
//!
//! Only setup can fail: building a [`SingleEffect`](crate::SingleEffect) or
//! adding to a [`CompositeEffect`](crate::CompositeEffect) from a value that is
//! not a usable effect. Logging calls themselves never return errors; a panic
//! raised by a caller-supplied callback unwinds straight out of the log call.

use std::fmt;

/// Error raised while assembling effects.
///
/// # Examples
///
/// ```rust
/// use mono_logger::{CompositeEffect, EffectError};
///
/// let group = CompositeEffect::new();
/// let err = group.try_add(Box::new(42_i32)).unwrap_err();
///
/// assert!(matches!(err, EffectError::InvalidEffectTarget { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// The supplied value is not a callable or a recognized effect variant.
    InvalidEffectTarget {
        /// What the receiving operation accepts.
        expected: &'static str,
        /// What it was given instead.
        found: &'static str,
    },
}

impl EffectError {
    pub(crate) fn invalid_target(expected: &'static str, found: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(expected, found, "rejected effect target");

        EffectError::InvalidEffectTarget { expected, found }
    }
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectError::InvalidEffectTarget { expected, found } => {
                write!(f, "invalid effect target: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for EffectError {}

/// Error returned when a string does not name a [`Level`](crate::Level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {:?}", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_display() {
        let err = EffectError::invalid_target("a callable", "i32");
        assert_eq!(
            err.to_string(),
            "invalid effect target: expected a callable, found i32"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EffectError>();
        assert_error::<ParseLevelError>();
    }
}
