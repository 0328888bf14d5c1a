//! Log levels and their fixed total order.
//!
//! Every comparison between levels goes through [`Level::rank`], so the order
//! `debug < verbose < info < warn < error < fatal` is the only order that
//! matters, regardless of how the levels are spelled.
//!
//! # Examples
//!
//! ```
//! use mono_logger::Level;
//!
//! assert!(Level::Warn.passes(Level::Info));
//! assert!(!Level::Debug.passes(Level::Info));
//! assert_eq!(Level::Fatal.code(), "FTL");
//! assert_eq!("verbose".parse::<Level>(), Ok(Level::Verbose));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::console::Channel;
use crate::error::ParseLevelError;

/// Severity of a log message, also used as a filter threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Diagnostic noise; the default threshold lets it through.
    #[default]
    Debug,
    /// More detail than `info`, less than `debug` noise.
    Verbose,
    /// Normal operational messages.
    Info,
    /// Something unexpected that the program recovered from.
    Warn,
    /// A failed operation.
    Error,
    /// A failure the program cannot continue after.
    Fatal,
}

impl Level {
    /// All levels from lowest to highest rank.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Verbose,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric rank in `0..=5`.
    pub const fn rank(self) -> u8 {
        match self {
            Level::Debug => 0,
            Level::Verbose => 1,
            Level::Info => 2,
            Level::Warn => 3,
            Level::Error => 4,
            Level::Fatal => 5,
        }
    }

    /// Whether a message at `self` clears `threshold`.
    ///
    /// ```
    /// use mono_logger::Level;
    ///
    /// assert!(Level::Info.passes(Level::Info));
    /// assert!(Level::Error.passes(Level::Debug));
    /// assert!(!Level::Verbose.passes(Level::Warn));
    /// ```
    pub const fn passes(self, threshold: Level) -> bool {
        self.rank() >= threshold.rank()
    }

    /// Three-letter tag shown in the line header.
    pub const fn code(self) -> &'static str {
        match self {
            Level::Debug => "DBG",
            Level::Verbose => "VRB",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error => "ERR",
            Level::Fatal => "FTL",
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Verbose => "verbose",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Output channel a message at this level is written to.
    pub const fn channel(self) -> Channel {
        match self {
            Level::Debug | Level::Verbose => Channel::Plain,
            Level::Info => Channel::Info,
            Level::Warn => Channel::Warn,
            Level::Error | Level::Fatal => Channel::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError::new(s))
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Level {
    type Parameters = ();
    type Strategy = proptest::sample::Select<Level>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(Level::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_level() -> impl Strategy<Value = Level> {
        proptest::sample::select(Level::ALL.to_vec())
    }

    #[test]
    fn ranks_follow_declared_order() {
        let ranks: Vec<u8> = Level::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn codes_are_three_letters() {
        let codes: Vec<&str> = Level::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["DBG", "VRB", "INF", "WRN", "ERR", "FTL"]);
    }

    #[test]
    fn channel_mapping() {
        assert_eq!(Level::Debug.channel(), Channel::Plain);
        assert_eq!(Level::Verbose.channel(), Channel::Plain);
        assert_eq!(Level::Info.channel(), Channel::Info);
        assert_eq!(Level::Warn.channel(), Channel::Warn);
        assert_eq!(Level::Error.channel(), Channel::Error);
        assert_eq!(Level::Fatal.channel(), Channel::Error);
    }

    #[test]
    fn default_is_debug() {
        assert_eq!(Level::default(), Level::Debug);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
        assert_eq!(" Fatal ".parse::<Level>(), Ok(Level::Fatal));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "trace".parse::<Level>().unwrap_err();
        assert_eq!(err.input(), "trace");
        assert_eq!(err.to_string(), "unknown log level: \"trace\"");
    }

    // Lexical order would put "error" before "info"; rank order must not.
    #[test]
    fn ordering_is_not_lexical() {
        assert!(Level::Error.passes(Level::Info));
        assert!(!Level::Info.passes(Level::Error));
        assert!(Level::Verbose.passes(Level::Debug));
    }

    proptest! {
        #[test]
        fn prop_passes_matches_rank(a in any_level(), b in any_level()) {
            prop_assert_eq!(a.passes(b), a.rank() >= b.rank());
        }

        #[test]
        fn prop_ord_agrees_with_rank(a in any_level(), b in any_level()) {
            prop_assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
        }

        #[test]
        fn prop_display_parses_back(level in any_level()) {
            prop_assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }
}
