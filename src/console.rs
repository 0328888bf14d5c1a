//! Output channels.
//!
//! A logger writes each formatted line to one of four channels picked by the
//! message level (see [`Level::channel`](crate::Level::channel)). The
//! [`Console`] trait is the seam: [`StdConsole`] writes to the process streams,
//! and tests swap in [`CaptureConsole`](crate::testing::CaptureConsole).

use std::fmt;
use std::io::{self, Write};

/// Destination of a formatted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `debug`, `verbose` and `log`.
    Plain,
    /// `info`.
    Info,
    /// `warn`.
    Warn,
    /// `error` and `fatal`.
    Error,
}

impl Channel {
    /// Lowercase channel name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::Plain => "log",
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for formatted log lines.
///
/// `header` is the timestamp, level tag, prefix and topic path; `args` are the
/// already transformed arguments, in call order.
pub trait Console: Send + Sync {
    /// Write one line.
    fn emit(&self, channel: Channel, header: &str, args: &[String]);
}

/// Writes `Plain` and `Info` lines to stdout and `Warn` and `Error` lines to
/// stderr, header and arguments separated by single spaces.
///
/// Write failures are dropped; a broken pipe must not take the program down.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl StdConsole {
    fn write_line<W: Write>(mut out: W, header: &str, args: &[String]) -> io::Result<()> {
        out.write_all(header.as_bytes())?;
        for arg in args {
            out.write_all(b" ")?;
            out.write_all(arg.as_bytes())?;
        }
        out.write_all(b"\n")
    }
}

impl Console for StdConsole {
    fn emit(&self, channel: Channel, header: &str, args: &[String]) {
        match channel {
            Channel::Plain | Channel::Info => {
                Self::write_line(io::stdout().lock(), header, args).ok();
            }
            Channel::Warn | Channel::Error => {
                Self::write_line(io::stderr().lock(), header, args).ok();
            }
        }
    }
}
