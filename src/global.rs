//! Process-wide default logger.
//!
//! A convenience root for programs that do not want to thread a logger
//! through their code. Nothing requires it: any [`Logger`] built explicitly
//! behaves the same way.
//!
//! ```rust
//! use mono_logger::default_logger;
//!
//! let app = default_logger().topic("app");
//! app.info(&[&"started"]);
//! assert_eq!(app.topics(), vec!["app"]);
//! ```

use std::sync::LazyLock;

use crate::logger::Logger;

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::new);

/// The shared anonymous root, created on first use with the default
/// configuration.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}
