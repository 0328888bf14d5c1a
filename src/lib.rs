//! # mono-logger
//!
//! Hierarchical console logging with composable side-effects.
//!
//! Loggers form a tree of topics. Each call is filtered by level, formatted
//! into a colorized line (`timestamp [LVL] prefix topic:sub-topic`), written
//! to the channel for its level and then handed to an optional
//! [`Effect`]: a callable, a level-gated [`SingleEffect`], or a
//! [`CompositeEffect`] fanning out to many of them.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use mono_logger::{CompositeEffect, Level, Logger, LoggerConfig, SingleEffect};
//!
//! let alerts = Arc::new(Mutex::new(Vec::new()));
//!
//! let sinks = CompositeEffect::new();
//! {
//!     let alerts = Arc::clone(&alerts);
//!     sinks.add(SingleEffect::gated(
//!         move |_, level, topics, messages| {
//!             let text: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
//!             alerts
//!                 .lock()
//!                 .unwrap()
//!                 .push(format!("{} {} {}", level, topics.join(":"), text.join(" ")));
//!         },
//!         Level::Error,
//!     ));
//! }
//!
//! let root = Logger::root(
//!     "shop",
//!     LoggerConfig::new()
//!         .level(Level::Info)
//!         .prefix(|| "v1".to_string())
//!         .effect(sinks),
//! );
//! let orders = root.topic("orders");
//!
//! orders.debug(&[&"filtered out"]);
//! orders.info(&[&"order placed:", &1042]);
//! orders.error(&[&"payment declined:", &1043]);
//!
//! assert_eq!(
//!     *alerts.lock().unwrap(),
//!     vec!["error shop:orders payment declined: 1043"]
//! );
//! ```
//!
//! ## Features
//!
//! - `async`: `Effect::from_async` for fire-and-forget async sinks
//! - `tracing`: `tracing_effect` forwards log calls as `tracing` events
//! - `serde`: `Serialize`/`Deserialize` for [`Level`]
//! - `proptest`: `Arbitrary` for [`Level`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod colors;
pub mod config;
pub mod console;
pub mod effect;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod logger;
pub mod testing;

// Re-exports
pub use config::LoggerConfig;
pub use console::{Channel, Console, StdConsole};
pub use effect::{CompositeEffect, Effect, EffectFn, SingleEffect, Timestamp};
pub use error::{EffectError, ParseLevelError};
pub use global::default_logger;
pub use level::Level;
pub use logger::Logger;

#[cfg(feature = "async")]
pub use effect::AsyncCall;
#[cfg(feature = "tracing")]
pub use effect::tracing_effect;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::LoggerConfig;
    pub use crate::effect::{CompositeEffect, Effect, SingleEffect};
    pub use crate::global::default_logger;
    pub use crate::level::Level;
    pub use crate::logger::Logger;
}
