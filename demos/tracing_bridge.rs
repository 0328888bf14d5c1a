//! Tracing Bridge Example
//!
//! Forwards log calls into `tracing` next to the console output, with a
//! second, gated sink in the same composite.
//!
//! Run with: cargo run --example tracing_bridge --features tracing

use mono_logger::{tracing_effect, CompositeEffect, Level, Logger, LoggerConfig, SingleEffect};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let sinks = CompositeEffect::new();
    sinks.add(tracing_effect());
    sinks.add(SingleEffect::gated(
        |_, level, topics, _| eprintln!("  pager: {} on {}", level, topics.join(":")),
        Level::Error,
    ));

    let api = Logger::root("api", LoggerConfig::new().effect(sinks));
    let users = api.topic("users");

    users.verbose(&[&"GET /users/42"]);
    users.warn(&[&"slow query:", &"1.2s"]);
    users.fatal(&[&"database unreachable"]);
}
