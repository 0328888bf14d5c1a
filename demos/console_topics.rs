//! Console Topics Example
//!
//! Demonstrates the logger tree on a real terminal:
//! - a labelled root with a prefix and a custom date format
//! - nested topics inheriting their parent's configuration
//! - every level and the channel it is written to
//! - a logger that shows only `info` and above but forces its effect

use mono_logger::prelude::*;

fn main() {
    println!("Console Topics Examples");
    println!("=======================\n");

    // Example 1: labelled root with prefix and date format
    println!("Example 1: Labelled root");
    println!("------------------------");
    let root = Logger::root(
        "root",
        LoggerConfig::new()
            .prefix(|| "That's me".to_string())
            .date_format(|ts| ts.format("%H:%M:%S").to_string()),
    );
    root.log(&[&"hello", &"world", &42]);
    println!();

    // Example 2: nested topics on the default logger
    println!("Example 2: Nested topics");
    println!("------------------------");
    let sub = default_logger().topic("sub-topic");
    let deep = sub.topic("deep-sub-topic");
    if let Some(parent) = deep.parent() {
        parent.log(&[&"hello, world"]);
    }
    deep.debug(&[&"hello, debug"]);
    deep.info(&[&"hello, info"]);
    deep.warn(&[&"hello, warn"]);
    deep.error(&[&"hello, error"]);
    deep.fatal(&[&"hello, fatal"]);
    deep.log(&[&"hello, log"]);
    deep.verbose(&[&"hello, verbose"]);
    println!();

    // Example 3: threshold, transform and a forced effect
    println!("Example 3: Forced effect");
    println!("------------------------");
    let effect = Effect::callable(|ts, level, topics, messages| {
        let text: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
        println!(
            "  effect: {} {} {:?} {}",
            ts.to_rfc3339(),
            level,
            topics,
            text.join(" ")
        );
    });
    let example = Logger::root(
        "example",
        LoggerConfig::new()
            .level(Level::Info)
            .prefix(|| "my-app".to_string())
            .date_format(|ts| ts.to_rfc3339())
            .transform(|m| format!("yes, {}", m))
            .force_effect(true)
            .effect(effect),
    );
    example.info(&[&"hello", &"me"]);
    example.debug(&[&"only the effect sees this"]);
}
