//! End-to-end behavior of the dispatch pipeline through the public API.

use std::sync::{Arc, Mutex};

use mono_logger::testing::{CaptureConsole, EffectRecorder};
use mono_logger::{assert_emitted, Channel, Effect, Level, Logger, LoggerConfig, SingleEffect};

fn config(console: &CaptureConsole) -> LoggerConfig {
    LoggerConfig::new()
        .console(console.clone())
        .date_format(|_| "2024-07-26T21:05:28".to_string())
}

#[test]
fn info_threshold_filters_debug_and_passes_warn() {
    let console = CaptureConsole::new();
    let recorder = EffectRecorder::new();
    let logger = Logger::with_config(
        config(&console)
            .level(Level::Info)
            .effect(recorder.effect()),
    );

    logger.debug(&[&"x"]);
    assert!(console.is_empty());
    assert_eq!(recorder.count(), 0);

    logger.warn(&[&"x"]);
    assert_emitted!(console, [Channel::Warn]);
    assert!(console.lines()[0].args.contains(&"x".to_string()));
    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.calls()[0].messages, vec!["x"]);
}

#[test]
fn transform_is_display_only() {
    let console = CaptureConsole::new();
    let recorder = EffectRecorder::new();
    let logger = Logger::with_config(
        config(&console)
            .transform(|s| format!("T:{}", s))
            .effect(recorder.effect()),
    );

    logger.info(&[&"a", &"b"]);

    let line = &console.lines()[0];
    assert!(line.args.contains(&"T:a".to_string()));
    assert!(line.args.contains(&"T:b".to_string()));
    assert_eq!(recorder.calls()[0].messages, vec!["a", "b"]);
}

#[test]
fn forced_effect_runs_without_output() {
    let console = CaptureConsole::new();
    let recorder = EffectRecorder::new();
    let logger = Logger::with_config(
        config(&console)
            .level(Level::Error)
            .force_effect(true)
            .effect(recorder.effect()),
    );

    logger.debug(&[&"x"]);

    assert!(console.is_empty());
    assert_eq!(recorder.count(), 1);
}

#[test]
fn forced_effect_still_respects_its_own_gate() {
    let console = CaptureConsole::new();
    let recorder = EffectRecorder::new();
    let logger = Logger::with_config(
        config(&console)
            .level(Level::Fatal)
            .force_effect(true)
            .effect(recorder.single(Some(Level::Warn))),
    );

    logger.info(&[&"below both"]);
    logger.warn(&[&"below display only"]);

    assert!(console.is_empty());
    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.calls()[0].level, Level::Warn);
}

#[test]
fn full_header_layout() {
    colored::control::set_override(false);
    let console = CaptureConsole::new();
    let logger = Logger::root("example", config(&console).prefix(|| "my-app".to_string()))
        .topic("sub-topic");

    logger.error(&[&"hello", &"me"]);

    let line = &console.lines()[0];
    assert_eq!(line.header, "2024-07-26T21:05:28 [ERR] my-app example:sub-topic");
    assert_eq!(line.args, vec!["hello", "me"]);
    colored::control::unset_override();
}

#[test]
fn children_inherit_until_overridden() {
    let console = CaptureConsole::new();
    let root = Logger::with_config(config(&console).level(Level::Warn));
    let inherited = root.topic("a");
    let overridden = inherited.topic_with("b", config(&console));

    inherited.info(&[&"hidden"]);
    overridden.info(&[&"shown"]);

    assert_emitted!(console, [Channel::Info]);
    assert_eq!(console.lines()[0].args, vec!["shown"]);
}

#[test]
fn every_entry_point_reaches_the_effect_with_its_level() {
    let console = CaptureConsole::new();
    let recorder = EffectRecorder::new();
    let logger = Logger::with_config(config(&console).effect(recorder.effect()));

    logger.log(&[&1]);
    logger.debug(&[&2]);
    logger.verbose(&[&3]);
    logger.info(&[&4]);
    logger.warn(&[&5]);
    logger.error(&[&6]);
    logger.fatal(&[&7]);

    let levels: Vec<Level> = recorder.calls().iter().map(|c| c.level).collect();
    assert_eq!(
        levels,
        vec![
            Level::Debug,
            Level::Debug,
            Level::Verbose,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Fatal,
        ]
    );
}

#[test]
fn effect_runs_after_the_line_is_written() {
    let console = CaptureConsole::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let effect = {
        let console = console.clone();
        let order = Arc::clone(&order);
        SingleEffect::new(move |_, _, _, _| order.lock().unwrap().push(console.len()))
    };
    let logger = Logger::with_config(config(&console).effect(effect));

    logger.info(&[&"one"]);
    logger.info(&[&"two"]);

    assert_eq!(*order.lock().unwrap(), vec![1, 2]);
}

#[test]
fn log_at_dispatches_like_the_named_methods() {
    let console = CaptureConsole::new();
    let logger = Logger::with_config(config(&console));

    for level in Level::ALL {
        logger.log_at(level, &[&level]);
    }

    assert_emitted!(
        console,
        [
            Channel::Plain,
            Channel::Plain,
            Channel::Info,
            Channel::Warn,
            Channel::Error,
            Channel::Error,
        ]
    );
    let args: Vec<String> = console.lines().into_iter().flat_map(|l| l.args).collect();
    assert_eq!(args, vec!["debug", "verbose", "info", "warn", "error", "fatal"]);
}

#[test]
fn callables_can_be_attached_directly() {
    let console = CaptureConsole::new();
    let hits = Arc::new(Mutex::new(0));
    let effect = {
        let hits = Arc::clone(&hits);
        Effect::callable(move |_, _, _, _| *hits.lock().unwrap() += 1)
    };
    let logger = Logger::with_config(config(&console).effect(effect)).topic("t");

    logger.verbose(&[&"x"]);

    assert_eq!(*hits.lock().unwrap(), 1);
}
