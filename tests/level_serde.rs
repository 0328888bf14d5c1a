//! Levels loaded from host configuration files.
#![cfg(feature = "serde")]

use mono_logger::Level;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Settings {
    level: Level,
    audit_level: Option<Level>,
}

#[test]
fn levels_deserialize_from_lowercase_names() {
    let settings: Settings =
        serde_json::from_str(r#"{ "level": "verbose", "audit_level": "fatal" }"#).unwrap();

    assert_eq!(settings.level, Level::Verbose);
    assert_eq!(settings.audit_level, Some(Level::Fatal));
}

#[test]
fn levels_serialize_to_lowercase_names() {
    assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), r#""warn""#);
}

#[test]
fn unknown_level_is_rejected() {
    let result = serde_json::from_str::<Settings>(r#"{ "level": "trace" }"#);

    assert!(result.is_err());
}
