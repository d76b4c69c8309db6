/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use serde_json::Value;
use yaml_rust::{Yaml, YamlLoader};

use g3_logger::{DRIVER_SLOG, Fields, Level, LoggerError, SharedLogger};

fn yaml_doc(s: &str) -> Yaml {
    YamlLoader::load_from_str(s).unwrap().pop().unwrap()
}

fn expect_logger(r: Result<SharedLogger, LoggerError>) -> SharedLogger {
    match r {
        Ok(logger) => logger,
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn unknown_driver_fallback() {
    let garbage = yaml_doc("level: no-such-level\nchannel_size: -3");
    let configs = [
        None,
        Some(Yaml::Null),
        Some(yaml_doc("{}")),
        Some(yaml_doc("color: red")),
        Some(garbage),
    ];
    for driver in ["", "zap", "SLOG", "nope", " slog"] {
        for config in &configs {
            let logger = expect_logger(g3_logger::new_logger(config.as_ref(), driver));
            assert_eq!(logger.level(), Level::Info);
            assert!(logger.fields().is_empty());
        }
    }
}

#[test]
fn empty_config() {
    assert!(matches!(
        g3_logger::new_logger(None, DRIVER_SLOG),
        Err(LoggerError::EmptyConfig)
    ));
    assert!(matches!(
        g3_logger::new_logger(Some(&Yaml::Null), DRIVER_SLOG),
        Err(LoggerError::EmptyConfig)
    ));
    assert!(matches!(
        g3_logger::new_logger(Some(&yaml_doc("{}")), DRIVER_SLOG),
        Err(LoggerError::EmptyConfig)
    ));
}

#[test]
fn no_valid_config() {
    assert!(matches!(
        g3_logger::new_logger(Some(&yaml_doc("color: red\nwidth: 80")), DRIVER_SLOG),
        Err(LoggerError::NoValidConfig)
    ));
    assert!(matches!(
        g3_logger::new_logger(Some(&yaml_doc("just a string")), DRIVER_SLOG),
        Err(LoggerError::NoValidConfig)
    ));
}

#[test]
fn invalid_config_value() {
    let r = g3_logger::new_logger(Some(&yaml_doc("level: loud")), DRIVER_SLOG);
    match r {
        Err(LoggerError::InvalidConfig(e)) => {
            assert!(format!("{e:?}").contains("invalid log level loud"));
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("config should be rejected"),
    }
}

#[test]
fn error_messages() {
    assert_eq!(LoggerError::EmptyConfig.to_string(), "empty logger config");
    assert_eq!(
        LoggerError::NoValidConfig.to_string(),
        "no valid logger config"
    );
}

#[test]
fn valid_config() {
    let config = yaml_doc("level: info\nencoding: console");
    let logger = expect_logger(g3_logger::new_logger(Some(&config), DRIVER_SLOG));
    assert_eq!(logger.level(), Level::Info);

    let config = yaml_doc("level: error\nencoding: json\ninitial_fields: {app: demo}");
    let logger = expect_logger(g3_logger::new_logger(Some(&config), DRIVER_SLOG));
    assert_eq!(logger.level(), Level::Error);
    assert_eq!(logger.fields().get("app"), Some(&Value::from("demo")));
    assert!(!logger.enabled(Level::Warn));
}

#[test]
fn default_logger() {
    let logger = expect_logger(g3_logger::new_default_logger());
    assert_eq!(logger.level(), Level::Info);
    logger.debugf(format_args!("filtered out"));
    logger.infof(format_args!("default_logger test record"));
    logger.sync();
}

#[test]
fn derived_fields() {
    let root = expect_logger(g3_logger::new_default_logger());
    let alice = root.with_fields(Fields::new().with("user", "alice"));
    let bob = alice.with_fields(Fields::new().with("user", "bob"));

    assert!(root.fields().is_empty());
    assert_eq!(alice.fields().get("user"), Some(&Value::from("alice")));
    assert_eq!(bob.fields().get("user"), Some(&Value::from("bob")));
    assert_eq!(bob.level(), root.level());
}

#[test]
fn derived_keeps_config() {
    let config = yaml_doc("level: warn\ninitial_fields: {service: api, zone: a}");
    let root = expect_logger(g3_logger::new_logger(Some(&config), DRIVER_SLOG));
    let child = root.with_fields(g3_logger::fields! {"zone" => "b", "req" => 1});

    assert_eq!(child.level(), Level::Warn);
    assert_eq!(child.fields().get("service"), Some(&Value::from("api")));
    assert_eq!(child.fields().get("zone"), Some(&Value::from("b")));
    assert_eq!(child.fields().get("req"), Some(&Value::from(1)));
    assert_eq!(root.fields().get("zone"), Some(&Value::from("a")));
    assert!(root.fields().get("req").is_none());
}
