/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Arguments;

use chrono::{DateTime, Local};
use serde_json::Value;
use slog::{KV, Level, OwnedKVList, Record, Serializer};

pub struct StdLogValue {
    pub(crate) datetime: DateTime<Local>,
    pub(crate) level: Level,
    pub(crate) message: String,
    pub(crate) kv_pairs: Vec<(String, Value)>,
    pub(crate) location: Option<String>,
}

impl StdLogValue {
    pub(crate) fn message_str(&self) -> &str {
        if self.message.is_empty() {
            "()"
        } else {
            &self.message
        }
    }
}

pub(crate) fn level_name(level: Level) -> &'static str {
    match level {
        Level::Critical => "FATAL",
        Level::Error => "ERROR",
        Level::Warning => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

pub(crate) fn level_name_lowercase(level: Level) -> &'static str {
    match level {
        Level::Critical => "fatal",
        Level::Error => "error",
        Level::Warning => "warn",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

pub struct StdLogFormatter {
    append_code_position: bool,
}

impl StdLogFormatter {
    pub(crate) fn new(append_code_position: bool) -> Self {
        StdLogFormatter {
            append_code_position,
        }
    }

    pub(crate) fn format_slog(
        &self,
        record: &Record,
        logger_values: &OwnedKVList,
    ) -> Result<StdLogValue, slog::Error> {
        let mut kv_pairs = Vec::new();
        let mut kv_formatter = FormatterKv(&mut kv_pairs);

        // record values are serialized last so they win on key conflict
        logger_values.serialize(record, &mut kv_formatter)?;
        record.kv().serialize(record, &mut kv_formatter)?;

        let location = if self.append_code_position {
            let position = match record.file().rsplit_once('/').map(|x| x.1) {
                Some(filename) => format!("{}({filename}:{})", record.module(), record.line()),
                None => format!("{}({}:{})", record.module(), record.file(), record.line()),
            };
            Some(position)
        } else {
            None
        };

        Ok(StdLogValue {
            datetime: Local::now(),
            level: record.level(),
            message: record.msg().to_string(),
            kv_pairs,
            location,
        })
    }
}

struct FormatterKv<'a>(&'a mut Vec<(String, Value)>);

impl FormatterKv<'_> {
    fn emit_value(&mut self, key: slog::Key, value: Value) -> slog::Result {
        let key = key.to_string();
        if let Some(pair) = self.0.iter_mut().find(|(k, _)| *k == key) {
            pair.1 = value;
        } else {
            self.0.push((key, value));
        }
        Ok(())
    }
}

impl Serializer for FormatterKv<'_> {
    impl_emit_number! {
        /// Emit `usize`
        usize => emit_usize
    }
    impl_emit_number! {
        /// Emit `isize`
        isize => emit_isize
    }
    impl_emit_number! {
        /// Emit `u8`
        u8 => emit_u8
    }
    impl_emit_number! {
        /// Emit `i8`
        i8 => emit_i8
    }
    impl_emit_number! {
        /// Emit `u16`
        u16 => emit_u16
    }
    impl_emit_number! {
        /// Emit `i16`
        i16 => emit_i16
    }
    impl_emit_number! {
        /// Emit `u32`
        u32 => emit_u32
    }
    impl_emit_number! {
        /// Emit `i32`
        i32 => emit_i32
    }
    impl_emit_number! {
        /// Emit `f32`
        f32 => emit_f32
    }
    impl_emit_number! {
        /// Emit `u64`
        u64 => emit_u64
    }
    impl_emit_number! {
        /// Emit `i64`
        i64 => emit_i64
    }
    impl_emit_number! {
        /// Emit `f64`
        f64 => emit_f64
    }

    fn emit_bool(&mut self, key: slog::Key, value: bool) -> slog::Result {
        self.emit_value(key, Value::Bool(value))
    }

    fn emit_char(&mut self, key: slog::Key, value: char) -> slog::Result {
        self.emit_value(key, Value::String(value.to_string()))
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.emit_value(key, Value::Null)
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        self.emit_value(key, Value::Null)
    }

    fn emit_str(&mut self, key: slog::Key, value: &str) -> slog::Result {
        self.emit_value(key, Value::String(value.to_string()))
    }

    fn emit_arguments(&mut self, key: slog::Key, value: &Arguments) -> slog::Result {
        let s = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        self.emit_value(key, Value::String(s))
    }
}
