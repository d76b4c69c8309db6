/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use chrono::format::{Item, StrftimeItems};
use yaml_rust::Yaml;

use g3_stdlog::{StdLogConfig, StdLogTarget};

use crate::yaml;
use crate::{Encoding, Fields, Level, LoggerError};

/// Settings of the built-in slog backend.
#[derive(Clone, Debug, Default)]
pub struct SlogLoggerConfig {
    pub(crate) level: Level,
    pub(crate) encoding: Encoding,
    pub(crate) initial_fields: Fields,
    pub(crate) stdlog: StdLogConfig,
}

impl SlogLoggerConfig {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
        self.stdlog.set_encoding(encoding.into());
    }

    pub fn initial_fields(&self) -> &Fields {
        &self.initial_fields
    }

    pub fn set_initial_fields(&mut self, fields: Fields) {
        self.initial_fields = fields;
    }

    pub fn stdlog(&self) -> &StdLogConfig {
        &self.stdlog
    }

    /// Parse the yaml config of the slog backend.
    ///
    /// A missing, null or empty map config is reported as [`LoggerError::EmptyConfig`],
    /// a config without any known key as [`LoggerError::NoValidConfig`]. Unknown keys are
    /// ignored as long as one known key is present.
    pub fn parse_yaml(value: Option<&Yaml>) -> Result<Self, LoggerError> {
        let map = match value {
            None | Some(Yaml::Null) | Some(Yaml::BadValue) => {
                return Err(LoggerError::EmptyConfig);
            }
            Some(Yaml::Hash(map)) if map.is_empty() => return Err(LoggerError::EmptyConfig),
            Some(Yaml::Hash(map)) => map,
            Some(_) => return Err(LoggerError::NoValidConfig),
        };

        let mut config = SlogLoggerConfig::default();
        let mut known_keys = 0usize;
        yaml::foreach_str_kv(map, |k, v| {
            let found = config.set_by_yaml_kv(k, v)?;
            if found {
                known_keys += 1;
            }
            Ok(())
        })
        .map_err(LoggerError::InvalidConfig)?;

        if known_keys == 0 {
            Err(LoggerError::NoValidConfig)
        } else {
            Ok(config)
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<bool> {
        match yaml::normalize_key(k).as_str() {
            "level" => {
                let s = yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
                let level = Level::from_str(&s).map_err(|_| anyhow!("invalid log level {s}"))?;
                self.set_level(level);
            }
            "encoding" | "encoder" => {
                let s = yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
                let encoding =
                    Encoding::from_str(&s).map_err(|_| anyhow!("unsupported encoding {s}"))?;
                self.set_encoding(encoding);
            }
            "output" | "target" => {
                let s = yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
                let target =
                    StdLogTarget::from_str(&s).map_err(|_| anyhow!("unsupported output {s}"))?;
                self.stdlog.set_target(target);
            }
            "append_code_position" => {
                let enable =
                    yaml::as_bool(v).context(format!("invalid boolean value for key {k}"))?;
                self.stdlog.set_append_code_position(enable);
            }
            "async_channel_size" | "channel_size" => {
                let size = yaml::as_usize(v).context(format!("invalid usize value for key {k}"))?;
                if size == 0 {
                    return Err(anyhow!("value for {k} should not be zero"));
                }
                self.stdlog.set_channel_capacity(size);
            }
            "thread_name" => {
                let name = yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
                if name.is_empty() {
                    return Err(anyhow!("value for {k} should not be empty"));
                }
                self.stdlog.set_thread_name(name);
            }
            "time_format" => {
                let format =
                    yaml::as_string(v).context(format!("invalid string value for key {k}"))?;
                if format.is_empty()
                    || StrftimeItems::new(&format).any(|i| matches!(i, Item::Error))
                {
                    return Err(anyhow!("invalid strftime format {format}"));
                }
                self.stdlog.set_time_format(format);
            }
            "initial_fields" | "fields" => {
                let fields =
                    yaml::as_fields(v).context(format!("invalid fields value for key {k}"))?;
                self.initial_fields = fields;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}
