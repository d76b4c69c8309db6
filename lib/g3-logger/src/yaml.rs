/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use serde_json::{Map, Number, Value};
use yaml_rust::{Yaml, YamlLoader, yaml};

use crate::{Fields, LoggerError};

pub(crate) fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

/// Walk the string keyed entries of the map, entries with other key types are skipped.
pub(crate) fn foreach_str_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        }
    }
    Ok(())
}

pub(crate) fn as_bool(v: &Yaml) -> anyhow::Result<bool> {
    match v {
        Yaml::String(s) => match s.to_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(true),
            "off" | "false" | "no" | "0" => Ok(false),
            _ => Err(anyhow!("invalid yaml string value for 'bool': {s}")),
        },
        Yaml::Boolean(value) => Ok(*value),
        Yaml::Integer(i) => Ok(*i != 0),
        _ => Err(anyhow!(
            "yaml value type for 'bool' should be 'boolean' / 'string' / 'integer'"
        )),
    }
}

pub(crate) fn as_usize(v: &Yaml) -> anyhow::Result<usize> {
    match v {
        Yaml::String(s) => Ok(usize::from_str(s)?),
        Yaml::Integer(i) => Ok(usize::try_from(*i)?),
        _ => Err(anyhow!(
            "yaml value type for 'usize' should be 'string' or 'integer'"
        )),
    }
}

pub(crate) fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for 'string' should be 'string' / 'integer' / 'real'"
        )),
    }
}

pub(crate) fn as_json_value(v: &Yaml) -> anyhow::Result<Value> {
    match v {
        Yaml::Null => Ok(Value::Null),
        Yaml::Boolean(b) => Ok(Value::Bool(*b)),
        Yaml::Integer(i) => Ok(Value::from(*i)),
        Yaml::Real(s) => {
            let f = f64::from_str(s).map_err(|e| anyhow!("invalid real value {s}: {e}"))?;
            Number::from_f64(f)
                .map(Value::Number)
                .ok_or_else(|| anyhow!("real value {s} can not be represented in json"))
        }
        Yaml::String(s) => Ok(Value::String(s.to_string())),
        Yaml::Array(seq) => {
            let mut values = Vec::with_capacity(seq.len());
            for (i, v) in seq.iter().enumerate() {
                let value = as_json_value(v).context(format!("invalid value for item #{i}"))?;
                values.push(value);
            }
            Ok(Value::Array(values))
        }
        Yaml::Hash(map) => {
            let mut object = Map::new();
            for (k, v) in map.iter() {
                let Yaml::String(key) = k else {
                    return Err(anyhow!("key in hash should be string"));
                };
                let value = as_json_value(v).context(format!("invalid value for key {key}"))?;
                object.insert(key.to_string(), value);
            }
            Ok(Value::Object(object))
        }
        _ => Err(anyhow!("unsupported yaml value type")),
    }
}

pub(crate) fn as_fields(v: &Yaml) -> anyhow::Result<Fields> {
    match v {
        Yaml::Hash(map) => {
            let mut fields = Fields::new();
            for (k, v) in map.iter() {
                let Yaml::String(key) = k else {
                    return Err(anyhow!("field key should be string"));
                };
                let value = as_json_value(v).context(format!("invalid value for field {key}"))?;
                fields.insert(key.as_str(), value);
            }
            Ok(fields)
        }
        Yaml::Null => Ok(Fields::new()),
        _ => Err(anyhow!("yaml value type for 'fields' should be 'map'")),
    }
}

/// Load the first yaml document of `s`, an empty document gives `None`.
pub fn load_config_str(s: &str) -> Result<Option<Yaml>, LoggerError> {
    let mut docs = YamlLoader::load_from_str(s)
        .map_err(|e| LoggerError::LoadConfig(anyhow!("invalid yaml content: {e}")))?;
    if docs.is_empty() {
        Ok(None)
    } else {
        Ok(Some(docs.swap_remove(0)))
    }
}

pub fn load_config_file(path: &Path) -> Result<Option<Yaml>, LoggerError> {
    let content = std::fs::read_to_string(path)
        .context(format!("failed to read {}", path.display()))
        .map_err(LoggerError::LoadConfig)?;
    load_config_str(&content)
}
