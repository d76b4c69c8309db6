/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde_json::Value;
use slog::{KV, Record, Serializer};

/// Key-value annotations bound to a derived logger.
///
/// Keys are kept sorted so the output order is stable. No key is reserved here,
/// conflicts with the keys of the backend are resolved by the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    inner: BTreeMap<String, Value>,
}

impl Fields {
    pub fn new() -> Self {
        Fields::default()
    }

    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key, value);
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.inner.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.inner.iter()
    }

    /// Build a new set with `other` laid over `self`, values in `other` win.
    pub fn merge(&self, other: &Fields) -> Fields {
        if other.is_empty() {
            return self.clone();
        }
        let mut inner = self.inner.clone();
        for (k, v) in &other.inner {
            inner.insert(k.clone(), v.clone());
        }
        Fields { inner }
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let inner = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Fields { inner }
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

pub(crate) struct FieldsKv<'a>(pub(crate) &'a Fields);

impl KV for FieldsKv<'_> {
    fn serialize(&self, _record: &Record, serializer: &mut dyn Serializer) -> slog::Result {
        for (k, v) in self.0 {
            let key = slog::Key::from(k.clone());
            match v {
                Value::Null => serializer.emit_unit(key)?,
                Value::Bool(b) => serializer.emit_bool(key, *b)?,
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        serializer.emit_i64(key, i)?
                    } else if let Some(u) = n.as_u64() {
                        serializer.emit_u64(key, u)?
                    } else if let Some(f) = n.as_f64() {
                        serializer.emit_f64(key, f)?
                    } else {
                        serializer.emit_arguments(key, &format_args!("{n}"))?
                    }
                }
                Value::String(s) => serializer.emit_str(key, s)?,
                // nested values are emitted as json text
                Value::Array(_) | Value::Object(_) => {
                    serializer.emit_arguments(key, &format_args!("{v}"))?
                }
            }
        }
        Ok(())
    }
}
