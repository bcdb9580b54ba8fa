// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use libdd_pdata_protobuf::pb::common::v1::{any_value, AnyValue, KeyValue};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Typed value attached to a resource or a record.
///
/// Equality is type-strict: `AttributeValue::String("123")` is never equal to
/// `AttributeValue::Int(123)`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// The key is present but its value is unspecified.
    KeyOnly,
    /// A value of no type: an `AnyValue` whose `value` is unset.
    Empty,
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
}

/// Discriminant of an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeValueType {
    KeyOnly,
    Empty,
    String,
    Int,
    Double,
    Bool,
}

impl AttributeValue {
    pub fn value_type(&self) -> AttributeValueType {
        match self {
            AttributeValue::KeyOnly => AttributeValueType::KeyOnly,
            AttributeValue::Empty => AttributeValueType::Empty,
            AttributeValue::String(_) => AttributeValueType::String,
            AttributeValue::Int(_) => AttributeValueType::Int,
            AttributeValue::Double(_) => AttributeValueType::Double,
            AttributeValue::Bool(_) => AttributeValueType::Bool,
        }
    }

    pub fn is_key_only(&self) -> bool {
        matches!(self, AttributeValue::KeyOnly)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            AttributeValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::KeyOnly => f.write_str("<key only>"),
            AttributeValue::Empty => f.write_str("<empty>"),
            AttributeValue::String(s) => write!(f, "{s:?}"),
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Double(v) => write!(f, "{v}"),
            AttributeValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<AnyValue> for AttributeValue {
    fn from(value: AnyValue) -> Self {
        match value.value {
            None => AttributeValue::Empty,
            Some(any_value::Value::StringValue(s)) => AttributeValue::String(s),
            Some(any_value::Value::IntValue(v)) => AttributeValue::Int(v),
            Some(any_value::Value::DoubleValue(v)) => AttributeValue::Double(v),
            Some(any_value::Value::BoolValue(v)) => AttributeValue::Bool(v),
        }
    }
}

impl From<AttributeValue> for AnyValue {
    fn from(value: AttributeValue) -> Self {
        let value = match value {
            AttributeValue::KeyOnly | AttributeValue::Empty => None,
            AttributeValue::String(s) => Some(any_value::Value::StringValue(s)),
            AttributeValue::Int(v) => Some(any_value::Value::IntValue(v)),
            AttributeValue::Double(v) => Some(any_value::Value::DoubleValue(v)),
            AttributeValue::Bool(v) => Some(any_value::Value::BoolValue(v)),
        };
        AnyValue { value }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AttributeValue::KeyOnly | AttributeValue::Empty => serializer.serialize_none(),
            AttributeValue::String(s) => serializer.serialize_str(s),
            AttributeValue::Int(v) => serializer.serialize_i64(*v),
            AttributeValue::Double(v) => serializer.serialize_f64(*v),
            AttributeValue::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}

struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, integer, float or boolean attribute value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(AttributeValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(AttributeValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(AttributeValue::Int)
            .map_err(|_| E::custom(format!("integer attribute value {v} does not fit in i64")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(AttributeValue::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(AttributeValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(AttributeValue::String(v))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom("error unsupported value type \"sequence\""))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom("error unsupported value type \"map\""))
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AttributeValueVisitor)
    }
}

/// Ordered, key-unique mapping of attribute keys to values.
///
/// Iteration follows insertion order. Lookups and equality ignore it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: IndexMap<String, AttributeValue>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        AttributeMap {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Replaces the whole content of the map with `pairs`. When a key repeats, the later value
    /// wins and the key keeps its first position.
    pub fn init_from_pairs<I, K>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, AttributeValue)>,
        K: Into<String>,
    {
        self.entries.clear();
        self.entries
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AttributeValue> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `value` under `key` if the key is not present yet. Returns whether it inserted.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> bool {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
        }
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.insert(key, AttributeValue::String(value.into()))
    }

    pub fn insert_int(&mut self, key: impl Into<String>, value: i64) -> bool {
        self.insert(key, AttributeValue::Int(value))
    }

    pub fn insert_double(&mut self, key: impl Into<String>, value: f64) -> bool {
        self.insert(key, AttributeValue::Double(value))
    }

    pub fn insert_bool(&mut self, key: impl Into<String>, value: bool) -> bool {
        self.insert(key, AttributeValue::Bool(value))
    }

    /// Replaces the value of an existing key. Returns whether the key was present.
    pub fn update(&mut self, key: &str, value: impl Into<AttributeValue>) -> bool {
        match self.entries.get_mut(key) {
            Some(current) => {
                *current = value.into();
                true
            }
            None => false,
        }
    }

    /// Inserts or replaces the value of `key`. A replaced key keeps its position.
    pub fn upsert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AttributeValue> {
        self.entries.iter()
    }

    /// Keys are unique: when the list repeats a key, the later value wins and the key keeps its
    /// first position. A `KeyValue` without a value reads as [`AttributeValue::KeyOnly`], one
    /// holding an unset `AnyValue` as [`AttributeValue::Empty`].
    pub(crate) fn from_proto(attributes: Vec<KeyValue>) -> Self {
        attributes
            .into_iter()
            .map(|kv| {
                let value = kv.value.map_or(AttributeValue::KeyOnly, AttributeValue::from);
                (kv.key, value)
            })
            .collect()
    }

    pub(crate) fn into_proto(self) -> Vec<KeyValue> {
        self.entries
            .into_iter()
            .map(|(key, value)| KeyValue {
                key,
                value: (!value.is_key_only()).then(|| value.into()),
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AttributeMap {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a AttributeValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
