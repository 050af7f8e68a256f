use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A canonical attribute value. The normalized schema is flat: every
/// attribute is a string, an integer, or a boolean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// A security-event record under the canonical schema.
///
/// Attribute keys are the canonical names (EventType, DnsQuery,
/// EventResult, ...); raw fields with no canonical counterpart live in the
/// `AdditionalFields` attribute as a serialized JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRecord {
    /// Native creation time of the originating event.
    pub timestamp: DateTime<Utc>,
    /// Time this record was produced.
    pub observed_timestamp: DateTime<Utc>,
    /// Human-readable one-line description of the event.
    pub body: String,
    attributes: BTreeMap<String, AttrValue>,
}

impl NormalizedRecord {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            observed_timestamp: Utc::now(),
            body: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn put_str(&mut self, key: &str, value: impl Into<String>) {
        self.attributes
            .insert(key.to_string(), AttrValue::Str(value.into()));
    }

    pub fn put_int(&mut self, key: &str, value: i64) {
        self.attributes.insert(key.to_string(), AttrValue::Int(value));
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.attributes
            .insert(key.to_string(), AttrValue::Bool(value));
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(AttrValue::as_i64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(AttrValue::as_bool)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}
