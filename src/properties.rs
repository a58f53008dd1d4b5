use std::{
    collections::HashMap,
    env,
    sync::{PoisonError, RwLock},
};

use serde::{Deserialize, Serialize};

/// A raw value held by a property store. Stores are untyped; the resolver
/// coerces at its own boundary instead of trusting the declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    String(String),
}

impl PropertyValue {
    /// Generic textual rendering, never validated or truncated.
    pub fn as_text(&self) -> String {
        match self {
            Self::String(value) => value.clone(),
            Self::Bool(value) => value.to_string(),
        }
    }

    /// Lenient boolean reading: the literal `true` in any letter case is
    /// true, everything else is false. Malformed text never errors.
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::String(value) => value.eq_ignore_ascii_case("true"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Capability the hosting application supplies: a generic key/value
/// configuration source. Implementations are read by the options resolver
/// and never mutated through this trait.
pub trait PropertyStore: Send + Sync {
    /// Point-in-time read of one property. `None` means the store has no
    /// usable value for the key.
    fn property(&self, key: &str) -> Option<PropertyValue>;
}

/// Map-backed store the hosting application populates directly or from a
/// JSON document. Mutations are visible to subsequent resolver calls.
#[derive(Default)]
pub struct InMemoryPropertyStore {
    entries: RwLock<HashMap<String, PropertyValue>>,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.write_entries().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.write_entries().remove(key);
    }

    pub fn clear(&self) {
        self.write_entries().clear();
    }

    /// Merges a batch of properties into the store, overwriting existing
    /// keys.
    pub fn load(&self, properties: impl IntoIterator<Item = (String, PropertyValue)>) {
        self.write_entries().extend(properties);
    }

    /// Merges the members of a JSON object into the store. Strings and
    /// booleans map directly, numbers keep their textual form; null, array
    /// and object members carry no usable scalar and are skipped.
    pub fn load_json(&self, document: serde_json::Value) -> Result<(), String> {
        let serde_json::Value::Object(members) = document else {
            return Err("properties document must be a JSON object".to_string());
        };
        let mut entries = self.write_entries();
        for (key, value) in members {
            let value = match value {
                serde_json::Value::String(text) => PropertyValue::String(text),
                serde_json::Value::Bool(flag) => PropertyValue::Bool(flag),
                serde_json::Value::Number(number) => PropertyValue::String(number.to_string()),
                _ => continue,
            };
            entries.insert(key, value);
        }
        Ok(())
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, PropertyValue>> {
        // A poisoned lock still holds usable entries.
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl PropertyStore for InMemoryPropertyStore {
    fn property(&self, key: &str) -> Option<PropertyValue> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

/// Store backed by process environment variables: `it.water.mail.smtp.host`
/// reads `IT_WATER_MAIL_SMTP_HOST`. Values are trimmed and stripped of
/// wrapping quotes; an empty result counts as absent.
#[derive(Default)]
pub struct EnvPropertyStore;

impl EnvPropertyStore {
    pub fn new() -> Self {
        Self
    }

    fn variable_name(key: &str) -> String {
        key.chars()
            .map(|c| match c {
                '.' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect()
    }

    fn strip_wrapping_quotes(value: &str) -> &str {
        if value.len() >= 2 {
            let bytes = value.as_bytes();
            let first = bytes[0];
            let last = bytes[value.len() - 1];
            if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
                return &value[1..value.len() - 1];
            }
        }
        value
    }
}

impl PropertyStore for EnvPropertyStore {
    fn property(&self, key: &str) -> Option<PropertyValue> {
        env::var(Self::variable_name(key)).ok().and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return None;
            }
            let normalized = Self::strip_wrapping_quotes(trimmed).trim();
            if normalized.is_empty() {
                None
            } else {
                Some(PropertyValue::String(normalized.to_string()))
            }
        })
    }
}
