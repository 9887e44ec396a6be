use serde_json::{Map, Value};

use super::types::Settings;

/// Pending values while the panel is in edit mode.
///
/// Keys are always a subset of the schema's property keys. Values are not
/// checked against their declared type; the server is the validator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditBuffer {
    values: Map<String, Value>,
    original: Map<String, Value>,
    allowed: Vec<String>,
}

impl EditBuffer {
    /// Copy the displayed values of every schema field into a new buffer.
    pub fn from_settings(settings: &Settings) -> Self {
        let values: Map<String, Value> = settings
            .values
            .iter()
            .filter(|(key, _)| settings.schema.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            original: values.clone(),
            values,
            allowed: settings.schema.keys().map(str::to_string).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Store a pending value. Returns false for keys outside the schema.
    pub fn set(&mut self, key: &str, value: Value) -> bool {
        if !self.allowed.iter().any(|allowed| allowed == key) {
            return false;
        }
        self.values.insert(key.to_string(), value);
        true
    }

    /// True when any pending value differs from what the buffer started with.
    pub fn is_dirty(&self) -> bool {
        self.values != self.original
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }
}
