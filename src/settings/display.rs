//! Read-mode rendering of setting values.

use serde_json::Value;

pub const ENABLED: &str = "Enabled";
pub const DISABLED: &str = "Disabled";
pub const NOT_SET: &str = "Not set";

/// How a stored value is shown when the panel is not editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadValue {
    /// Booleans: "Enabled" / "Disabled".
    Flag(bool),
    NotSet,
    /// One chip per array element.
    Chips(Vec<String>),
    /// Pretty-printed JSON object.
    Block(String),
    Scalar(String),
}

impl ReadValue {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::NotSet,
            Some(Value::Bool(flag)) => Self::Flag(*flag),
            Some(Value::Array(items)) => Self::Chips(items.iter().map(chip_label).collect()),
            Some(object @ Value::Object(_)) => Self::Block(
                serde_json::to_string_pretty(object).unwrap_or_else(|_| object.to_string()),
            ),
            Some(scalar) => Self::Scalar(stringify(scalar)),
        }
    }

    /// Single-line summary, used by the non-interactive `show` command.
    pub fn summary(&self) -> String {
        match self {
            Self::Flag(true) => ENABLED.to_string(),
            Self::Flag(false) => DISABLED.to_string(),
            Self::NotSet => NOT_SET.to_string(),
            Self::Chips(chips) if chips.is_empty() => "(empty)".to_string(),
            Self::Chips(chips) => chips
                .iter()
                .map(|chip| format!("[{chip}]"))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Block(text) | Self::Scalar(text) => text.clone(),
        }
    }
}

/// Strings are shown bare, everything else as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn chip_label(item: &Value) -> String {
    match item {
        Value::Object(_) | Value::Array(_) => item.to_string(),
        other => stringify(other),
    }
}
