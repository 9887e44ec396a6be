//! Edit-mode widgets derived from a field's schema.

use serde_json::Value;

use super::display::stringify;
use super::types::{PropertySchema, PropertyType};

/// Input widget chosen for a field while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEditor {
    Toggle(bool),
    /// Single choice constrained to the schema's `enum`.
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
    /// Any subset of the `items.enum` options.
    MultiSelect {
        options: Vec<String>,
        selected: Vec<bool>,
        /// Stored items that are not options. Written back untouched.
        extra: Vec<Value>,
    },
    /// Free text seeded with the stringified current value.
    Text(String),
}

impl FieldEditor {
    pub fn for_property(property: &PropertySchema, current: Option<&Value>) -> Self {
        match (&property.kind, enum_options(property)) {
            (PropertyType::Boolean, _) => {
                Self::Toggle(current.and_then(Value::as_bool).unwrap_or(false))
            }
            (PropertyType::String, Some(options)) => {
                let selected = current
                    .and_then(Value::as_str)
                    .and_then(|value| options.iter().position(|option| option == value));
                Self::Select { options, selected }
            }
            (PropertyType::Array, Some(options)) => {
                let items: &[Value] = current
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let selected = options
                    .iter()
                    .map(|option| items.iter().any(|item| item.as_str() == Some(option.as_str())))
                    .collect();
                let extra = items
                    .iter()
                    .filter(|item| {
                        !matches!(item.as_str(), Some(text) if options.iter().any(|option| option == text))
                    })
                    .cloned()
                    .collect();
                Self::MultiSelect {
                    options,
                    selected,
                    extra,
                }
            }
            _ => Self::Text(seed_text(current)),
        }
    }

    pub fn toggle(&mut self) {
        if let Self::Toggle(value) = self {
            *value = !*value;
        }
    }

    /// Step the single-select choice, wrapping at both ends.
    pub fn cycle(&mut self, forward: bool) {
        let Self::Select { options, selected } = self else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let last = options.len() - 1;
        *selected = Some(match (*selected, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(index), true) if index >= last => 0,
            (Some(index), true) => index + 1,
            (Some(0), false) => last,
            (Some(index), false) => index - 1,
        });
    }

    pub fn toggle_option(&mut self, index: usize) {
        if let Self::MultiSelect { selected, .. } = self {
            if let Some(flag) = selected.get_mut(index) {
                *flag = !*flag;
            }
        }
    }

    /// Number of options a cursor can move over (multi-select only).
    pub fn option_count(&self) -> usize {
        match self {
            Self::MultiSelect { options, .. } => options.len(),
            _ => 0,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The JSON value this widget currently represents.
    pub fn value(&self, kind: &PropertyType) -> Value {
        match self {
            Self::Toggle(flag) => Value::Bool(*flag),
            Self::Select { options, selected } => selected
                .and_then(|index| options.get(index))
                .map(|option| Value::String(option.clone()))
                .unwrap_or(Value::Null),
            Self::MultiSelect {
                options,
                selected,
                extra,
            } => Value::Array(
                options
                    .iter()
                    .zip(selected)
                    .filter(|(_, chosen)| **chosen)
                    .map(|(option, _)| Value::String(option.clone()))
                    .chain(extra.iter().cloned())
                    .collect(),
            ),
            Self::Text(text) => parse_text(kind, text),
        }
    }
}

/// Convert committed free text into a value for the buffer.
///
/// String fields keep the raw text. Other types are read as JSON and fall
/// back to the raw text, so the server sees what the user typed and decides.
pub fn parse_text(kind: &PropertyType, text: &str) -> Value {
    if kind.is_textual() {
        return Value::String(text.to_string());
    }
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

pub fn seed_text(current: Option<&Value>) -> String {
    match current {
        None | Some(Value::Null) => String::new(),
        Some(value) => stringify(value),
    }
}

fn enum_options(property: &PropertySchema) -> Option<Vec<String>> {
    let options = match property.kind {
        PropertyType::Array => property.items.as_ref()?.options.clone(),
        _ => property.options.clone(),
    }?;
    (!options.is_empty()).then_some(options)
}
