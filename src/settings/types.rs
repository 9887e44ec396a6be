use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Settings document returned by the admin API: current values plus the
/// schema that describes how each field is rendered.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub values: Map<String, Value>,
    #[serde(default)]
    pub schema: Schema,
}

/// Field descriptions keyed by setting name, in server order.
///
/// Properties are parsed once when the document is read.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "RawSchema")]
pub struct Schema {
    properties: Vec<(String, PropertySchema)>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct RawSchema {
    #[serde(default)]
    properties: Map<String, Value>,
    #[serde(default)]
    description: Option<String>,
}

impl From<RawSchema> for Schema {
    fn from(raw: RawSchema) -> Self {
        let properties = raw
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), parse_property(key, value)))
            .collect();
        Self {
            properties,
            description: raw.description,
        }
    }
}

/// A property whose metadata does not match the expected shape keeps
/// whatever `type` and `description` are readable; the rest is dropped.
fn parse_property(key: &str, raw: &Value) -> PropertySchema {
    PropertySchema::deserialize(raw).unwrap_or_else(|err| {
        tracing::warn!(key, error = %err, "Unreadable schema property, keeping type only");
        PropertySchema {
            kind: raw
                .get("type")
                .and_then(|kind| PropertyType::deserialize(kind).ok())
                .unwrap_or_default(),
            description: raw
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            ..PropertySchema::default()
        }
    })
}

/// Metadata for a single field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PropertySchema {
    #[serde(default, rename = "type")]
    pub kind: PropertyType,
    #[serde(default, rename = "enum", deserialize_with = "string_options")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub items: Option<ItemsSchema>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Element description for array-typed fields.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ItemsSchema {
    #[serde(default, rename = "type")]
    pub kind: PropertyType,
    #[serde(default, rename = "enum", deserialize_with = "string_options")]
    pub options: Option<Vec<String>>,
}

/// `enum` values usable as choices. Non-string members (`null`, numbers)
/// are skipped; an `enum` that is not a list is ignored.
fn string_options<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Response body of the update call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateResponse {
    pub settings: Map<String, Value>,
}

/// JSON-Schema `type` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    Unspecified,
    Boolean,
    String,
    Array,
    Integer,
    Number,
    Object,
    Null,
    Other(String),
}

impl PropertyType {
    pub fn parse(s: &str) -> Self {
        match s {
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "array" => Self::Array,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "object" => Self::Object,
            "null" => Self::Null,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unspecified => "",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Array => "array",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Object => "object",
            Self::Null => "null",
            Self::Other(name) => name,
        }
    }

    /// Free text for these types is kept verbatim instead of parsed as JSON.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::String | Self::Unspecified)
    }
}

impl<'de> Deserialize<'de> for PropertyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        // `["string", "null"]` means a nullable string: the first non-null
        // member decides how the field is rendered.
        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(name) => Self::parse(&name),
            Raw::Many(names) => {
                let parsed: Vec<Self> = names.iter().map(|name| Self::parse(name)).collect();
                parsed
                    .iter()
                    .find(|kind| **kind != Self::Null)
                    .or_else(|| parsed.first())
                    .cloned()
                    .unwrap_or_default()
            }
        })
    }
}

/// One renderable field: key, its schema and the stored value (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    pub key: &'a str,
    pub property: &'a PropertySchema,
    pub value: Option<&'a Value>,
}

impl Settings {
    /// Fields in schema order, paired with their current values.
    pub fn fields(&self) -> Vec<Field<'_>> {
        self.schema
            .properties
            .iter()
            .map(|(key, property)| Field {
                key,
                property,
                value: self.values.get(key),
            })
            .collect()
    }

    pub fn field_count(&self) -> usize {
        self.schema.properties.len()
    }

    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.schema.properties.get(index).map(|(key, _)| key.as_str())
    }
}

impl Schema {
    pub fn property(&self, key: &str) -> Option<&PropertySchema> {
        self.properties
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, property)| property)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.property(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(key, _)| key.as_str())
    }
}
