//! Typed schema document.
//!
//! Field declaration order is serialization order, so the structs below fix
//! the key order of the output file.

use std::collections::BTreeMap;

use pgconf_core::VarType;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Description of the top-level document.
pub const DOCUMENT_DESCRIPTION: &str =
    "Schema for PostgreSQL configuration settings (postgresql.conf), grouped by category.";

/// JSON-Schema primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Object,
    Boolean,
    Integer,
    Number,
    String,
}

impl JsonType {
    /// Map a catalog type tag to its JSON-Schema primitive.
    ///
    /// `enum` settings are strings constrained by an `enum` list. Unknown
    /// tags fall back to `string`.
    pub fn for_var_type(var_type: &VarType) -> Self {
        match var_type {
            VarType::Bool => Self::Boolean,
            VarType::Integer => Self::Integer,
            VarType::Real => Self::Number,
            VarType::String | VarType::Enum | VarType::Other(_) => Self::String,
        }
    }
}

/// A natively typed scalar: a default value or a numeric bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

/// Schema for a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    #[serde(rename = "type")]
    pub json_type: JsonType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<SchemaValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<SchemaValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<SchemaValue>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl PropertyDescriptor {
    /// A descriptor with only type and description set.
    pub fn new(json_type: JsonType, description: impl Into<String>) -> Self {
        Self {
            json_type,
            description: description.into(),
            default: None,
            minimum: None,
            maximum: None,
            enum_values: None,
        }
    }
}

/// Schema for one category: an object whose properties are parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySchema {
    #[serde(rename = "type")]
    pub json_type: JsonType,
    pub description: String,
    /// Keyed by parameter name; always lexicographic.
    pub properties: BTreeMap<String, PropertyDescriptor>,
}

impl CategorySchema {
    /// An empty category schema.
    pub fn new(category: &str) -> Self {
        Self {
            json_type: JsonType::Object,
            description: format!("Settings for the {category} category."),
            properties: BTreeMap::new(),
        }
    }
}

/// Category schemas in declaration order.
///
/// Serializes as a mapping whose key order is insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySchemas {
    entries: Vec<(String, CategorySchema)>,
}

impl CategorySchemas {
    /// Insert a category. A repeated name replaces the earlier schema in place.
    pub fn insert(&mut self, name: String, schema: CategorySchema) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = schema,
            None => self.entries.push((name, schema)),
        }
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&CategorySchema> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, schema)| schema)
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategorySchema)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategorySchemas {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, schema) in &self.entries {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

/// The complete categorized schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    #[serde(rename = "type")]
    pub json_type: JsonType,
    pub description: String,
    pub properties: CategorySchemas,
}

impl SchemaDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self {
            json_type: JsonType::Object,
            description: DOCUMENT_DESCRIPTION.to_string(),
            properties: CategorySchemas::default(),
        }
    }

    /// Look up a property by category and parameter name.
    pub fn property(&self, category: &str, parameter: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(category)?.properties.get(parameter)
    }

    /// Total number of parameter properties across all categories.
    pub fn property_count(&self) -> usize {
        self.properties.iter().map(|(_, c)| c.properties.len()).sum()
    }
}

impl Default for SchemaDocument {
    fn default() -> Self {
        Self::new()
    }
}
