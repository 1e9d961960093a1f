//! # Parameter Records
//!
//! Typed representation of one configurable setting as reported by the live
//! settings catalog. Records are built fresh on every run and never mutated.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// All live parameters, keyed by name.
///
/// A `BTreeMap` keeps iteration lexicographic, which keeps every derived
/// artifact reproducible.
pub type SettingsCatalog = BTreeMap<String, ParameterRecord>;

/// Variable type tag of a setting (`pg_settings.vartype`).
///
/// Unknown tags are preserved in [`VarType::Other`] rather than rejected so
/// that newer servers remain usable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VarType {
    /// `bool`
    Bool,
    /// `integer`
    Integer,
    /// `real`
    Real,
    /// `string`
    String,
    /// `enum`
    Enum,
    /// Any tag outside the known set.
    Other(String),
}

impl VarType {
    /// Parse a catalog type tag. Never fails.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "bool" => Self::Bool,
            "integer" => Self::Integer,
            "real" => Self::Real,
            "string" => Self::String,
            "enum" => Self::Enum,
            other => Self::Other(other.to_string()),
        }
    }

    /// The catalog spelling of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::String => "string",
            Self::Enum => "enum",
            Self::Other(tag) => tag,
        }
    }

    /// Whether settings of this type carry numeric bounds.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for VarType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<VarType> for String {
    fn from(var_type: VarType) -> Self {
        var_type.as_str().to_string()
    }
}

/// One configurable setting with its metadata.
///
/// Numeric bounds and the reset value are kept in their textual catalog form;
/// conversion to native types happens during schema generation, where a bad
/// value can be reported without aborting the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Unique parameter name.
    pub name: String,
    /// One-line description.
    pub short_description: String,
    /// Variable type tag.
    pub var_type: VarType,
    /// Unit of measure (e.g. `8kB`, `ms`).
    pub unit: Option<String>,
    /// Minimum allowed value, textual.
    pub min_value: Option<String>,
    /// Maximum allowed value, textual.
    pub max_value: Option<String>,
    /// Allowed values for `enum` settings, in catalog order.
    pub enum_values: Option<Vec<String>>,
    /// Default value in its native textual form.
    pub reset_value: Option<String>,
}

impl ParameterRecord {
    /// A record with the given name and type and no optional metadata.
    pub fn new(name: impl Into<String>, var_type: VarType) -> Self {
        Self {
            name: name.into(),
            short_description: String::new(),
            var_type,
            unit: None,
            min_value: None,
            max_value: None,
            enum_values: None,
            reset_value: None,
        }
    }

    /// Set the short description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = description.into();
        self
    }

    /// Set the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set both bounds.
    pub fn with_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min_value = Some(min.into());
        self.max_value = Some(max.into());
        self
    }

    /// Set the reset (default) value.
    pub fn with_reset(mut self, reset: impl Into<String>) -> Self {
        self.reset_value = Some(reset.into());
        self
    }

    /// Set the enumerated values.
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// The unit, if present and non-empty.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }
}
