//! # Schema Generation
//!
//! Builds a [`SchemaDocument`] from the live settings and the category map.
//!
//! Categories are emitted in declaration order; parameters within each
//! category are emitted in lexicographic order regardless of how the
//! category file lists them. Callers are expected to reconcile first, but a
//! declared name with no live record is skipped with a warning rather than
//! treated as an error.

use std::collections::BTreeSet;

use pgconf_core::{CategoryMap, ParameterRecord, SettingsCatalog, VarType};

use crate::document::{CategorySchema, JsonType, PropertyDescriptor, SchemaDocument, SchemaValue};
use crate::error::{ConversionError, ConversionWarning, WarningField};

/// The generated document plus everything that was left out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSchema {
    pub document: SchemaDocument,
    /// Fields omitted because their value did not convert.
    pub warnings: Vec<ConversionWarning>,
    /// Declared parameters with no live record.
    pub skipped: Vec<String>,
}

/// Generate the categorized schema document.
pub fn generate_schema(settings: &SettingsCatalog, categories: &CategoryMap) -> GeneratedSchema {
    let mut document = SchemaDocument::new();
    let mut warnings = Vec::new();
    let mut skipped = Vec::new();

    for category in categories.iter() {
        let mut schema = CategorySchema::new(&category.name);

        let names: BTreeSet<&str> = category.parameters.iter().map(String::as_str).collect();
        for name in names {
            let Some(record) = settings.get(name) else {
                tracing::warn!(
                    parameter = %name,
                    category = %category.name,
                    "setting from YAML not found in database data; skipping"
                );
                skipped.push(name.to_string());
                continue;
            };

            let (descriptor, mut property_warnings) = describe_parameter(record);
            warnings.append(&mut property_warnings);
            schema.properties.insert(name.to_string(), descriptor);
        }

        document.properties.insert(category.name.clone(), schema);
    }

    tracing::debug!(
        categories = document.properties.len(),
        properties = document.property_count(),
        warnings = warnings.len(),
        "generated schema document"
    );

    GeneratedSchema {
        document,
        warnings,
        skipped,
    }
}

/// Build the property descriptor for one parameter.
///
/// Each optional field that fails to convert is omitted, logged, and
/// returned as a warning.
pub fn describe_parameter(
    record: &ParameterRecord,
) -> (PropertyDescriptor, Vec<ConversionWarning>) {
    let mut descriptor = PropertyDescriptor::new(
        JsonType::for_var_type(&record.var_type),
        description_for(record),
    );
    let mut warnings = Vec::new();

    let mut note = |field: WarningField, error: ConversionError| {
        let warning = ConversionWarning {
            parameter: record.name.clone(),
            field,
            error,
        };
        tracing::warn!(
            parameter = %warning.parameter,
            field = %warning.field,
            raw = warning.error.raw(),
            error = %warning.error,
            "could not convert value; omitting"
        );
        warnings.push(warning);
    };

    if let Some(raw) = record.reset_value.as_deref() {
        match convert_default(&record.var_type, raw) {
            Ok(value) => descriptor.default = Some(value),
            Err(e) => note(WarningField::Default, e),
        }
    }

    if record.var_type.is_numeric() {
        if let Some(raw) = record.min_value.as_deref() {
            match convert_number(&record.var_type, raw) {
                Ok(value) => descriptor.minimum = Some(value),
                Err(e) => note(WarningField::Minimum, e),
            }
        }
        if let Some(raw) = record.max_value.as_deref() {
            match convert_number(&record.var_type, raw) {
                Ok(value) => descriptor.maximum = Some(value),
                Err(e) => note(WarningField::Maximum, e),
            }
        }
    }

    if record.var_type == VarType::Enum {
        descriptor.enum_values = record
            .enum_values
            .as_ref()
            .filter(|values| !values.is_empty())
            .cloned();
    }

    (descriptor, warnings)
}

fn description_for(record: &ParameterRecord) -> String {
    match record.unit() {
        Some(unit) => format!("{} (Unit: {unit})", record.short_description),
        None => record.short_description.clone(),
    }
}

fn convert_default(var_type: &VarType, raw: &str) -> Result<SchemaValue, ConversionError> {
    match var_type {
        VarType::Bool => Ok(SchemaValue::Bool(raw == "on")),
        VarType::Integer | VarType::Real => convert_number(var_type, raw),
        VarType::String | VarType::Enum | VarType::Other(_) => {
            Ok(SchemaValue::String(raw.to_string()))
        }
    }
}

/// Parse `raw` as an integer or real according to `var_type`.
fn convert_number(var_type: &VarType, raw: &str) -> Result<SchemaValue, ConversionError> {
    if *var_type == VarType::Integer {
        raw.trim()
            .parse::<i64>()
            .map(SchemaValue::Integer)
            .map_err(|e| ConversionError::InvalidInteger {
                raw: raw.to_string(),
                reason: e.to_string(),
            })
    } else {
        raw.trim()
            .parse::<f64>()
            .map(SchemaValue::Number)
            .map_err(|e| ConversionError::InvalidReal {
                raw: raw.to_string(),
                reason: e.to_string(),
            })
    }
}
