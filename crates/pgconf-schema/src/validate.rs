//! # Schema Self-Check
//!
//! Compiles the generated document with the `jsonschema` crate before it is
//! written, so a document that downstream validators would reject is never
//! persisted.

use jsonschema::Validator;
use serde_json::Value;

use crate::document::SchemaDocument;
use crate::error::SchemaError;

/// Render the document as a JSON value.
fn to_json_value(document: &SchemaDocument) -> Result<Value, SchemaError> {
    serde_json::to_value(document).map_err(|e| SchemaError::Serialize(e.to_string()))
}

/// Compile the document into a validator for settings instances.
///
/// # Errors
///
/// Returns [`SchemaError::Invalid`] if the document is not a valid JSON Schema.
pub fn compile(document: &SchemaDocument) -> Result<Validator, SchemaError> {
    let value = to_json_value(document)?;
    jsonschema::validator_for(&value).map_err(|e| SchemaError::Invalid {
        reason: e.to_string(),
    })
}

/// Verify the document compiles as a JSON Schema.
pub fn check_document(document: &SchemaDocument) -> Result<(), SchemaError> {
    compile(document)?;
    tracing::debug!("generated schema compiles");
    Ok(())
}
