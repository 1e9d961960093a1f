//! # Category Source
//!
//! Loads the operator-maintained category file: a YAML document whose
//! top-level `categories` key maps each category name to an ordered list of
//! parameter names.
//!
//! ```yaml
//! categories:
//!   memory:
//!     - shared_buffers
//!     - work_mem
//!   logging:
//!     - log_min_messages
//! ```
//!
//! Category order is the order of the mapping in the file. Parameter lists
//! are kept verbatim, duplicates and unknown names included; detecting those
//! is the reconciler's job.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::Value;

use crate::error::CategoryError;

/// Top-level key holding the category mapping.
pub const CATEGORIES_KEY: &str = "categories";

/// One named group of parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name as declared.
    pub name: String,
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
}

/// Ordered mapping from category name to parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    categories: Vec<Category>,
}

impl CategoryMap {
    /// Build a map from categories in declaration order.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Read and parse a category file.
    ///
    /// # Errors
    ///
    /// - [`CategoryError::NotFound`] if the file does not exist.
    /// - [`CategoryError::Read`] on any other IO failure.
    /// - [`CategoryError::Parse`] if the content is not valid YAML.
    /// - [`CategoryError::MissingKey`] if `categories` is absent or not a mapping.
    /// - [`CategoryError::InvalidEntry`] if a category is not a list of names.
    pub fn load(path: &Path) -> Result<Self, CategoryError> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CategoryError::NotFound {
                path: origin.clone(),
            },
            _ => CategoryError::Read {
                path: origin.clone(),
                source: e,
            },
        })?;

        let map = Self::from_yaml_str(&content, &origin)?;
        tracing::debug!(
            path = %origin,
            categories = map.len(),
            "loaded category file"
        );
        Ok(map)
    }

    /// Parse category YAML. `origin` names the source in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, CategoryError> {
        let document: Value =
            serde_yaml::from_str(content).map_err(|e| CategoryError::Parse {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        let mapping = document
            .get(CATEGORIES_KEY)
            .and_then(Value::as_mapping)
            .ok_or_else(|| CategoryError::MissingKey {
                path: origin.to_string(),
                key: CATEGORIES_KEY,
            })?;

        let mut categories = Vec::with_capacity(mapping.len());
        for (key, entries) in mapping {
            let name = category_name(key).ok_or_else(|| CategoryError::InvalidEntry {
                path: origin.to_string(),
                category: format!("{key:?}"),
                reason: "category name must be a scalar".to_string(),
            })?;
            let parameters = parameter_names(entries).map_err(|reason| {
                CategoryError::InvalidEntry {
                    path: origin.to_string(),
                    category: name.clone(),
                    reason,
                }
            })?;
            categories.push(Category { name, parameters });
        }

        Ok(Self { categories })
    }

    /// Iterate categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no categories are declared.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Union of all declared parameter names across every category.
    pub fn declared_names(&self) -> BTreeSet<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.parameters.iter().map(String::as_str))
            .collect()
    }
}

fn category_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parameter_names(entries: &Value) -> Result<Vec<String>, String> {
    match entries {
        // `memory:` with nothing under it.
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| format!("parameter name must be a string, found {item:?}"))
            })
            .collect(),
        other => Err(format!("expected a list of parameter names, found {other:?}")),
    }
}
