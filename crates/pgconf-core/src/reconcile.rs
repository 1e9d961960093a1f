//! # Reconciliation
//!
//! Compares the live parameter names with the names declared in the category
//! file. The result is two sorted lists; both must be empty before a schema
//! may be generated.

use std::collections::BTreeSet;

use crate::category::CategoryMap;
use crate::record::SettingsCatalog;

/// Symmetric difference between declared and live parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Declared in the category file but not reported by the server.
    pub declared_but_absent: Vec<String>,
    /// Reported by the server but not declared in any category.
    pub present_but_undeclared: Vec<String>,
}

impl ComparisonResult {
    /// True when both difference lists are empty.
    pub fn is_in_sync(&self) -> bool {
        self.declared_but_absent.is_empty() && self.present_but_undeclared.is_empty()
    }
}

/// Reconcile the live settings against the category map.
pub fn reconcile(settings: &SettingsCatalog, categories: &CategoryMap) -> ComparisonResult {
    let live: BTreeSet<&str> = settings.keys().map(String::as_str).collect();
    let declared = categories.declared_names();

    // BTreeSet difference iterates in sorted order.
    ComparisonResult {
        declared_but_absent: declared.difference(&live).map(|s| s.to_string()).collect(),
        present_but_undeclared: live.difference(&declared).map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::record::{ParameterRecord, VarType};

    fn catalog(names: &[&str]) -> SettingsCatalog {
        names
            .iter()
            .map(|n| (n.to_string(), ParameterRecord::new(*n, VarType::String)))
            .collect()
    }

    fn categories(groups: &[(&str, &[&str])]) -> CategoryMap {
        CategoryMap::new(
            groups
                .iter()
                .map(|(name, params)| Category {
                    name: name.to_string(),
                    parameters: params.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
        )
    }

    #[test]
    fn identical_sets_are_in_sync() {
        let result = reconcile(
            &catalog(&["shared_buffers", "log_min_messages"]),
            &categories(&[("memory", &["shared_buffers"]), ("logging", &["log_min_messages"])]),
        );
        assert!(result.is_in_sync());
    }

    #[test]
    fn declared_name_missing_from_server() {
        let result = reconcile(
            &catalog(&["shared_buffers"]),
            &categories(&[("memory", &["shared_buffers", "work_mem"])]),
        );
        assert_eq!(result.declared_but_absent, vec!["work_mem"]);
        assert!(result.present_but_undeclared.is_empty());
        assert!(!result.is_in_sync());
    }

    #[test]
    fn server_name_missing_from_categories() {
        let result = reconcile(
            &catalog(&["jit", "shared_buffers"]),
            &categories(&[("memory", &["shared_buffers"])]),
        );
        assert!(result.declared_but_absent.is_empty());
        assert_eq!(result.present_but_undeclared, vec!["jit"]);
    }

    #[test]
    fn both_lists_are_sorted() {
        let result = reconcile(
            &catalog(&["zeta", "alpha", "common"]),
            &categories(&[("a", &["yankee", "common", "bravo"])]),
        );
        assert_eq!(result.declared_but_absent, vec!["bravo", "yankee"]);
        assert_eq!(result.present_but_undeclared, vec!["alpha", "zeta"]);
    }

    #[test]
    fn duplicates_across_categories_do_not_matter() {
        let result = reconcile(
            &catalog(&["a", "b"]),
            &categories(&[("x", &["a", "b"]), ("y", &["a"])]),
        );
        assert!(result.is_in_sync());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::category::Category;
    use crate::record::{ParameterRecord, VarType};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        /// In sync exactly when the declared name set equals the live key set.
        #[test]
        fn in_sync_iff_sets_equal(
            live in prop::collection::btree_set("[a-z_]{1,8}", 0..12),
            declared in prop::collection::vec("[a-z_]{1,8}", 0..12),
        ) {
            let settings: SettingsCatalog = live
                .iter()
                .map(|n| (n.clone(), ParameterRecord::new(n.clone(), VarType::Bool)))
                .collect();
            let map = CategoryMap::new(vec![Category {
                name: "all".to_string(),
                parameters: declared.clone(),
            }]);
            let declared_set: BTreeSet<String> = declared.into_iter().collect();

            let result = reconcile(&settings, &map);
            prop_assert_eq!(result.is_in_sync(), declared_set == live);

            for name in &result.declared_but_absent {
                prop_assert!(declared_set.contains(name) && !live.contains(name));
            }
            for name in &result.present_but_undeclared {
                prop_assert!(live.contains(name) && !declared_set.contains(name));
            }
            let mut sorted = result.declared_but_absent.clone();
            sorted.sort();
            prop_assert_eq!(sorted, result.declared_but_absent);
        }
    }
}
