//! Operator-facing comparison report.

use std::fmt::Write;

use pgconf_core::ComparisonResult;

/// Header printed before the comparison outcome.
pub const RESULTS_HEADER: &str = "--- Comparison Results ---";

/// Line printed when settings and categories agree.
pub const IN_SYNC_LINE: &str =
    "✓ The settings in the YAML file and the database are perfectly in sync.";

const DECLARED_BUT_ABSENT_LABEL: &str =
    "✗ Settings in YAML but NOT in the database (potential typos or old settings):";
const PRESENT_BUT_UNDECLARED_LABEL: &str =
    "✗ Settings in the database but NOT in YAML (missing from YAML):";

/// Render the mismatch lists. Empty lists are left out; every name is listed.
pub fn render_mismatch(result: &ComparisonResult) -> String {
    let mut out = String::new();
    for (label, names) in [
        (DECLARED_BUT_ABSENT_LABEL, &result.declared_but_absent),
        (PRESENT_BUT_UNDECLARED_LABEL, &result.present_but_undeclared),
    ] {
        if names.is_empty() {
            continue;
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "\n{label}");
        for name in names {
            let _ = writeln!(out, "  - {name}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_name_under_its_label() {
        let result = ComparisonResult {
            declared_but_absent: vec!["old_setting".into(), "work_mem".into()],
            present_but_undeclared: vec!["jit".into()],
        };
        let text = render_mismatch(&result);
        let absent_at = text.find("NOT in the database").unwrap();
        let undeclared_at = text.find("NOT in YAML").unwrap();
        assert!(absent_at < undeclared_at);
        assert!(text.contains("  - old_setting\n  - work_mem\n"));
        assert!(text.contains("  - jit\n"));
    }

    #[test]
    fn empty_side_is_omitted() {
        let result = ComparisonResult {
            declared_but_absent: Vec::new(),
            present_but_undeclared: vec!["jit".into()],
        };
        let text = render_mismatch(&result);
        assert!(!text.contains("NOT in the database"));
        assert!(text.contains("NOT in YAML"));
    }

    #[test]
    fn in_sync_renders_nothing() {
        assert!(render_mismatch(&ComparisonResult::default()).is_empty());
    }
}
