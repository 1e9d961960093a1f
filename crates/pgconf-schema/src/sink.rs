//! YAML output of the schema document.

use std::path::Path;

use crate::document::SchemaDocument;
use crate::error::SchemaError;

/// Words a YAML 1.1 reader resolves to a boolean or null when left plain.
const YAML11_RESERVED: [&str; 9] = ["y", "n", "yes", "no", "on", "off", "true", "false", "null"];

/// Render the document as YAML.
///
/// String scalars such as `on` or `off` are single-quoted so that YAML 1.1
/// readers load them back as strings.
pub fn to_yaml(document: &SchemaDocument) -> Result<String, SchemaError> {
    let yaml =
        serde_yaml::to_string(document).map_err(|e| SchemaError::Serialize(e.to_string()))?;
    Ok(quote_yaml11_scalars(&yaml))
}

/// A plain scalar that YAML 1.1 would not read back as a string.
///
/// serde_yaml already quotes strings spelled `true`, `false` or `null`, so
/// those exact spellings in plain position are real booleans and nulls.
fn is_yaml11_ambiguous(scalar: &str) -> bool {
    !matches!(scalar, "true" | "false" | "null")
        && YAML11_RESERVED
            .iter()
            .any(|word| scalar.eq_ignore_ascii_case(word))
}

fn quoted(scalar: &str) -> String {
    if is_yaml11_ambiguous(scalar) {
        format!("'{scalar}'")
    } else {
        scalar.to_string()
    }
}

/// Whether a line ends in a literal or folded block header (`|`, `|-`, `>2+`).
fn opens_block_scalar(line: &str) -> bool {
    let Some(last) = line.split_whitespace().last() else {
        return false;
    };
    let mut chars = last.chars();
    matches!(chars.next(), Some('|' | '>'))
        && chars.all(|c| c.is_ascii_digit() || c == '-' || c == '+')
}

/// Single-quote plain keys and values that are YAML 1.1 reserved words.
///
/// Works line by line on block-style serde_yaml output. Lines inside a
/// block scalar are copied unchanged.
fn quote_yaml11_scalars(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    let mut block_indent: Option<usize> = None;

    for line in yaml.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if let Some(parent) = block_indent {
            if line.trim().is_empty() || indent > parent {
                out.push_str(line);
                out.push('\n');
                continue;
            }
            block_indent = None;
        }
        if opens_block_scalar(line) {
            block_indent = Some(indent);
        }

        let (head, mut rest) = line.split_at(indent);
        out.push_str(head);
        while let Some(item) = rest.strip_prefix("- ") {
            out.push_str("- ");
            rest = item;
        }

        if rest.starts_with(['\'', '"']) {
            out.push_str(rest);
        } else if let Some(key) = rest.strip_suffix(':') {
            out.push_str(&quoted(key));
            out.push(':');
        } else if let Some((key, value)) = rest.split_once(": ") {
            out.push_str(&quoted(key));
            out.push_str(": ");
            out.push_str(&quoted(value));
        } else {
            out.push_str(&quoted(rest));
        }
        out.push('\n');
    }
    out
}

/// Write the document to `path`, replacing any existing file.
///
/// The document is fully rendered before the file is opened, so a
/// serialization failure leaves the existing file untouched.
pub fn write_schema(document: &SchemaDocument, path: &Path) -> Result<(), SchemaError> {
    let yaml = to_yaml(document)?;
    std::fs::write(path, yaml).map_err(|source| SchemaError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote schema document");
    Ok(())
}
