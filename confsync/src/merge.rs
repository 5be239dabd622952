//! Recursive merging of configuration documents.
//!
//! Desired values override current values at every nesting level. Mappings
//! merge key-by-key; scalars and sequences are replaced wholesale.

use serde_yaml::Value;

use crate::document::ConfigDocument;

/// Merges `desired` into `current`, returning the combined document.
///
/// # Merging Rules
///
/// - Keys present only in `current` are preserved
/// - Keys present only in `desired` are added
/// - When both sides hold mappings, the merge recurses
/// - Any other pairing replaces the current value with the desired one
///
/// Neither input is modified.
///
/// # Examples
///
/// ```
/// use confsync::{merge_documents, ConfigDocument};
///
/// let current = ConfigDocument::from_yaml_str("a: 1\nb:\n  x: 1").unwrap();
/// let desired = ConfigDocument::from_yaml_str("b:\n  y: 2\nc: 3").unwrap();
///
/// let merged = merge_documents(&current, &desired);
/// let expected = ConfigDocument::from_yaml_str("a: 1\nb:\n  x: 1\n  y: 2\nc: 3").unwrap();
/// assert_eq!(merged, expected);
/// ```
#[must_use]
pub fn merge_documents(current: &ConfigDocument, desired: &ConfigDocument) -> ConfigDocument {
    let mut merged = current.as_mapping().clone();
    for (key, value) in desired.as_mapping() {
        merge_value(merged.entry(key.clone()).or_insert(Value::Null), value);
    }
    ConfigDocument::from(merged)
}

/// Merges one desired value into its current slot.
fn merge_value(current: &mut Value, desired: &Value) {
    match (current, desired) {
        (Value::Mapping(cur), Value::Mapping(des)) => {
            for (key, value) in des {
                merge_value(cur.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (cur, des) => *cur = des.clone(),
    }
}
