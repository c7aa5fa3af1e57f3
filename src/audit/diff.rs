//! Diff generation for audit logging
//!
//! Summarizes what changed between the stored and the edited version of a
//! record, one `field: old -> new` pair per changed top-level field.

use serde_json::Value;

/// Bookkeeping fields that change on every edit and are left out of diffs
const IGNORED_FIELDS: [&str; 2] = ["updated_at", "created_at"];

/// Longest string value shown in full, in characters
const MAX_VALUE_CHARS: usize = 40;

/// Generate a human-readable diff between two JSON values
///
/// Returns `None` when nothing but bookkeeping fields changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                if IGNORED_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_VALUE_CHARS => {
            let head: String = s.chars().take(MAX_VALUE_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"title": "Gasolina", "amount": 25000});
        let after = json!({"title": "Gasolina", "amount": 27000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 25000 -> 27000");
    }

    #[test]
    fn test_timestamps_ignored() {
        let before = json!({"title": "Netflix", "updated_at": "2025-12-01T00:00:00Z"});
        let after = json!({"title": "Netflix", "updated_at": "2025-12-02T00:00:00Z"});

        assert!(generate_diff(&before, &after).is_none());
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"title": "Luz", "old": "value"});
        let after = json!({"title": "Luz", "description": "Fatura"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"value\" -> (removed)"));
        assert!(diff.contains("description: (added) -> \"Fatura\""));
    }

    #[test]
    fn test_long_multibyte_string_truncation() {
        let long = "ção".repeat(30);
        let before = json!({"description": long});
        let after = json!({"description": "curta"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
        assert!(generate_diff(&json!("a"), &json!("a")).is_none());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("Moradia")), "\"Moradia\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1})), "{1 fields}");
    }
}
