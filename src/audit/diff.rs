//! Field-level change summaries for audit entries

use serde_json::Value;

const MAX_TEXT: usize = 40;

/// Summarize top-level field changes between two serialized records
///
/// Fields are reported in the order they appear, `before` first. A field
/// missing on one side shows as `none`.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(old), Value::Object(new)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", render(before), render(after)));
    };

    let keys = old
        .keys()
        .chain(new.keys().filter(|key| !old.contains_key(*key)));

    let changes: Vec<String> = keys
        .filter_map(|key| {
            let was = old.get(key).unwrap_or(&Value::Null);
            let now = new.get(key).unwrap_or(&Value::Null);
            (was != now).then(|| format!("{}: {} -> {}", key, render(was), render(now)))
        })
        .collect();

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "none".to_string(),
        Value::String(s) if s.chars().count() > MAX_TEXT => {
            let head: String = s.chars().take(MAX_TEXT - 3).collect();
            format!("\"{}...\"", head)
        }
        other => other.to_string(),
    }
}
