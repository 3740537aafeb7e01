use serde_json::Value;

/// Response key holding the access token, matched case-insensitively.
pub const TOKEN_KEY: &str = "TKN_INFO";

/// Depth-first search for the token value anywhere in a JSON structure.
///
/// At an object, a key matching [`TOKEN_KEY`] case-insensitively whose
/// value is a string with non-whitespace content wins immediately;
/// otherwise the walk descends into every value in traversal order.
/// Arrays are walked in index order. Scalars and null end the branch.
///
/// Returns `None` when no usable token exists anywhere; never panics
/// and never mutates the input.
pub fn find_token(value: &Value) -> Option<&str> {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if key.eq_ignore_ascii_case(TOKEN_KEY) {
                    if let Some(s) = val.as_str() {
                        if !s.trim().is_empty() {
                            return Some(s);
                        }
                    }
                }
                if let Some(found) = find_token(val) {
                    return Some(found);
                }
            }
            None
        }
        Value::Array(items) => items.iter().find_map(find_token),
        _ => None,
    }
}
