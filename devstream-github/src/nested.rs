/// Path lookup in nested JSON payloads
///
/// API payloads arrive as `serde_json::Value` trees; handlers frequently
/// need one leaf several levels down. `lookup_path` walks a key path and
/// reports the first key that can't be followed, whether it is absent or
/// the current node isn't an object.

use serde_json::Value as JsonValue;

/// Lookup error: the named key could not be followed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("key not found: '{key}'")]
pub struct PathError {
    /// First key on the path that failed
    pub key: String,
}

/// Follows `path` through nested JSON objects
///
/// # Returns
///
/// A reference to the value at the end of the path
///
/// # Errors
///
/// Returns [`PathError`] naming the first key that is either missing from
/// its object or applied to a non-object value
///
/// # Example
///
/// ```
/// use devstream_github::nested::lookup_path;
/// use serde_json::json;
///
/// let payload = json!({"license": {"key": "apache-2.0"}});
/// let key = lookup_path(&payload, &["license", "key"]).unwrap();
/// assert_eq!(key.as_str(), Some("apache-2.0"));
/// ```
pub fn lookup_path<'a>(value: &'a JsonValue, path: &[&str]) -> Result<&'a JsonValue, PathError> {
    let mut current = value;

    for key in path {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| PathError {
                key: (*key).to_string(),
            })?;
    }

    Ok(current)
}
