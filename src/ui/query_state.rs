use std::collections::BTreeMap;

/// Explicit, typed navigable query state.
///
/// A single source of truth for URL-style query parameters: widgets read
/// their key out of it and write it back through [`set`](Self::set), which
/// never disturbs other keys. Keys are kept sorted so the serialized form
/// is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    params: BTreeMap<String, String>,
}

impl QueryState {
    /// Create an empty query state
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `key=value&key=value` query string, ignoring empty segments
    pub fn parse(query: &str) -> Self {
        let mut params = BTreeMap::new();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            match pair.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    params.insert(key.to_string(), value.to_string());
                }
                _ => {}
            }
        }
        Self { params }
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Set a key, preserving all other existing keys
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Remove a key, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Serialize back to a `key=value&key=value` query string
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
