//! Route data model: a screen name plus a parameter payload.

use serde_json::{Map, Value};

/// Parameter payload carried by a route. String keys, arbitrary JSON values.
/// An empty map means no params were ever supplied for the route.
pub type Params = Map<String, Value>;

/// One entry in the navigation history.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    name: String,
    params: Params,
}

impl Route {
    pub(crate) fn new(name: impl Into<String>, params: Params) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Name of the screen this route points at.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full parameter payload for this history entry.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Look up a single parameter by key.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Merge `incoming` into this route's params. Incoming keys override
    /// same-named existing keys, all other existing keys are preserved.
    pub(crate) fn merge_params(&mut self, incoming: Params) {
        for (key, value) in incoming {
            self.params.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Params {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn merge_overrides_and_preserves() {
        let mut route = Route::new("home", params(json!({"a": 1, "b": 2})));
        route.merge_params(params(json!({"b": 3, "c": 4})));
        assert_eq!(route.params(), &params(json!({"a": 1, "b": 3, "c": 4})));
    }

    #[test]
    fn merge_into_empty_params() {
        let mut route = Route::new("home", Params::new());
        assert_eq!(route.param("post"), None);
        route.merge_params(params(json!({"post": "hi"})));
        assert_eq!(route.param("post"), Some(&json!("hi")));
    }
}
