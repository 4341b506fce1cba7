//! The bundler configuration value produced by the pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

/// Nested bundler settings.
///
/// Backed by a JSON object so user fragments may carry keys the pipeline
/// knows nothing about. Typed accessors cover the substructures the
/// pipeline itself reads: `output`, `entry`, and `resolve`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(Map<String, Value>);

impl Configuration {
    /// Create from a `serde_json::Value` (for programmatic fragments)
    ///
    /// # Example
    ///
    /// ```
    /// use guidebook_config::Configuration;
    /// use serde_json::json;
    ///
    /// let config = Configuration::from_value(json!({
    ///     "resolve": { "extensions": [".scss"] }
    /// }))
    /// .unwrap();
    /// assert_eq!(config.resolve_extensions(), vec![".scss"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ConfigError::InvalidValue {
                field: "configuration".to_string(),
                message: format!("expected a table of bundler settings, got {}", value_kind(&other)),
            }),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Convert to `serde_json::Value`
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Output bundle naming template, when set
    pub fn output_filename(&self) -> Option<&str> {
        self.get_path(&["output", "filename"]).and_then(Value::as_str)
    }

    /// Output chunk naming template, when set
    pub fn output_chunk_filename(&self) -> Option<&str> {
        self.get_path(&["output", "chunkFilename"])
            .and_then(Value::as_str)
    }

    /// Top-level entry modules, in bundle order
    pub fn entry(&self) -> Vec<&str> {
        self.string_sequence(&["entry"])
    }

    /// Extensions resolved without an explicit suffix, in probe order
    pub fn resolve_extensions(&self) -> Vec<&str> {
        self.string_sequence(&["resolve", "extensions"])
    }

    /// Module aliases contributed by slot replacements and user fragments
    pub fn resolve_alias(&self) -> Option<&Map<String, Value>> {
        self.get_path(&["resolve", "alias"]).and_then(Value::as_object)
    }

    fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(key))
    }

    fn string_sequence(&self, path: &[&str]) -> Vec<&str> {
        self.get_path(path)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub(crate) fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    /// Append a module to `entry`, creating the sequence when absent.
    /// Duplicates are kept as given.
    pub(crate) fn push_entry(&mut self, module: &str) {
        let entry = self
            .0
            .entry("entry".to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = entry {
            items.push(Value::String(module.to_string()));
        }
    }

    /// Record a `resolve.alias` mapping, creating intermediate tables when
    /// absent.
    pub(crate) fn insert_alias(&mut self, key: String, path: String) {
        let resolve = self
            .0
            .entry("resolve".to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(resolve) = resolve {
            let alias = resolve
                .entry("alias".to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(alias) = alias {
                alias.insert(key, Value::String(path));
            }
        }
    }
}

/// Human-readable kind of a JSON value, for error messages
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
