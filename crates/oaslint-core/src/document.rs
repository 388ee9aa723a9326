//! # Document Tree — Navigable, Read-Only, Insertion-Ordered
//!
//! Wraps a `serde_json::Value` as the in-memory document tree rules walk.
//! The `preserve_order` feature of `serde_json` is load-bearing: object
//! iteration must match the document's declared key order, because rules
//! emit diagnostics in traversal order and consumers assert on that order
//! exactly.
//!
//! ## YAML Ingestion
//!
//! OpenAPI documents are routinely authored in YAML. YAML has a richer type
//! system than JSON (tags, non-string keys), but API descriptions use only
//! the JSON-compatible subset; [`Document::from_yaml_str`] converts the YAML
//! value tree into the equivalent JSON value tree and rejects anything
//! outside that subset.

use serde_json::Value;

use crate::error::DocumentError;
use crate::path::NodePath;

/// A read-only view over one parsed API description document.
///
/// Holds the root of the tree; all navigation is borrowed. Nothing is
/// mutated or persisted across evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap an already-parsed tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        Ok(Self::new(serde_json::from_str(text)?))
    }

    /// Parse a YAML document, converting it to the JSON-compatible tree.
    pub fn from_yaml_str(text: &str) -> Result<Self, DocumentError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
        Ok(Self::new(yaml_to_json_value(&yaml)?))
    }

    /// The document root node.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up the node addressed by `path`, if it exists.
    ///
    /// Object children are matched by key; sequence children by the decimal
    /// index the segment parses to. Returns `None` for any segment that does
    /// not address a child, never errors.
    pub fn node_at(&self, path: &NodePath) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Tags are ignored (the tagged inner value is converted); non-scalar
/// mapping keys and unrepresentable floats are rejected.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, DocumentError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| {
                        DocumentError::UnsupportedYaml(format!(
                            "cannot represent float {f} in JSON"
                        ))
                    })
            } else {
                Err(DocumentError::UnsupportedYaml(format!(
                    "unsupported YAML number: {n:?}"
                )))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, DocumentError> =
                seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(DocumentError::UnsupportedYaml(format!(
                            "unsupported YAML map key type: {other:?}"
                        )))
                    }
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
