//! # Error Types — Document Loading Failures
//!
//! Defines the errors raised while turning raw text into a document tree.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Convention violations found during rule evaluation are **not** errors —
//! they are [`Diagnostic`](crate::Diagnostic) values. The only failures in
//! this workspace happen before evaluation starts: the input text does not
//! parse, or a YAML construct has no JSON equivalent.

use thiserror::Error;

/// Error while loading a document into the in-memory tree.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML parsed but uses a construct with no JSON equivalent
    /// (a non-scalar mapping key, or a float JSON cannot represent).
    #[error("unsupported YAML structure: {0}")]
    UnsupportedYaml(String),
}
