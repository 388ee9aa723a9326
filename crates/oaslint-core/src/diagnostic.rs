//! # Diagnostics — Path-Addressed Convention Violations
//!
//! Defines [`Diagnostic`], the record a rule emits for one convention
//! violation. Diagnostics are ordinary values: rules accumulate them and
//! return the list, they are never thrown.
//!
//! ## Ordering Invariant
//!
//! The order of a diagnostic list is the order of emission during document
//! traversal. Nothing downstream may sort it — consumers assert on the
//! sequence exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::NodePath;

/// One convention violation at one document location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Address of the node the violation is reported against, verbatim.
    pub path: NodePath,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic at `path`.
    pub fn new(path: NodePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}
