//! # oaslint-core — Foundational Types for oaslint
//!
//! This crate is the bedrock of the oaslint workspace. It defines the
//! primitives every rule crate consumes: the navigable document tree, the
//! node-path type used to address nodes, and the path-addressed diagnostic
//! record rules emit. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Paths are diagnostic identity.** A [`NodePath`] is built from the
//!    exact key sequence used to traverse the document — status-code keys
//!    stay literal strings, keys are never sorted or normalized. Consumers
//!    assert on paths verbatim.
//!
//! 2. **The tree is untyped.** A [`Document`] wraps a `serde_json::Value`
//!    with insertion-ordered maps. Rules access it structurally and must
//!    survive any malformed shape; there is no typed deserialization layer
//!    that could reject a document before a rule sees it.
//!
//! 3. **Violations are data, not errors.** A [`Diagnostic`] is an ordinary
//!    value; rule evaluation is infallible. [`DocumentError`] exists only
//!    for getting raw text into the tree, before evaluation starts.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `oaslint-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod diagnostic;
pub mod document;
pub mod error;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use diagnostic::Diagnostic;
pub use document::Document;
pub use error::DocumentError;
pub use path::NodePath;
