//! # oaslint-rules — Structural Lint Rules for API Descriptions
//!
//! Provides the error-response convention rule and the in-document schema
//! reference resolution it depends on.
//!
//! ## Reference Resolution (`resolve`)
//!
//! The [`resolve`](mod@resolve) module dereferences `$ref` schema nodes against the
//! document root, one indirection at a time, guarded against reference
//! cycles. Resolution fails open: a dangling or cyclic reference behaves as
//! an opaque schema with no known properties, so a broken reference can
//! never abort evaluation or produce a false positive about property
//! contents.
//!
//! ## Error Response Rule (`error_response`)
//!
//! The [`error_response`] module walks every operation's non-success
//! responses and validates the declared payload shape against the error
//! object convention (`x-ms-error-response` marker, object schema, required
//! `error` property carrying required string `code` and `message`
//! properties). Key function:
//!
//! - [`error_response::evaluate`] — returns the ordered diagnostic list for
//!   one document. Evaluation is pure, synchronous, and infallible; the
//!   same document always yields the same sequence.
//!
//! ## Crate Policy
//!
//! - Depends only on `oaslint-core` internally.
//! - Rules never mutate the document and hold no state across documents;
//!   concurrent evaluation of independent documents needs no coordination.
//! - Convention violations are diagnostics, never errors: malformed input
//!   degrades to "skip dependent checks, emit what can be determined".

pub mod error_response;
pub mod resolve;

pub use error_response::evaluate;
pub use resolve::resolve;
