//! # Schema Resolver — In-Document `$ref` Dereferencing
//!
//! Resolves reference schema nodes (`{ "$ref": "#/definitions/Foo" }`)
//! against the document root. The convention defines exactly one level of
//! indirection; chained references are resolved iteratively, stopping the
//! first time a non-reference node is reached.
//!
//! ## Fail-Open Invariant
//!
//! A dangling fragment or a reference cycle returns the reference node
//! itself. That node exposes no `type` and no `properties`, so downstream
//! checks treat it as an opaque schema: no false positives about property
//! contents, no aborted evaluation, no unbounded recursion.

use serde_json::Value;

/// Key marking a node as a reference.
pub const REF_KEY: &str = "$ref";

/// The fragment a reference node points at, if the node is a reference.
pub fn reference_target(node: &Value) -> Option<&str> {
    node.get(REF_KEY)?.as_str()
}

/// Dereference `node` against `root` until a non-reference node is reached.
///
/// Concrete nodes are returned unchanged. Fragments use the in-document
/// form `#/a/b/c` (JSON-Pointer escaping with `~0`/`~1` applies). The
/// document is never mutated.
pub fn resolve<'a>(root: &'a Value, node: &'a Value) -> &'a Value {
    let mut current = node;
    let mut seen: Vec<&str> = Vec::new();
    while let Some(fragment) = reference_target(current) {
        if seen.contains(&fragment) {
            // Reference cycle: fail open.
            return current;
        }
        seen.push(fragment);
        match lookup_fragment(root, fragment) {
            Some(target) => current = target,
            // Dangling reference: fail open.
            None => return current,
        }
    }
    current
}

/// Look up an in-document fragment (`#/a/b/c`) from the root.
fn lookup_fragment<'a>(root: &'a Value, fragment: &str) -> Option<&'a Value> {
    let pointer = fragment.strip_prefix('#')?;
    if pointer.is_empty() {
        return Some(root);
    }
    root.pointer(pointer)
}
