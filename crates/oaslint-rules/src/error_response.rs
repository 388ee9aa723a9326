//! # Error Response Rule — Error Payload Shape Convention
//!
//! Validates the error-response convention over every operation in an
//! OpenAPI/Swagger-style document: non-success responses must carry the
//! `x-ms-error-response` marker, and a declared payload schema must be an
//! object with a required `error` property whose own schema requires string
//! `code` and `message` properties.
//!
//! ## Traversal Invariants
//!
//! - Responses with a success status code (`200`–`299`) are never checked.
//! - `head` operations are excluded entirely: a HEAD response carries no
//!   body, so no schema or marker check applies.
//! - The literal `default` response key is exempt from the marker check
//!   only; its schema, when present, is checked like any other.
//! - Diagnostics are emitted in document declaration order — path order,
//!   then verb order, then response order, then check order. Paths are
//!   built from the exact keys used to traverse the document.
//!
//! ## Check Pipeline
//!
//! Checks within one response form a fixed pipeline with explicit
//! continue/stop outcomes: a check that needs a property cannot run if that
//! property's presence check already failed. Every missing expectation
//! degrades to "skip dependent checks, emit what can be determined" — this
//! rule never errors on malformed input.

use oaslint_core::{Diagnostic, Document, NodePath};
use serde_json::Value;

use crate::resolve::resolve;

/// Operation verbs whose responses are checked. `head` is deliberately
/// absent; non-verb path-item keys (`parameters`, `x-*`) are never
/// descended into.
const CHECKED_VERBS: [&str; 6] = ["get", "put", "post", "patch", "delete", "options"];

/// Boolean extension flag marking a response as an error payload.
const ERROR_RESPONSE_EXTENSION: &str = "x-ms-error-response";

/// Evaluate the error-response rule over one document.
///
/// Returns the ordered diagnostic list. Evaluation is pure and total: it
/// always returns (possibly empty), never panics, and holds no state across
/// calls — the same document yields the same sequence every time.
pub fn evaluate(document: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let root = document.root();

    let Some(paths) = root.get("paths").and_then(Value::as_object) else {
        return diagnostics;
    };

    for (path_key, path_item) in paths {
        let Some(operations) = path_item.as_object() else {
            continue;
        };
        for (verb, operation) in operations {
            if !CHECKED_VERBS.contains(&verb.as_str()) {
                continue;
            }
            let Some(responses) = operation.get("responses").and_then(Value::as_object) else {
                continue;
            };
            for (response_key, response) in responses {
                if is_success_code(response_key) {
                    continue;
                }
                let response_path = NodePath::from_segments([
                    "paths",
                    path_key.as_str(),
                    verb.as_str(),
                    "responses",
                    response_key.as_str(),
                ]);
                check_response(root, response_key, response, &response_path, &mut diagnostics);
            }
        }
    }

    diagnostics
}

/// Apply the check pipeline to one non-success response.
fn check_response(
    root: &Value,
    response_key: &str,
    response: &Value,
    response_path: &NodePath,
    out: &mut Vec<Diagnostic>,
) {
    // Marker check. `default` responses may be generic and are exempt from
    // this check only; it never blocks the schema checks below.
    if response_key != "default" && !is_truthy(response.get(ERROR_RESPONSE_EXTENSION)) {
        out.push(Diagnostic::new(
            response_path.clone(),
            "Error response should contain x-ms-error-response.",
        ));
    }

    // A response with no schema (headers-only, description-only) is
    // checkable but incomplete: nothing further to validate.
    let Some(schema_node) = response.get("schema") else {
        return;
    };
    let schema_path = response_path.child("schema");
    let schema = resolve(root, schema_node);

    // A declared non-object type has no properties to validate.
    if let Some(declared) = schema.get("type").and_then(Value::as_str) {
        if declared != "object" {
            out.push(Diagnostic::new(
                schema_path,
                "Error response schema must be an object schema.",
            ));
            return;
        }
    }

    let properties = schema.get("properties").and_then(Value::as_object);
    let Some(error_node) = properties.and_then(|p| p.get("error")) else {
        let at = if properties.is_some() {
            schema_path.child("properties")
        } else {
            schema_path
        };
        out.push(Diagnostic::new(
            at,
            "Error response schema should contain an object property named `error`.",
        ));
        return;
    };

    if !required_contains(schema, "error") {
        out.push(Diagnostic::new(
            schema_path.clone(),
            "The `error` property in the error response schema should be required.",
        ));
    }

    let error_path = schema_path.child("properties").child("error");
    let error_schema = resolve(root, error_node);
    check_error_schema(root, error_schema, &error_path, out);
}

/// Validate the resolved `error` object schema: `code` and `message` must
/// exist, be strings, and be required.
fn check_error_schema(
    root: &Value,
    error_schema: &Value,
    error_path: &NodePath,
    out: &mut Vec<Diagnostic>,
) {
    const NAMES: [&str; 2] = ["code", "message"];

    let name_required = NAMES.map(|name| required_contains(error_schema, name));
    if name_required.iter().all(|r| !*r) {
        // Neither is required: one combined diagnostic, nothing deeper to
        // report meaningfully.
        out.push(Diagnostic::new(
            error_path.clone(),
            "Error schema should define `code` and `message` properties as required.",
        ));
        return;
    }

    let properties = error_schema.get("properties").and_then(Value::as_object);
    let name_present = NAMES.map(|name| properties.is_some_and(|p| p.contains_key(name)));

    // Presence checks for both names, then type checks, then required
    // checks — the order the convention's diagnostics are defined in.
    for (name, present) in NAMES.iter().zip(name_present) {
        if !present {
            out.push(Diagnostic::new(
                error_path.child("properties"),
                format!("Error schema should contain `{name}` property."),
            ));
        }
    }

    for (name, present) in NAMES.iter().zip(name_present) {
        if !present {
            continue;
        }
        let Some(property) = properties.and_then(|p| p.get(*name)) else {
            continue;
        };
        let property = resolve(root, property);
        match property.get("type") {
            Some(declared) if declared.as_str() == Some("string") => {}
            Some(_) => {
                // Wrong type declared: point at the offending `type` node.
                out.push(Diagnostic::new(
                    error_path.child("properties").child(*name).child("type"),
                    format!("The `{name}` property of error schema should be type `string`."),
                ));
            }
            None => {
                // No type declared at all: point at the property itself.
                out.push(Diagnostic::new(
                    error_path.child("properties").child(*name),
                    format!("The `{name}` property of error schema should be type `string`."),
                ));
            }
        }
    }

    for (name, required) in NAMES.iter().zip(name_required) {
        if !required {
            let at = if error_schema.get("required").is_some() {
                error_path.child("required")
            } else {
                error_path.clone()
            };
            out.push(Diagnostic::new(
                at,
                format!("Error schema should define `{name}` property as required."),
            ));
        }
    }
}

/// True for response keys in the success range (`200`–`299`).
fn is_success_code(response_key: &str) -> bool {
    response_key
        .parse::<u16>()
        .is_ok_and(|code| (200..=299).contains(&code))
}

/// True when a schema's own `required` sequence lists `name`.
fn required_contains(schema: &Value, name: &str) -> bool {
    schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|required| required.iter().any(|entry| entry.as_str() == Some(name)))
}

/// Truthiness of the marker flag: absent, `null`, `false`, `0`, and `""`
/// are falsy; anything else satisfies the marker check.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
