//! Document-walking utilities shared by the checkers
//!
//! Everything here is a pure function of the document tree: format
//! detection, the `paths` × method iteration used by the document-wide
//! checkers, literal `#/` pointer resolution, and JSON truthiness.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP methods an OpenAPI path item may carry as operations
pub const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// OpenAPI document flavor a rule declaration filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Swagger 2.0
    Oas2,
    /// OpenAPI 3.x
    Oas3,
}

impl Format {
    /// Detect the document flavor from its top-level version marker
    pub fn detect(document: &Value) -> Option<Format> {
        if document.get("swagger").is_some() {
            Some(Format::Oas2)
        } else if document.get("openapi").is_some() {
            Some(Format::Oas3)
        } else {
            None
        }
    }
}

/// One `(path, method, operation)` triple of a `paths` mapping
#[derive(Debug, Clone, Copy)]
pub struct OperationRef<'a> {
    /// Path template key, e.g. `/pets/{petId}`
    pub path: &'a str,
    /// Lowercase HTTP method
    pub method: &'a str,
    /// The operation object
    pub operation: &'a Value,
}

/// Iterate the operations declared under a `paths` mapping
///
/// Restartable and pure: iterating twice over the same value yields the
/// same sequence. Non-object path items and non-operation members
/// (`parameters`, extensions) are skipped.
pub fn path_operations(paths: &Value) -> impl Iterator<Item = OperationRef<'_>> {
    paths
        .as_object()
        .into_iter()
        .flat_map(|mapping| {
            mapping.iter().flat_map(|(path, item)| {
                HTTP_METHODS.iter().filter_map(move |&method| {
                    item.get(method).map(|operation| OperationRef {
                        path: path.as_str(),
                        method,
                        operation,
                    })
                })
            })
        })
}

/// Iterate the operations of a whole document
pub fn operations(document: &Value) -> impl Iterator<Item = OperationRef<'_>> {
    document.get("paths").into_iter().flat_map(path_operations)
}

/// Resolve an internal `#/a/b/c` reference against the document root
///
/// Resolution is a sequential literal object-key lookup: no array
/// indexing and no JSON-Pointer `~0`/`~1` unescaping. Returns `None`
/// when any segment is absent or the reference is not `#/`-prefixed.
pub fn resolve_pointer<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    let relative = pointer.strip_prefix("#/")?;
    let mut node = document;
    for segment in relative.split('/') {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// JSON truthiness as the field-presence checker understands it
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
