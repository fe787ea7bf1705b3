//! Example sufficiency checker
//!
//! Examples are required depth-first: an object schema cannot borrow
//! sufficiency from a sibling's example, it must carry its own or be
//! fully covered by its descendants.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use serde_json::{Map, Value};

/// Flag a schema wrapper (response, parameter) with no example coverage
///
/// Not applicable unless the matched value is an object carrying a
/// `schema` member. The wrapper passes outright when it carries
/// `examples`, `example`, or `schema.example`; otherwise sufficiency is
/// decided recursively over the schema tree.
pub fn ensure_examples(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let wrapper = target.as_object()?;
    let schema = wrapper.get("schema")?;

    let covered = has_own_example(wrapper)
        || schema.get("example").is_some()
        || has_example(Some(schema));

    let mut diagnostics = Vec::new();
    if !covered {
        diagnostics.push(Diagnostic::new(
            "example or examples is missing in the object",
        ));
    }
    Some(diagnostics)
}

fn has_own_example(node: &Map<String, Value>) -> bool {
    node.contains_key("examples") || node.contains_key("example")
}

/// Recursive sufficiency over a schema tree
///
/// A missing or non-object schema is vacuously sufficient. Array schemas
/// delegate to `items`; object (or typeless) schemas require every
/// declared property to be sufficient on its own; any other primitive
/// type without its own example is insufficient.
fn has_example(schema: Option<&Value>) -> bool {
    let schema = match schema.and_then(Value::as_object) {
        Some(schema) => schema,
        None => return true,
    };
    if has_own_example(schema) {
        return true;
    }
    match schema.get("type").and_then(Value::as_str) {
        Some("array") => has_example(schema.get("items")),
        Some("object") | None => match schema.get("properties").and_then(Value::as_object) {
            Some(properties) => properties.values().map(Some).all(has_example),
            None => true,
        },
        Some(_) => false,
    }
}
