//! Schema shape checkers
//!
//! These checkers look at object schemas the way an unresolved document
//! presents them: `type` may be absent (implicitly an object schema) and
//! composition keywords stand in for declared properties.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use serde_json::{Map, Value};

const COMPOSITION_KEYWORDS: &[&str] = &["anyOf", "allOf", "oneOf", "not"];

/// Whether a schema node is object-typed, explicitly or by omission
fn is_object_schema(schema: &Map<String, Value>) -> bool {
    match schema.get("type") {
        None => true,
        Some(Value::String(name)) => name == "object",
        Some(_) => false,
    }
}

/// Flag object schemas that declare neither properties nor a composition
///
/// A schema with `type: "object"` (or no `type` at all) must carry a
/// non-empty `properties` map or one of `anyOf`/`allOf`/`oneOf`/`not`.
/// Schemas of any other type are out of scope for this checker.
pub fn completed_schema(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let schema = target.as_object()?;
    if !is_object_schema(schema) {
        return None;
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        if !properties.is_empty() {
            return Some(Vec::new());
        }
    }
    if COMPOSITION_KEYWORDS
        .iter()
        .any(|keyword| schema.contains_key(*keyword))
    {
        return Some(Vec::new());
    }

    Some(vec![Diagnostic::new("properties missing for object schema")])
}

/// Flag immediate children whose scalar `default` is not in their `enum`
///
/// Applicable to any object; an applicable-but-clean value returns an
/// empty finding list, never "not applicable"; callers distinguish the
/// two.
pub fn default_in_enum(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let object = target.as_object()?;

    let mut diagnostics = Vec::new();
    for child in object.values() {
        let child = match child.as_object() {
            Some(child) => child,
            None => continue,
        };
        let allowed = match child.get("enum").and_then(Value::as_array) {
            Some(allowed) => allowed,
            None => continue,
        };
        let default = match child.get("default") {
            Some(default) => default,
            None => continue,
        };
        if default.is_array() || default.is_object() {
            continue;
        }
        if !allowed.contains(default) {
            diagnostics.push(Diagnostic::new("default not in enum"));
        }
    }
    Some(diagnostics)
}

/// Flag `required` names that have no entry under `properties`
///
/// Applies only to object schemas carrying a non-empty `required` list
/// and a `properties` object. Duplicate names in `required` each produce
/// their own diagnostic; the list is reported exactly as written.
pub fn required_properties(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let schema = target.as_object()?;
    if !is_object_schema(schema) {
        return None;
    }
    let required = match schema.get("required").and_then(Value::as_array) {
        Some(required) if !required.is_empty() => required,
        _ => return None,
    };
    let properties = match schema.get("properties").and_then(Value::as_object) {
        Some(properties) => properties,
        None => return None,
    };

    let mut diagnostics = Vec::new();
    for name in required.iter().filter_map(Value::as_str) {
        if !properties.contains_key(name) {
            diagnostics.push(Diagnostic::new(format!("'{}' is not defined", name)));
        }
    }
    Some(diagnostics)
}
