//! Reference integrity for `$ref` siblings
//!
//! Strict resolvers ignore the sibling properties of a `$ref`, so the
//! sub-trees under those siblings are never schema-resolved, which is
//! exactly where broken references hide. This checker walks sibling
//! values literally and verifies every internal reference it finds still
//! points at an existing location in the document. References are never
//! dereferenced into sub-documents, only looked up, so cyclic `$ref`
//! structures cannot cause unbounded recursion here.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use crate::document::resolve_pointer;
use serde_json::Value;
use tracing::debug;

/// Flag broken internal references nested under a `$ref`'s siblings
///
/// Applicable only to objects carrying a `$ref` key next to at least one
/// sibling key. External references (anything not starting with `#/`)
/// are silently ignored: never validated, never flagged.
pub fn ref_siblings(
    target: &Value,
    _options: Option<&Value>,
    context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let object = target.as_object()?;
    if !object.contains_key("$ref") || object.len() < 2 {
        return None;
    }

    let mut diagnostics = Vec::new();
    for (key, sibling) in object {
        if key == "$ref" {
            continue;
        }
        collect_broken_references(sibling, context.document, &mut diagnostics);
    }
    Some(diagnostics)
}

/// Walk objects and arrays for keys literally named `$ref`
fn collect_broken_references(node: &Value, document: &Value, diagnostics: &mut Vec<Diagnostic>) {
    match node {
        Value::Object(members) => {
            for (key, value) in members {
                if key == "$ref" {
                    if let Some(reference) = value.as_str() {
                        check_reference(reference, document, diagnostics);
                    }
                }
                collect_broken_references(value, document, diagnostics);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_broken_references(item, document, diagnostics);
            }
        }
        _ => {}
    }
}

fn check_reference(reference: &str, document: &Value, diagnostics: &mut Vec<Diagnostic>) {
    if !reference.starts_with("#/") {
        debug!("skipping external reference {}", reference);
        return;
    }
    if resolve_pointer(document, reference).is_none() {
        diagnostics.push(Diagnostic::new(format!(
            "broken reference '{}'",
            reference
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "components": {
                "schemas": {
                    "Pet": {"type": "object", "properties": {"name": {"type": "string"}}},
                    "Error": {"type": "object"}
                }
            }
        })
    }

    fn run(target: &Value, document: &Value) -> CheckOutcome {
        ref_siblings(target, None, &EvaluationContext::new(document))
    }

    #[test]
    fn test_broken_sibling_reference_is_reported() {
        let document = document();
        let target = json!({
            "$ref": "#/components/schemas/Pet",
            "sib": {"$ref": "#/components/schemas/Missing"}
        });
        let outcome = run(&target, &document).unwrap();
        assert_eq!(outcome.len(), 1);
        assert_eq!(
            outcome[0].message,
            "broken reference '#/components/schemas/Missing'"
        );
    }

    #[test]
    fn test_resolvable_sibling_reference_is_clean() {
        let document = document();
        let target = json!({
            "$ref": "#/components/schemas/Pet",
            "sib": {"$ref": "#/components/schemas/Error"}
        });
        assert_eq!(run(&target, &document), Some(Vec::new()));
    }

    #[test]
    fn test_external_references_are_ignored() {
        let document = document();
        let target = json!({
            "$ref": "#/components/schemas/Pet",
            "sib": {"$ref": "http://external.example.com/schema.json"}
        });
        assert_eq!(run(&target, &document), Some(Vec::new()));
    }

    #[test]
    fn test_references_are_found_at_any_sibling_depth() {
        let document = document();
        let target = json!({
            "$ref": "#/components/schemas/Pet",
            "allOf": [
                {"properties": {"nested": {"$ref": "#/components/schemas/Gone"}}},
                {"items": [{"$ref": "#/components/schemas/AlsoGone"}]}
            ]
        });
        let outcome = run(&target, &document).unwrap();
        assert_eq!(outcome.len(), 2);
        assert!(outcome[0].message.contains("Gone"));
        assert!(outcome[1].message.contains("AlsoGone"));
    }

    #[test]
    fn test_not_applicable_without_siblings() {
        let document = document();
        assert!(run(&json!({"$ref": "#/components/schemas/Pet"}), &document).is_none());
        assert!(run(&json!({"sib": {}}), &document).is_none());
        assert!(run(&json!("#/components/schemas/Pet"), &document).is_none());
    }

    #[test]
    fn test_own_ref_is_not_validated_here() {
        // the node's own $ref is the resolver's job; only siblings are walked
        let document = document();
        let target = json!({
            "$ref": "#/components/schemas/DoesNotExist",
            "description": "dangling but out of scope"
        });
        assert_eq!(run(&target, &document), Some(Vec::new()));
    }

    #[test]
    fn test_non_string_ref_values_are_skipped() {
        let document = document();
        let target = json!({
            "$ref": "#/components/schemas/Pet",
            "sib": {"$ref": {"unexpected": "shape"}}
        });
        assert_eq!(run(&target, &document), Some(Vec::new()));
    }
}
