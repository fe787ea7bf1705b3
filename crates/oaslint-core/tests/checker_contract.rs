//! Contract tests for the checker functions
//!
//! These tests pin down the behavior the linter engine relies on: the
//! three-way outcome (not applicable / clean / findings), diagnostics
//! staying inside the document's address space, and checkers never
//! panicking on malformed options.

use oaslint_core::{functions, CheckerFn, EvaluationContext, PathSegment};
use serde_json::{json, Value};

fn checkers_with_options() -> Vec<(&'static str, CheckerFn, Option<Value>)> {
    vec![
        ("ensure-field", functions::ensure_field as CheckerFn, Some(json!({"field": "schema"}))),
        ("include-all", functions::include_all, Some(json!({"values": ["info.version"]}))),
        ("completed-schema", functions::completed_schema, None),
        ("default-in-enum", functions::default_in_enum, None),
        ("required-properties", functions::required_properties, None),
        (
            "key-match-any-pattern",
            functions::key_match_any_pattern,
            Some(json!({"patterns": ["/^4\\d{2}$/"]})),
        ),
        ("ensure-examples", functions::ensure_examples, None),
        ("multi-version", functions::multi_version, None),
        ("ref-siblings", functions::ref_siblings, None),
        ("unique-error-descriptions", functions::unique_error_descriptions, None),
        ("error-consistency", functions::error_consistency, None),
        ("operation-id-consistency", functions::operation_id_consistency, None),
        ("tag-consistency", functions::tag_consistency, None),
    ]
}

#[test]
fn every_checker_is_idempotent() {
    let document = json!({
        "openapi": "3.0.3",
        "servers": [{"url": "https://api.example.com/v1"}],
        "paths": {
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "responses": {
                        "400": {"description": "oops"},
                        "500": {"description": "oops"}
                    }
                }
            }
        }
    });
    let context = EvaluationContext::new(&document);

    for (name, checker, options) in checkers_with_options() {
        let first = checker(&document, options.as_ref(), &context);
        let second = checker(&document, options.as_ref(), &context);
        assert_eq!(first, second, "{} is not idempotent", name);
    }
}

#[test]
fn malformed_options_become_findings_not_panics() {
    let target = json!({"a": 1});
    let document = json!({});
    let context = EvaluationContext::new(&document);

    let hostile_options = [
        json!(null),
        json!(42),
        json!({"field": {"not": "a string"}}),
        json!({"values": "not an array"}),
        json!({"patterns": [{"not": "a string"}]}),
        json!({"check": "no-such-mode"}),
    ];

    for (_, checker, _) in checkers_with_options() {
        for options in &hostile_options {
            // must not panic; misconfigurations surface as diagnostics
            let _ = checker(&target, Some(options), &context);
        }
        let _ = checker(&target, None, &context);
    }
}

#[test]
fn emitted_paths_stay_inside_the_document() {
    let document = json!({
        "servers": [
            {"url": "https://api.example.com/v1"},
            {"url": "https://api.example.com/v2"}
        ],
        "paths": {
            "/v3/pets": {
                "get": {
                    "responses": {
                        "400": {"description": "same"},
                        "404": {"description": "same"}
                    }
                }
            }
        }
    });
    let context = EvaluationContext::new(&document);

    let mut findings = functions::multi_version(&document, None, &context).unwrap();
    findings.extend(
        functions::unique_error_descriptions(document.get("paths").unwrap(), None, &context)
            .unwrap(),
    );
    assert!(!findings.is_empty());

    for finding in findings {
        let path = match finding.path {
            Some(path) => path,
            None => continue,
        };
        let mut node = &document;
        for segment in &path {
            node = match segment {
                PathSegment::Key(key) => node.get(key.as_str()).unwrap_or_else(|| {
                    panic!("path segment '{}' not in document for '{}'", key, finding.message)
                }),
                PathSegment::Index(index) => node.get(index).unwrap_or_else(|| {
                    panic!("index {} not in document for '{}'", index, finding.message)
                }),
            };
        }
    }
}

#[test]
fn applicable_and_clean_is_distinguishable_from_not_applicable() {
    let document = json!({});
    let context = EvaluationContext::new(&document);

    // applicable, clean
    let clean = functions::default_in_enum(
        &json!({"status": {"enum": ["a"], "default": "a"}}),
        None,
        &context,
    );
    assert_eq!(clean, Some(Vec::new()));

    // not applicable
    let skipped = functions::default_in_enum(&json!(12), None, &context);
    assert!(skipped.is_none());
}

#[test]
fn checker_table_runs_against_nested_context_paths() {
    let document = json!({
        "paths": {
            "/pets": {
                "get": {
                    "responses": {
                        "200": {"description": "ok"}
                    }
                }
            }
        }
    });
    let matched_path: Vec<PathSegment> = vec![
        "paths".into(),
        "/pets".into(),
        "get".into(),
        "responses".into(),
        "200".into(),
    ];
    let context = EvaluationContext::at(&document, &matched_path);
    let target = &document["paths"]["/pets"]["get"]["responses"]["200"];

    let options = json!({"field": "schema"});
    let outcome = functions::ensure_field(target, Some(&options), &context).unwrap();
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome[0].message, "schema is missing in the object");
    // no explicit path: the engine falls back to the matched sub-tree
    assert!(outcome[0].path.is_none());
}
