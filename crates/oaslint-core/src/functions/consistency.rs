//! Document-wide identifier casing checks
//!
//! Thin wrappers around the casing analyzer: collect the identifiers,
//! let the vote decide, and report the conventions in the order they
//! were first seen.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::casing::check_consistency;
use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use crate::document::operations;
use serde_json::Value;

/// Flag documents whose `operationId`s mix casing conventions
pub fn operation_id_consistency(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    target.as_object()?;
    let identifiers: Vec<&str> = operations(target)
        .filter_map(|operation| {
            operation
                .operation
                .get("operationId")
                .and_then(Value::as_str)
        })
        .collect();
    Some(casing_findings(&identifiers, "operationIds"))
}

/// Flag documents whose tag names mix casing conventions
///
/// Tags are collected from the root `tags[*].name` declarations and from
/// every operation's `tags` list.
pub fn tag_consistency(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    target.as_object()?;

    let mut names: Vec<&str> = Vec::new();
    if let Some(tags) = target.get("tags").and_then(Value::as_array) {
        names.extend(
            tags.iter()
                .filter_map(|tag| tag.get("name").and_then(Value::as_str)),
        );
    }
    for operation in operations(target) {
        if let Some(tags) = operation.operation.get("tags").and_then(Value::as_array) {
            names.extend(tags.iter().filter_map(Value::as_str));
        }
    }
    Some(casing_findings(&names, "tags"))
}

fn casing_findings(identifiers: &[&str], subject: &str) -> Vec<Diagnostic> {
    let report = check_consistency(identifiers);
    if report.is_consistent {
        return Vec::new();
    }
    vec![Diagnostic::new(format!(
        "{} use multiple casing conventions: {}",
        subject,
        report.convention_labels()
    ))]
}
