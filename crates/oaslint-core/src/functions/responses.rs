//! Error-response description checks
//!
//! Two related but differently-scoped checks: within one operation, each
//! 4xx/5xx status code should carry its own description; across the whole
//! document, one status code should always mean the same thing.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use crate::document::{operations, path_operations, OperationRef};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static ERROR_STATUS: OnceLock<Regex> = OnceLock::new();

fn error_status() -> &'static Regex {
    ERROR_STATUS.get_or_init(|| Regex::new(r"^[45]\d{2}$").unwrap())
}

/// `(status code, description)` pairs of an operation's error responses
fn error_descriptions<'a>(operation: &OperationRef<'a>) -> Vec<(&'a str, &'a str)> {
    let responses = match operation.operation.get("responses").and_then(Value::as_object) {
        Some(responses) => responses,
        None => return Vec::new(),
    };
    responses
        .iter()
        .filter(|(code, _)| error_status().is_match(code))
        .filter_map(|(code, response)| {
            response
                .get("description")
                .and_then(Value::as_str)
                .map(|description| (code.as_str(), description))
        })
        .collect()
}

/// Flag error descriptions reused across status codes of one operation
///
/// The matched value is the document's `paths` mapping. Every operation
/// is checked independently: a description shared by two or more 4xx/5xx
/// codes of the same operation yields one diagnostic naming the
/// description and the offending codes.
pub fn unique_error_descriptions(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    target.as_object()?;

    let mut diagnostics = Vec::new();
    for operation in path_operations(target) {
        let mut by_description: Vec<(&str, Vec<&str>)> = Vec::new();
        for (code, description) in error_descriptions(&operation) {
            match by_description
                .iter_mut()
                .find(|(seen, _)| *seen == description)
            {
                Some((_, codes)) => codes.push(code),
                None => by_description.push((description, vec![code])),
            }
        }
        for (description, codes) in by_description {
            if codes.len() >= 2 {
                diagnostics.push(Diagnostic::at(
                    format!(
                        "error responses {} share the same description '{}'.",
                        codes.join(", "),
                        description
                    ),
                    vec![
                        "paths".into(),
                        operation.path.into(),
                        operation.method.into(),
                    ],
                ));
            }
        }
    }
    Some(diagnostics)
}

/// Flag status codes described inconsistently across the whole document
///
/// The matched value is the full document. Descriptions are grouped per
/// status code over every operation; a code with more than one distinct
/// description yields one diagnostic naming all of them. No location is
/// attached; the finding belongs to the document, not to one operation.
pub fn error_consistency(
    target: &Value,
    _options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    target.as_object()?;

    let mut by_code: Vec<(&str, Vec<&str>)> = Vec::new();
    for operation in operations(target) {
        for (code, description) in error_descriptions(&operation) {
            match by_code.iter_mut().find(|(seen, _)| *seen == code) {
                Some((_, descriptions)) => {
                    if !descriptions.contains(&description) {
                        descriptions.push(description);
                    }
                }
                None => by_code.push((code, vec![description])),
            }
        }
    }

    let mut diagnostics = Vec::new();
    for (code, descriptions) in by_code {
        if descriptions.len() > 1 {
            let quoted: Vec<String> = descriptions
                .iter()
                .map(|description| format!("'{}'", description))
                .collect();
            diagnostics.push(Diagnostic::new(format!(
                "status {} is described inconsistently across the document: {}.",
                code,
                quoted.join(", ")
            )));
        }
    }
    Some(diagnostics)
}
