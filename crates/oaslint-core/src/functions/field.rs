//! Field presence checkers
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use super::{misconfigured, parse_options};
use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use crate::document::is_truthy;
use serde::Deserialize;
use serde_json::Value;

/// Options for [`ensure_field`]
#[derive(Debug, Deserialize)]
pub struct FieldOptions {
    /// Member that must be present and truthy on the matched object
    pub field: String,
}

/// Options for [`include_all`]
#[derive(Debug, Default, Deserialize)]
pub struct IncludeAllOptions {
    /// Dotted paths that must all resolve inside the matched value
    #[serde(default)]
    pub values: Vec<String>,
}

/// Flag the matched object when a configured member is absent or falsy
///
/// Not applicable to non-objects: selecting the right shape is the query
/// layer's responsibility, so anything else is a no-op rather than a
/// finding.
pub fn ensure_field(
    target: &Value,
    options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let object = target.as_object()?;
    let parsed: FieldOptions = match parse_options("ensure-field", options) {
        Ok(parsed) => parsed,
        Err(error) => return misconfigured(error),
    };

    let mut diagnostics = Vec::new();
    if !object.get(&parsed.field).map_or(false, is_truthy) {
        diagnostics.push(Diagnostic::new(format!(
            "{} is missing in the object",
            parsed.field
        )));
    }
    Some(diagnostics)
}

/// Flag the matched value when any configured dotted path is missing
///
/// All missing paths are reported in a single diagnostic, comma-joined.
/// An empty `values` option is a rule misconfiguration, not a document
/// defect, and is reported distinctly.
pub fn include_all(
    target: &Value,
    options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let parsed: IncludeAllOptions = match parse_options("include-all", options) {
        Ok(parsed) => parsed,
        Err(error) => return misconfigured(error),
    };
    if parsed.values.is_empty() {
        return Some(vec![Diagnostic::new(
            "values option is required to be a non-empty array",
        )]);
    }

    let missing: Vec<&str> = parsed
        .values
        .iter()
        .filter(|dotted| lookup_dotted(target, dotted).is_none())
        .map(String::as_str)
        .collect();

    let mut diagnostics = Vec::new();
    if !missing.is_empty() {
        diagnostics.push(Diagnostic::new(format!(
            "object is missing required members: {}",
            missing.join(", ")
        )));
    }
    Some(diagnostics)
}

/// Walk a dotted path segment by segment through nested objects
fn lookup_dotted<'a>(node: &'a Value, dotted: &str) -> Option<&'a Value> {
    let mut current = node;
    for segment in dotted.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
