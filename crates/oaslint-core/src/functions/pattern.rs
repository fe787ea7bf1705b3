//! Key pattern matcher for status-code family checks
//!
//! Rule options carry regex literals either bare (`^4\d{2}$`) or in
//! `/body/flags` form. The checker passes as soon as any key of the
//! matched object satisfies any pattern.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use super::{misconfigured, parse_options};
use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde_json::Value;

/// Options for [`key_match_any_pattern`]
#[derive(Debug, Default, Deserialize)]
pub struct PatternOptions {
    /// Regex literals, at least one of which must match some key
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Compile a rule-supplied regex literal, honoring `/body/flags` syntax
///
/// Flags `i`, `m`, `s` and `x` map onto the corresponding regex builder
/// switches; flags with no meaning for a plain match test (`g`, `u`, `y`)
/// are ignored. A bare literal compiles as-is with no flags.
pub fn compile_pattern(literal: &str) -> Result<Regex> {
    let (body, flags) = split_literal(literal);
    let mut builder = RegexBuilder::new(body);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            _ => {}
        }
    }
    builder.build().map_err(|source| Error::InvalidPattern {
        pattern: literal.to_string(),
        message: source.to_string(),
    })
}

/// Split `/body/flags` into its parts; anything else is a bare pattern
fn split_literal(literal: &str) -> (&str, &str) {
    if let Some(rest) = literal.strip_prefix('/') {
        if let Some(closing) = rest.rfind('/') {
            return (&rest[..closing], &rest[closing + 1..]);
        }
    }
    (literal, "")
}

/// Flag the matched object when no key matches any configured pattern
///
/// An empty `patterns` option is a rule misconfiguration and is reported
/// distinctly; so is a literal that fails to compile. Non-objects are
/// out of scope.
pub fn key_match_any_pattern(
    target: &Value,
    options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let object = target.as_object()?;
    let parsed: PatternOptions = match parse_options("key-match-any-pattern", options) {
        Ok(parsed) => parsed,
        Err(error) => return misconfigured(error),
    };
    if parsed.patterns.is_empty() {
        return Some(vec![Diagnostic::new(
            "patterns option is required to be a non-empty array",
        )]);
    }

    let mut compiled = Vec::with_capacity(parsed.patterns.len());
    for literal in &parsed.patterns {
        match compile_pattern(literal) {
            Ok(pattern) => compiled.push(pattern),
            Err(error) => return misconfigured(error),
        }
    }

    let matched = object
        .keys()
        .any(|key| compiled.iter().any(|pattern| pattern.is_match(key)));

    let mut diagnostics = Vec::new();
    if !matched {
        diagnostics.push(Diagnostic::new(format!(
            "no key matches any of the patterns: {}",
            parsed.patterns.join(", ")
        )));
    }
    Some(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(target: &Value, options: &Value) -> CheckOutcome {
        let document = json!({});
        key_match_any_pattern(target, Some(options), &EvaluationContext::new(&document))
    }

    #[test]
    fn test_passes_when_any_key_matches_any_pattern() {
        let responses = json!({"200": {}, "400": {}, "500": {}});
        let options = json!({"patterns": ["/^4\\d{2}$/", "/^5\\d{2}$/"]});
        assert_eq!(run(&responses, &options), Some(Vec::new()));
    }

    #[test]
    fn test_fails_naming_all_patterns() {
        let responses = json!({"200": {}, "300": {}});
        let options = json!({"patterns": ["/^4\\d{2}$/", "/^5\\d{2}$/"]});
        let outcome = run(&responses, &options).unwrap();
        assert_eq!(outcome.len(), 1);
        assert_eq!(
            outcome[0].message,
            "no key matches any of the patterns: /^4\\d{2}$/, /^5\\d{2}$/"
        );
    }

    #[test]
    fn test_bare_literal_compiles_without_flags() {
        let responses = json!({"404": {}});
        let options = json!({"patterns": ["^4\\d{2}$"]});
        assert_eq!(run(&responses, &options), Some(Vec::new()));
    }

    #[test]
    fn test_flags_are_honored() {
        let keys = json!({"DEFAULT": {}});
        let options = json!({"patterns": ["/^default$/i"]});
        assert_eq!(run(&keys, &options), Some(Vec::new()));
    }

    #[test]
    fn test_empty_patterns_is_a_misconfiguration() {
        let outcome = run(&json!({"200": {}}), &json!({"patterns": []})).unwrap();
        assert_eq!(outcome.len(), 1);
        assert_eq!(
            outcome[0].message,
            "patterns option is required to be a non-empty array"
        );
    }

    #[test]
    fn test_unparseable_pattern_is_a_misconfiguration_not_a_panic() {
        let outcome = run(&json!({"200": {}}), &json!({"patterns": ["/[/"]})).unwrap();
        assert_eq!(outcome.len(), 1);
        assert!(outcome[0].message.contains("invalid pattern"));
    }

    #[test]
    fn test_non_object_target_is_not_applicable() {
        let document = json!({});
        let options = json!({"patterns": ["^2\\d{2}$"]});
        let outcome = key_match_any_pattern(
            &json!(["200"]),
            Some(&options),
            &EvaluationContext::new(&document),
        );
        assert!(outcome.is_none());
    }

    #[test]
    fn test_split_literal() {
        assert_eq!(split_literal("/^4\\d{2}$/"), ("^4\\d{2}$", ""));
        assert_eq!(split_literal("/abc/im"), ("abc", "im"));
        assert_eq!(split_literal("^4\\d{2}$"), ("^4\\d{2}$", ""));
        assert_eq!(split_literal("/unterminated"), ("/unterminated", ""));
    }
}
