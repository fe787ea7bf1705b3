//! Rule declarations for the oaslint checker functions
//!
//! A [`Rule`] binds everything the linter engine needs to run one check:
//! a severity, a document-format filter, the path-query selectors that
//! pick the sub-trees, the checker function itself, and its options.
//! This crate only declares the tables; selecting sub-trees and invoking
//! the checkers is the engine's job.
//!
//! # Example
//!
//! ```
//! use oaslint_rulesets::oas_ruleset;
//! use oaslint_core::{EvaluationContext, Format};
//! use serde_json::json;
//!
//! let ruleset = oas_ruleset();
//! let rule = ruleset.rule("schema-completeness").unwrap();
//!
//! let document = json!({});
//! let schema = json!({"type": "object", "properties": {}});
//! let context = EvaluationContext::new(&document);
//! let findings = (rule.function)(&schema, rule.options.as_ref(), &context).unwrap();
//! assert_eq!(findings.len(), 1);
//! assert!(ruleset.for_format(Format::Oas3).any(|r| r.name == rule.name));
//! ```

pub mod oas;

pub use oas::oas_ruleset;

use oaslint_core::{CheckerFn, Format, Severity};
use serde_json::Value;

/// A single rule declaration consumed by the linter engine
#[derive(Debug, Clone)]
pub struct Rule {
    /// Stable rule identifier
    pub name: &'static str,
    /// One-line human description of the defect the rule catches
    pub description: &'static str,
    /// Severity the engine attaches to the rule's findings
    pub severity: Severity,
    /// Document formats the rule applies to
    pub formats: &'static [Format],
    /// Path-query selectors deciding which sub-trees the checker sees
    pub given: &'static [&'static str],
    /// The checker function to invoke per selected sub-tree
    pub function: CheckerFn,
    /// Checker-specific options, passed through verbatim
    pub options: Option<Value>,
}

impl Rule {
    /// Whether the rule applies to documents of the given format
    pub fn applies_to(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }
}

/// A named collection of rule declarations
#[derive(Debug, Clone)]
pub struct Ruleset {
    /// Ruleset identifier
    pub name: &'static str,
    /// The rules, in declaration order
    pub rules: Vec<Rule>,
}

impl Ruleset {
    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Rules that are not switched off
    pub fn enabled(&self) -> impl Iterator<Item = &Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.severity != Severity::Off)
    }

    /// Enabled rules applying to documents of the given format
    pub fn for_format(&self, format: Format) -> impl Iterator<Item = &Rule> + '_ {
        self.enabled().filter(move |rule| rule.applies_to(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lookup_and_format_filter() {
        let ruleset = oas_ruleset();
        let rule = ruleset.rule("only-one-version").unwrap();
        assert!(rule.applies_to(Format::Oas2));
        assert!(rule.applies_to(Format::Oas3));
        assert!(ruleset.rule("no-such-rule").is_none());
    }

    #[test]
    fn test_enabled_excludes_off_rules() {
        let ruleset = oas_ruleset();
        assert!(ruleset.rules.iter().any(|rule| rule.severity == Severity::Off));
        assert!(ruleset.enabled().all(|rule| rule.severity != Severity::Off));
    }
}
