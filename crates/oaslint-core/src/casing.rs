//! Identifier casing classification and consistency analysis
//!
//! Classifies identifier strings into lexical casing conventions and
//! reports when a collection mixes more than one. Trivially ambiguous
//! classifications (`lowercase`, `unknown`) are compatible with every
//! style and sit out the consistency vote.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Abbreviations removed as whole words before classification, so that
/// `API-version` style identifiers do not vote with a spurious style.
pub const COMMON_ABBREVIATIONS: &[&str] = &[
    "HTTPS", "HTTP", "JSON", "UUID", "HTML", "API", "URL", "URI", "XML", "SQL", "CSV", "JWT",
    "TCP", "UDP", "ID", "IP",
];

static LOWERCASE: OnceLock<Regex> = OnceLock::new();
static KEBAB: OnceLock<Regex> = OnceLock::new();
static SNAKE: OnceLock<Regex> = OnceLock::new();
static PASCAL: OnceLock<Regex> = OnceLock::new();
static CAMEL: OnceLock<Regex> = OnceLock::new();
static ABBREVIATIONS: OnceLock<Regex> = OnceLock::new();

fn lowercase_pattern() -> &'static Regex {
    LOWERCASE.get_or_init(|| Regex::new(r"^[a-z0-9]+$").unwrap())
}

fn kebab_pattern() -> &'static Regex {
    KEBAB.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)+$").unwrap())
}

fn snake_pattern() -> &'static Regex {
    SNAKE.get_or_init(|| Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)+$").unwrap())
}

fn pascal_pattern() -> &'static Regex {
    PASCAL.get_or_init(|| Regex::new(r"^[A-Z][a-z0-9]*$|^([A-Z][a-z0-9]+)+$").unwrap())
}

fn camel_pattern() -> &'static Regex {
    CAMEL.get_or_init(|| Regex::new(r"^[a-z][a-z0-9]*([A-Z][a-z0-9]*)+$").unwrap())
}

fn abbreviation_pattern() -> &'static Regex {
    ABBREVIATIONS.get_or_init(|| {
        let alternatives = COMMON_ABBREVIATIONS.join("|");
        Regex::new(&format!(r"\b({})\b", alternatives)).unwrap()
    })
}

/// Lexical casing convention of a single identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingConvention {
    /// All lowercase, no separator; compatible with every style
    Lowercase,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `kebab-case`
    Kebab,
    /// `snake_case`
    Snake,
    /// Anything the other rules do not match
    Unknown,
}

impl CasingConvention {
    /// Short human-readable name used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            CasingConvention::Lowercase => "lowercase",
            CasingConvention::Camel => "camel",
            CasingConvention::Pascal => "Pascal",
            CasingConvention::Kebab => "kebab",
            CasingConvention::Snake => "snake",
            CasingConvention::Unknown => "unknown",
        }
    }

    /// Whether the convention takes part in the consistency vote
    pub fn is_relevant(&self) -> bool {
        !matches!(self, CasingConvention::Lowercase | CasingConvention::Unknown)
    }
}

/// Classify one identifier; deterministic and total, `Unknown` as catch-all
pub fn classify(identifier: &str) -> CasingConvention {
    if lowercase_pattern().is_match(identifier) {
        CasingConvention::Lowercase
    } else if kebab_pattern().is_match(identifier) {
        CasingConvention::Kebab
    } else if snake_pattern().is_match(identifier) {
        CasingConvention::Snake
    } else if pascal_pattern().is_match(identifier) {
        CasingConvention::Pascal
    } else if camel_pattern().is_match(identifier) {
        CasingConvention::Camel
    } else {
        CasingConvention::Unknown
    }
}

/// Outcome of a casing consistency vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CasingReport {
    /// False when more than one relevant convention is present
    pub is_consistent: bool,
    /// Relevant conventions in the order first seen
    pub conventions: Vec<CasingConvention>,
}

impl CasingReport {
    /// Diagnostic-ready list of the convention names, comma-joined
    pub fn convention_labels(&self) -> String {
        self.conventions
            .iter()
            .map(|convention| convention.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Vote on the casing consistency of a collection of identifiers
///
/// Common abbreviations are stripped as whole words first; identifiers
/// that become empty are dropped from the vote entirely.
pub fn check_consistency<S>(identifiers: &[S]) -> CasingReport
where
    S: AsRef<str>,
{
    let mut conventions: Vec<CasingConvention> = Vec::new();
    for identifier in identifiers {
        let stripped = abbreviation_pattern().replace_all(identifier.as_ref(), "");
        if stripped.is_empty() {
            continue;
        }
        let convention = classify(&stripped);
        if convention.is_relevant() && !conventions.contains(&convention) {
            conventions.push(convention);
        }
    }
    CasingReport {
        is_consistent: conventions.len() <= 1,
        conventions,
    }
}
