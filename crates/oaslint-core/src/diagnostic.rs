//! Diagnostic types shared by every checker
//!
//! A checker reports findings as [`Diagnostic`] records: a human-readable
//! message plus an optional root-relative location. When the path is absent
//! the engine falls back to the location of the matched sub-tree, so
//! checkers only attach one when they can pinpoint a more precise spot.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a root-relative document path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object member key
    Key(String),
    /// Array element index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A single lint finding produced by a checker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable description of the defect
    pub message: String,
    /// Root-relative location, when the checker can name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
}

impl Diagnostic {
    /// Create a diagnostic without an explicit location
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// Create a diagnostic anchored at a root-relative path
    pub fn at<M>(message: M, path: Vec<PathSegment>) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: message.into(),
            path: Some(path),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                let joined = path
                    .iter()
                    .map(|segment| segment.to_string())
                    .collect::<Vec<_>>()
                    .join("/");
                write!(f, "{} (at #/{})", self.message, joined)
            }
            None => write!(f, "{}", self.message),
        }
    }
}

/// Checker verdict consumed by the linter engine
///
/// `None` means the checker did not apply to the given sub-tree; the engine
/// records no findings and no "ran clean" either. `Some(vec![])` means the
/// checker applied and found nothing. The distinction is part of the
/// contract and callers rely on it.
pub type CheckOutcome = Option<Vec<Diagnostic>>;

/// Severity a rule declaration attaches to its checker's findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Finding fails the lint run
    Error,
    /// Finding is reported but does not fail the run
    Warn,
    /// Rule is declared but disabled
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_without_path() {
        let diagnostic = Diagnostic::new("schema is missing in the object");
        assert_eq!(diagnostic.message, "schema is missing in the object");
        assert!(diagnostic.path.is_none());
        assert_eq!(diagnostic.to_string(), "schema is missing in the object");
    }

    #[test]
    fn test_diagnostic_with_path() {
        let diagnostic = Diagnostic::at(
            "multi versions in servers.",
            vec!["servers".into()],
        );
        assert_eq!(diagnostic.to_string(), "multi versions in servers. (at #/servers)");
    }

    #[test]
    fn test_path_segment_conversions() {
        let path: Vec<PathSegment> = vec!["servers".into(), 1usize.into(), "url".into()];
        assert_eq!(
            path,
            vec![
                PathSegment::Key("servers".to_string()),
                PathSegment::Index(1),
                PathSegment::Key("url".to_string()),
            ]
        );
    }

    #[test]
    fn test_diagnostic_serialization_skips_missing_path() {
        let serialized = serde_json::to_value(Diagnostic::new("default not in enum")).unwrap();
        assert_eq!(serialized, serde_json::json!({"message": "default not in enum"}));

        let located = Diagnostic::at("broken reference '#/a'", vec!["paths".into(), 0usize.into()]);
        let serialized = serde_json::to_value(located).unwrap();
        assert_eq!(
            serialized,
            serde_json::json!({"message": "broken reference '#/a'", "path": ["paths", 0]})
        );
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(serde_json::to_value(Severity::Error).unwrap(), "error");
        assert_eq!(serde_json::to_value(Severity::Warn).unwrap(), "warn");
        assert_eq!(serde_json::to_value(Severity::Off).unwrap(), "off");
    }
}
