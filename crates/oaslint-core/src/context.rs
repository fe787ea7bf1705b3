//! Evaluation context threaded into every checker invocation
//!
//! The linter engine owns the parsed document and the path of the sub-tree
//! it matched for a rule. Both travel into checkers through
//! [`EvaluationContext`] as an explicit parameter; nothing is held in
//! module-level or shared mutable state.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::diagnostic::PathSegment;
use serde_json::Value;

/// Read-only state supplied by the engine alongside the matched sub-tree
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// The full parsed document
    pub document: &'a Value,
    /// Root-relative path of the matched sub-tree
    pub path: &'a [PathSegment],
}

impl<'a> EvaluationContext<'a> {
    /// Context for a checker invoked at the document root
    pub fn new(document: &'a Value) -> Self {
        Self {
            document,
            path: &[],
        }
    }

    /// Context for a checker invoked on a nested sub-tree
    pub fn at(document: &'a Value, path: &'a [PathSegment]) -> Self {
        Self { document, path }
    }

    /// Root-relative path of a child of the matched sub-tree
    pub fn child_path<S>(&self, segment: S) -> Vec<PathSegment>
    where
        S: Into<PathSegment>,
    {
        let mut path = self.path.to_vec();
        path.push(segment.into());
        path
    }
}
