//! Oaslint Core - evaluation engine for rule-based OpenAPI linting
//!
//! This crate provides the checker functions a linter engine invokes over
//! OAS2/OAS3 documents, together with the diagnostic types they produce.
//!
//! # Main Components
//!
//! - **Diagnostics**: structured findings with optional root-relative paths
//! - **Checker Functions**: pure `(target, options, context)` evaluators
//! - **Casing Analyzer**: identifier convention classification and voting
//! - **Version Resolver**: tolerant version grammar and cross-document checks
//! - **Reference Resolver**: `$ref` sibling integrity validation
//!
//! # Example
//!
//! ```
//! use oaslint_core::{functions, EvaluationContext};
//! use serde_json::json;
//!
//! let document = json!({"paths": {"/v1/pets": {}, "/v2/pets": {}}});
//! let context = EvaluationContext::new(&document);
//! let findings = functions::multi_version(&document, None, &context).unwrap();
//! assert_eq!(findings.len(), 1);
//! ```

pub mod casing;
pub mod context;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod functions;

// Re-export main types for convenience
pub use casing::{check_consistency, classify, CasingConvention, CasingReport};
pub use context::EvaluationContext;
pub use diagnostic::{CheckOutcome, Diagnostic, PathSegment, Severity};
pub use document::{
    operations, path_operations, resolve_pointer, Format, OperationRef, HTTP_METHODS,
};
pub use error::{Error, Result};
pub use functions::CheckerFn;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
