//! Checker functions invoked by the linter engine
//!
//! Every checker is a pure function of `(target, options, context)`. The
//! engine selects a sub-tree with a rule's path query, hands it over
//! together with the rule's options and the evaluation context, and
//! collects the outcome. Checkers never panic and never return an error
//! for well-formed inputs: document defects and option misconfigurations
//! alike come back as diagnostics.
//!
//! The checkers are organized into focused modules:
//! - `field`: required-member presence and dotted-path coverage
//! - `schema`: object-schema completeness, enum defaults, required names
//! - `pattern`: status-code family key matching
//! - `examples`: recursive example sufficiency
//! - `versioning`: version token grammar and cross-document consistency
//! - `references`: `$ref` sibling reference integrity
//! - `responses`: error-response description uniqueness and consistency
//! - `consistency`: document-wide identifier casing votes
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

pub mod consistency;
pub mod examples;
pub mod field;
pub mod pattern;
pub mod references;
pub mod responses;
pub mod schema;
pub mod versioning;

pub use consistency::{operation_id_consistency, tag_consistency};
pub use examples::ensure_examples;
pub use field::{ensure_field, include_all};
pub use pattern::key_match_any_pattern;
pub use references::ref_siblings;
pub use responses::{error_consistency, unique_error_descriptions};
pub use schema::{completed_schema, default_in_enum, required_properties};
pub use versioning::{get_version, multi_version};

use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic};
use crate::error::Error;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Uniform signature shared by every checker, so rule declarations can
/// carry them as plain function pointers
pub type CheckerFn = fn(&Value, Option<&Value>, &EvaluationContext<'_>) -> CheckOutcome;

/// Deserialize mandatory rule options into a checker's typed options
pub(crate) fn parse_options<T>(function: &str, options: Option<&Value>) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let raw = options.ok_or_else(|| Error::InvalidOptions {
        function: function.to_string(),
        message: "options are required".to_string(),
    })?;
    serde_json::from_value(raw.clone()).map_err(|source| Error::InvalidOptions {
        function: function.to_string(),
        message: source.to_string(),
    })
}

/// Deserialize optional rule options, falling back to the default shape
pub(crate) fn parse_optional_options<T>(function: &str, options: Option<&Value>) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    match options {
        None => Ok(T::default()),
        Some(_) => parse_options(function, options),
    }
}

/// Surface a misconfiguration as a finding instead of an error, keeping
/// the engine's reporting pipeline uniform
pub(crate) fn misconfigured(error: Error) -> CheckOutcome {
    Some(vec![Diagnostic::new(error.to_string())])
}
