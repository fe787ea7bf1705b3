//! The OAS2/OAS3 ruleset
//!
//! Severities follow what the checks can prove: structural defects that
//! break tooling (broken references, undefined required properties) are
//! errors, stylistic and documentation defects are warnings. Disabled
//! rules stay in the table so the engine can surface and re-enable them
//! through configuration.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use crate::{Rule, Ruleset};
use oaslint_core::{functions, Format, Severity};
use serde_json::json;

const ALL_FORMATS: &[Format] = &[Format::Oas2, Format::Oas3];
const OAS2_ONLY: &[Format] = &[Format::Oas2];
const OAS3_ONLY: &[Format] = &[Format::Oas3];

/// Build the OAS ruleset table
pub fn oas_ruleset() -> Ruleset {
    Ruleset {
        name: "oas",
        rules: vec![
            Rule {
                name: "operation-4xx-5xx-response",
                description: "Operations should declare at least one client or server error response",
                severity: Severity::Warn,
                formats: ALL_FORMATS,
                given: &["$.paths[*][*].responses"],
                function: functions::key_match_any_pattern,
                options: Some(json!({"patterns": ["/^4\\d{2}$/", "/^5\\d{2}$/"]})),
            },
            Rule {
                name: "response-schema-present",
                description: "Non-default responses should declare a schema",
                severity: Severity::Warn,
                formats: OAS2_ONLY,
                given: &["$.paths[*][*].responses[*]"],
                function: functions::ensure_field,
                options: Some(json!({"field": "schema"})),
            },
            Rule {
                name: "info-sections-complete",
                description: "The info block should describe and attribute the API",
                severity: Severity::Warn,
                formats: ALL_FORMATS,
                given: &["$"],
                function: functions::include_all,
                options: Some(json!({"values": ["info.description", "info.contact", "info.version"]})),
            },
            Rule {
                name: "schema-completeness",
                description: "Object schemas must declare properties or a composition keyword",
                severity: Severity::Error,
                formats: ALL_FORMATS,
                given: &["$.components.schemas[*]", "$.definitions[*]"],
                function: functions::completed_schema,
                options: None,
            },
            Rule {
                name: "default-in-enum",
                description: "Property defaults must be members of their enum",
                severity: Severity::Error,
                formats: ALL_FORMATS,
                given: &["$.components.schemas[*].properties", "$.definitions[*].properties"],
                function: functions::default_in_enum,
                options: None,
            },
            Rule {
                name: "required-properties-defined",
                description: "Every required property name must be declared under properties",
                severity: Severity::Error,
                formats: ALL_FORMATS,
                given: &["$.components.schemas[*]", "$.definitions[*]", "$..schema"],
                function: functions::required_properties,
                options: None,
            },
            Rule {
                name: "example-provided",
                description: "Response and parameter schemas should be exemplified down to their leaves",
                severity: Severity::Warn,
                formats: ALL_FORMATS,
                given: &["$.paths[*][*].responses[*]", "$.paths[*][*].parameters[*]"],
                function: functions::ensure_examples,
                options: None,
            },
            Rule {
                name: "only-one-version",
                description: "Version tokens must be uniform and live in servers or paths, not both",
                severity: Severity::Warn,
                formats: ALL_FORMATS,
                given: &["$"],
                function: functions::multi_version,
                options: Some(json!({"exceptions": []})),
            },
            Rule {
                name: "server-version-present",
                description: "Every server URL or basePath should carry a version",
                severity: Severity::Off,
                formats: ALL_FORMATS,
                given: &["$"],
                function: functions::multi_version,
                options: Some(json!({"check": "server-url-missing"})),
            },
            Rule {
                name: "no-broken-ref-siblings",
                description: "References nested under $ref siblings must resolve",
                severity: Severity::Error,
                formats: ALL_FORMATS,
                given: &["$..[?(@.$ref)]"],
                function: functions::ref_siblings,
                options: None,
            },
            Rule {
                name: "operation-error-descriptions-unique",
                description: "Error responses of one operation should not share a description",
                severity: Severity::Warn,
                formats: ALL_FORMATS,
                given: &["$.paths"],
                function: functions::unique_error_descriptions,
                options: None,
            },
            Rule {
                name: "error-descriptions-consistent",
                description: "A status code should mean the same thing everywhere in the document",
                severity: Severity::Warn,
                formats: ALL_FORMATS,
                given: &["$"],
                function: functions::error_consistency,
                options: None,
            },
            Rule {
                name: "operation-id-casing",
                description: "operationIds should follow a single casing convention",
                severity: Severity::Warn,
                formats: ALL_FORMATS,
                given: &["$"],
                function: functions::operation_id_consistency,
                options: None,
            },
            Rule {
                name: "tag-casing",
                description: "Tag names should follow a single casing convention",
                severity: Severity::Warn,
                formats: OAS3_ONLY,
                given: &["$"],
                function: functions::tag_consistency,
                options: None,
            },
        ],
    }
}
