//! Version token extraction and cross-document version consistency
//!
//! Version information should live in exactly one place, either a server
//! URL or the path templates, and must be uniform across all occurrences.
//! The
//! extraction grammar is deliberately tolerant: a `v` followed by
//! dot-separated digit groups, optionally slash-delimited, so that path
//! fragments like `/v4fib` never count as versions.
//!
//! Copyright (c) 2025 Oaslint Team
//! Licensed under the Apache-2.0 license

use super::{misconfigured, parse_optional_options};
use crate::context::EvaluationContext;
use crate::diagnostic::{CheckOutcome, Diagnostic, PathSegment};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

static VERSION_TOKEN: OnceLock<Regex> = OnceLock::new();
static TEMPLATE_VARIABLE: OnceLock<Regex> = OnceLock::new();

fn version_token() -> &'static Regex {
    VERSION_TOKEN.get_or_init(|| Regex::new(r"\b/?v\d+(\.\d+)*/?(\b|$)").unwrap())
}

fn template_variable() -> &'static Regex {
    TEMPLATE_VARIABLE.get_or_init(|| Regex::new(r"\{([^{}]+)\}").unwrap())
}

/// Which variant of the version check a rule asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionCheck {
    /// Every server URL (or basePath) must carry a version
    ServerUrlMissing,
}

/// Options for [`multi_version`]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersionOptions {
    /// Alternate check mode; absent means the default consistency scan
    pub check: Option<VersionCheck>,
    /// Path fragments that must never count as version tokens
    pub exceptions: Vec<String>,
}

/// Extract the version token of a URL or path string
///
/// Substrings listed in `exceptions` are masked with a neutral
/// placeholder before matching, so excepted fragments cannot trigger a
/// false positive. Returns the token with its delimiting slashes
/// stripped, or the empty string when no version is present.
pub fn get_version(input: &str, exceptions: &[String]) -> String {
    let mut masked = input.to_string();
    for exception in exceptions {
        if exception.is_empty() {
            continue;
        }
        masked = masked.replace(exception.as_str(), "_");
    }

    match version_token().find(&masked) {
        Some(found) => {
            let mut token = found.as_str();
            token = token.strip_prefix('/').unwrap_or(token);
            token = token.strip_suffix('/').unwrap_or(token);
            token.to_string()
        }
        None => String::new(),
    }
}

/// A server URL together with its root-relative location
struct ServerUrl {
    url: String,
    location: Vec<PathSegment>,
}

/// Collect server URLs: OAS3 `servers[*].url` with template variables
/// substituted by their declared defaults, or the OAS2 `basePath`
fn server_urls(document: &Value) -> Vec<ServerUrl> {
    let mut urls = Vec::new();
    if let Some(servers) = document.get("servers").and_then(Value::as_array) {
        for (index, server) in servers.iter().enumerate() {
            let raw = match server.get("url").and_then(Value::as_str) {
                Some(url) => url,
                None => continue,
            };
            urls.push(ServerUrl {
                url: substitute_variables(raw, server.get("variables")),
                location: vec!["servers".into(), index.into(), "url".into()],
            });
        }
    } else if let Some(base_path) = document.get("basePath").and_then(Value::as_str) {
        urls.push(ServerUrl {
            url: base_path.to_string(),
            location: vec!["basePath".into()],
        });
    }
    urls
}

/// Replace `{name}` template variables with their declared defaults;
/// variables with no default stay as written
fn substitute_variables(url: &str, variables: Option<&Value>) -> String {
    let variables = match variables.and_then(Value::as_object) {
        Some(variables) => variables,
        None => return url.to_string(),
    };
    template_variable()
        .replace_all(url, |captures: &regex::Captures<'_>| {
            variables
                .get(&captures[1])
                .and_then(|variable| variable.get("default"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| captures[0].to_string())
        })
        .into_owned()
}

/// Cross-check version tokens between server URLs and path templates
///
/// In `server-url-missing` mode the first server without a version fails
/// the check immediately. In the default mode every applicable finding
/// is collected: mixed server versions, a versioned path while servers
/// already declare one, and version mismatches across paths.
pub fn multi_version(
    target: &Value,
    options: Option<&Value>,
    _context: &EvaluationContext<'_>,
) -> CheckOutcome {
    let parsed: VersionOptions = match parse_optional_options("multi-version", options) {
        Ok(parsed) => parsed,
        Err(error) => return misconfigured(error),
    };

    if parsed.check == Some(VersionCheck::ServerUrlMissing) {
        let mut diagnostics = Vec::new();
        for server in server_urls(target) {
            if get_version(&server.url, &[]).is_empty() {
                diagnostics.push(Diagnostic::at(
                    "no version in server urls or basePath.",
                    server.location,
                ));
                break;
            }
        }
        return Some(diagnostics);
    }

    let mut diagnostics = Vec::new();

    let server_versions: Vec<String> = server_urls(target)
        .iter()
        .map(|server| get_version(&server.url, &[]))
        .filter(|version| !version.is_empty())
        .collect();
    debug!("server versions: {:?}", server_versions);

    let mut distinct: Vec<&String> = Vec::new();
    for version in &server_versions {
        if !distinct.contains(&version) {
            distinct.push(version);
        }
    }
    if distinct.len() > 1 {
        diagnostics.push(Diagnostic::at(
            "multi versions in servers.",
            vec!["servers".into()],
        ));
    }
    let server_first_version = server_versions.first();

    let mut path_first_version: Option<String> = None;
    if let Some(paths) = target.get("paths").and_then(Value::as_object) {
        for path in paths.keys() {
            let version = get_version(path, &parsed.exceptions);
            if version.is_empty() {
                continue;
            }
            match &path_first_version {
                None => {
                    if let Some(server_version) = server_first_version {
                        diagnostics.push(Diagnostic::at(
                            format!(
                                "version {} in path is not allowed when servers already specify {}.",
                                version, server_version
                            ),
                            vec!["paths".into(), path.as_str().into()],
                        ));
                    }
                    path_first_version = Some(version);
                }
                Some(first) => {
                    if version != *first {
                        diagnostics.push(Diagnostic::at(
                            format!("multi versions in paths: {} and {}.", first, version),
                            vec!["paths".into(), path.as_str().into()],
                        ));
                    }
                }
            }
        }
    }

    Some(diagnostics)
}
