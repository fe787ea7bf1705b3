//! Error types for the oaslint core library
//!
//! Lint findings are never errors: a document defect or a misconfigured
//! rule option surfaces as a [`crate::Diagnostic`] so the reporting
//! pipeline stays uniform. The error type below covers the remaining
//! ambient failures, all of which checkers convert into misconfiguration
//! diagnostics before returning.

use thiserror::Error;

/// Main error type for oaslint operations
#[derive(Error, Debug)]
pub enum Error {
    /// A regex literal supplied through rule options failed to compile
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Rule options did not have the shape the checker expects
    #[error("invalid options for {function}: {message}")]
    InvalidOptions { function: String, message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let error = Error::InvalidPattern {
            pattern: "/[/".to_string(),
            message: "unclosed character class".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid pattern '/[/': unclosed character class"
        );
    }

    #[test]
    fn test_invalid_options_display() {
        let error = Error::InvalidOptions {
            function: "ensure-field".to_string(),
            message: "options are required".to_string(),
        };
        assert!(error.to_string().contains("ensure-field"));
    }
}
