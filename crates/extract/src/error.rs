// ABOUTME: Error types for configuring the extractor and unwrapping saved CMS responses.
// ABOUTME: Extraction itself never fails; these cover marker config, selectors, and input plumbing.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up an `Extractor` or preparing its input.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A configured marker is not a valid CSS selector.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A configured text rule could not be compiled into a matcher.
    #[error("invalid text rule `{rule}`: {reason}")]
    InvalidRule { rule: String, reason: String },

    /// The marker configuration could not be deserialized.
    #[error("failed to parse marker config: {0}")]
    Config(#[from] serde_json::Error),

    /// A marker file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A saved GraphQL response body is not valid JSON of the expected shape.
    #[error("failed to parse response: {0}")]
    Response(#[source] serde_json::Error),

    /// A GraphQL response carried no page or post content.
    #[error("response has no content: {0}")]
    MissingContent(String),
}

impl ExtractError {
    /// Creates an InvalidSelector error from a selector parse failure.
    pub fn invalid_selector(selector: impl Into<String>, reason: impl fmt::Display) -> Self {
        ExtractError::InvalidSelector {
            selector: selector.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an InvalidRule error.
    pub fn invalid_rule(rule: impl Into<String>, reason: impl fmt::Display) -> Self {
        ExtractError::InvalidRule {
            rule: rule.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an Io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a MissingContent error with a custom message.
    pub fn missing_content(msg: impl Into<String>) -> Self {
        ExtractError::MissingContent(msg.into())
    }

    /// Returns true if this is an InvalidSelector error.
    pub fn is_invalid_selector(&self) -> bool {
        matches!(self, ExtractError::InvalidSelector { .. })
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        matches!(self, ExtractError::Config(_))
    }

    /// Returns true if this is a Response error.
    pub fn is_response(&self) -> bool {
        matches!(self, ExtractError::Response(_))
    }

    /// Returns true if this is a MissingContent error.
    pub fn is_missing_content(&self) -> bool {
        matches!(self, ExtractError::MissingContent(_))
    }
}
