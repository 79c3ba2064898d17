// ABOUTME: Text-matching strategies used to locate headings and titles by their authored text.
// ABOUTME: Provides the TextMatcher trait with exact, contains-any, and regex implementations.

//! Text locators for authored content.
//!
//! Sections whose markup has no unique structural marker are found by the text
//! of a heading or paragraph. How that text is compared is a strategy: each
//! locator holds an `Arc<dyn TextMatcher>` and can be swapped without touching
//! traversal code.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Predicate over the trimmed text of a candidate element.
pub trait TextMatcher: fmt::Debug + Send + Sync {
    fn matches(&self, text: &str) -> bool;
}

/// Matches text equal to the expected value after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactText {
    expected: String,
}

impl ExactText {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into().trim().to_string(),
        }
    }
}

impl TextMatcher for ExactText {
    fn matches(&self, text: &str) -> bool {
        text.trim() == self.expected
    }
}

/// Matches text containing any of the given substrings (case-sensitive).
///
/// An empty pattern list matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAny {
    patterns: Vec<String>,
}

impl ContainsAny {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }
}

impl TextMatcher for ContainsAny {
    fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| text.contains(p.as_str()))
    }
}

/// Matches text against a regular expression.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    regex: Regex,
}

impl PatternMatch {
    pub fn new(pattern: &str) -> Result<Self, ExtractError> {
        let regex = Regex::new(pattern).map_err(|e| ExtractError::invalid_rule(pattern, e))?;
        Ok(Self { regex })
    }
}

impl TextMatcher for PatternMatch {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Serializable description of a text matcher, as it appears in marker config.
///
/// ```json
/// { "exact": "The Problem We Solve" }
/// { "contains": ["Before", "Befour"] }
/// { "pattern": "(?i)^testimonials?$" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRule {
    Exact(String),
    Contains(Vec<String>),
    Pattern(String),
}

impl TextRule {
    /// Shorthand for a single-substring contains rule.
    pub fn contains(pattern: impl Into<String>) -> Self {
        TextRule::Contains(vec![pattern.into()])
    }

    /// Builds the matcher this rule describes.
    pub fn to_matcher(&self) -> Result<Arc<dyn TextMatcher>, ExtractError> {
        let matcher: Arc<dyn TextMatcher> = match self {
            TextRule::Exact(expected) => Arc::new(ExactText::new(expected.as_str())),
            TextRule::Contains(patterns) => Arc::new(ContainsAny::new(patterns.iter().cloned())),
            TextRule::Pattern(pattern) => Arc::new(PatternMatch::new(pattern)?),
        };
        Ok(matcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_text_trims_both_sides() {
        let m = ExactText::new(" The Problem We Solve ");
        assert!(m.matches("The Problem We Solve"));
        assert!(m.matches("\n  The Problem We Solve\t"));
        assert!(!m.matches("The Problem We Solve Today"));
        assert!(!m.matches("the problem we solve"));
    }

    #[test]
    fn test_contains_any() {
        let m = ContainsAny::new(["Before", "Befour"]);
        assert!(m.matches("Befour using us"));
        assert!(m.matches("Before"));
        assert!(!m.matches("before"));
        assert!(!m.matches("After"));
    }

    #[test]
    fn test_contains_any_ignores_empty_patterns() {
        let m = ContainsAny::new([""]);
        assert!(!m.matches("anything"));
    }

    #[test]
    fn test_pattern_match() {
        let m = PatternMatch::new(r"(?i)^testimonials?$").unwrap();
        assert!(m.matches("TESTIMONIALS"));
        assert!(!m.matches("Our testimonials"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = TextRule::Pattern("(unclosed".to_string())
            .to_matcher()
            .unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_rule_serde_shape() {
        let rule: TextRule = serde_json::from_str(r#"{"contains": ["After"]}"#).unwrap();
        assert_eq!(rule, TextRule::contains("After"));

        let rule: TextRule = serde_json::from_str(r#"{"exact": "Hi"}"#).unwrap();
        assert!(rule.to_matcher().unwrap().matches(" Hi "));
    }
}
