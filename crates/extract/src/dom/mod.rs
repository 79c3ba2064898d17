// ABOUTME: Document adapter over scraper's HTML tree.
// ABOUTME: Selector cache plus total query helpers used by every extractor.

//! DOM utilities for navigating parsed markup.
//!
//! The extractors never touch `scraper` directly for lookups; they go through
//! `query`, whose helpers turn a missing element into an empty string or `None`
//! instead of an error.

pub mod compiled;
pub mod query;
