// ABOUTME: Pre-compiled CSS selector cache for O(1) selector lookup.
// ABOUTME: Marker selectors are parsed once per process and shared by every extraction call.

//! Selector caching for repeated DOM queries.
//!
//! Marker selectors come from configuration as strings. Parsing them on every
//! extraction call would dominate the cost of small documents, so compiled
//! selectors are memoized here. The cache only affects speed; a selector string
//! always compiles to the same `Selector`.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::error::ExtractError;

/// Thread-safe cache of compiled CSS selectors. Invalid selectors are cached as `None`.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` if the selector is invalid.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have inserted while we were parsing.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Compiles a selector and reports why it is invalid.
///
/// Used when validating configuration, where a bad marker should surface as
/// an error instead of silently matching nothing.
pub fn validate(css: &str) -> Result<(), ExtractError> {
    match Selector::parse(css) {
        Ok(selector) => {
            let mut cache = SELECTOR_CACHE.write().unwrap_or_else(PoisonError::into_inner);
            cache
                .entry(css.to_string())
                .or_insert_with(|| Some(selector));
            Ok(())
        }
        Err(err) => Err(ExtractError::invalid_selector(css, err)),
    }
}
