// ABOUTME: Total query helpers: selector lookup, ancestor/sibling navigation, text and attribute reads.
// ABOUTME: Every leaf read maps a missing element to an empty string so callers never branch on absence.

//! Query helpers over `scraper::ElementRef`.
//!
//! Key behaviors:
//! - Invalid or unmatched selectors yield `None` / an empty `Vec`, never an error.
//! - When several elements match, the first in document order wins.
//! - Text is the concatenated text content of an element, trimmed.

use scraper::{ElementRef, Html};

use crate::dom::compiled::get_or_compile;
use crate::matcher::TextMatcher;

/// Parses markup into a document. Fragments and full documents are both accepted.
pub fn parse(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Returns the first descendant of `scope` matching `css`.
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = get_or_compile(css)?;
    let first = scope.select(&selector).next();
    first
}

/// Returns every descendant of `scope` matching `css`, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    let Some(selector) = get_or_compile(css) else {
        return Vec::new();
    };
    let matched: Vec<ElementRef<'a>> = scope.select(&selector).collect();
    matched
}

/// Returns the first element matching `css` whose trimmed text satisfies `matcher`.
pub fn find_by_text<'a>(
    scope: ElementRef<'a>,
    css: &str,
    matcher: &dyn TextMatcher,
) -> Option<ElementRef<'a>> {
    select_all(scope, css)
        .into_iter()
        .find(|el| matcher.matches(text_content(*el).trim()))
}

/// Returns `el` itself or its nearest ancestor matching `css`.
pub fn closest<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = get_or_compile(css)?;
    if selector.matches(&el) {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| selector.matches(ancestor))
}

/// Returns the next sibling that is an element, skipping text and comments.
pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// Concatenated text of all descendant text nodes, untrimmed.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Trimmed text of an optional element; `""` when absent.
pub fn text_of(el: Option<ElementRef<'_>>) -> String {
    el.map(|el| text_content(el).trim().to_string())
        .unwrap_or_default()
}

/// Value of an attribute on an optional element; `""` when the element or attribute is absent.
pub fn attr_of(el: Option<ElementRef<'_>>, name: &str) -> String {
    el.and_then(|el| el.value().attr(name))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Trimmed text of the first descendant of `scope` matching `css`.
pub fn text_at(scope: ElementRef<'_>, css: &str) -> String {
    text_of(select_first(scope, css))
}

/// Attribute of the first descendant of `scope` matching `css`.
pub fn attr_at(scope: ElementRef<'_>, css: &str, name: &str) -> String {
    attr_of(select_first(scope, css), name)
}

/// Lowercased tag name.
pub fn tag_name(el: ElementRef<'_>) -> String {
    el.value().name().to_ascii_lowercase()
}
