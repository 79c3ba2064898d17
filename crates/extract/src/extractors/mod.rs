// ABOUTME: Section and form extraction strategies over a parsed document.
// ABOUTME: Shares the Context (markers, matchers, reporter) and the reporting leaf readers.

//! Content extraction module.
//!
//! Submodules:
//! - `hero`, `problem`, `advantages`, `testimonials`: one page region each.
//! - `form`: the contact form schema.
//!
//! Every extractor is a total function of the document: a miss substitutes
//! the documented default and emits a diagnostic, so one malformed region
//! never affects another.

use std::fmt;
use std::sync::Arc;

use scraper::ElementRef;

use crate::diagnostics::{Diagnostic, Part, Reporter};
use crate::dom::query;
use crate::error::ExtractError;
use crate::markers::{self, Markers};
use crate::matcher::{ContainsAny, ExactText, TextMatcher};
use crate::model::PageSections;

pub mod advantages;
pub mod form;
pub mod hero;
pub mod problem;
pub mod testimonials;

/// Text locators for every region found by authored text rather than structure.
#[derive(Clone)]
pub struct Matchers {
    pub problem_title: Arc<dyn TextMatcher>,
    pub advantages_title: Arc<dyn TextMatcher>,
    pub before_heading: Arc<dyn TextMatcher>,
    pub after_heading: Arc<dyn TextMatcher>,
    pub testimonials_title: Arc<dyn TextMatcher>,
}

impl Matchers {
    /// Builds matchers from the text rules in `markers`.
    pub fn from_markers(markers: &Markers) -> Result<Self, ExtractError> {
        Ok(Self {
            problem_title: markers.problem.title.to_matcher()?,
            advantages_title: markers.advantages.title.to_matcher()?,
            before_heading: markers.advantages.before.to_matcher()?,
            after_heading: markers.advantages.after.to_matcher()?,
            testimonials_title: markers.testimonials.title.to_matcher()?,
        })
    }
}

impl Default for Matchers {
    fn default() -> Self {
        Self {
            problem_title: Arc::new(ExactText::new(markers::PROBLEM_TITLE)),
            advantages_title: Arc::new(ContainsAny::new([markers::ADVANTAGES_TITLE])),
            before_heading: Arc::new(ContainsAny::new(markers::BEFORE_HEADINGS)),
            after_heading: Arc::new(ContainsAny::new(markers::AFTER_HEADINGS)),
            testimonials_title: Arc::new(ContainsAny::new([markers::TESTIMONIALS_TITLE])),
        }
    }
}

impl fmt::Debug for Matchers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matchers")
            .field("problem_title", &self.problem_title)
            .field("advantages_title", &self.advantages_title)
            .field("before_heading", &self.before_heading)
            .field("after_heading", &self.after_heading)
            .field("testimonials_title", &self.testimonials_title)
            .finish()
    }
}

/// Everything an extractor reads besides the document itself.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub markers: &'a Markers,
    pub matchers: &'a Matchers,
    pub reporter: &'a dyn Reporter,
}

impl<'a> Context<'a> {
    pub fn report(&self, diagnostic: Diagnostic) {
        self.reporter.report(diagnostic);
    }

    /// Trimmed text of the first match of `css` under `scope`; `""` and a diagnostic when absent.
    pub fn text(&self, scope: ElementRef<'_>, css: &str, part: Part) -> String {
        match query::select_first(scope, css) {
            Some(el) => query::text_of(Some(el)),
            None => {
                self.report(Diagnostic::missing_element(part, css));
                String::new()
            }
        }
    }

    /// Attribute of the first match of `css` under `scope`; `""` and a diagnostic when absent or empty.
    pub fn attr(&self, scope: ElementRef<'_>, css: &str, name: &str, part: Part) -> String {
        let value = query::attr_at(scope, css, name);
        if value.is_empty() {
            self.report(Diagnostic::missing_element(part, format!("{css}[{name}]")));
        }
        value
    }
}

/// Runs every section extractor against the document root.
pub fn extract_sections(root: ElementRef<'_>, cx: &Context<'_>) -> PageSections {
    PageSections {
        hero: hero::extract(root, cx),
        problem: problem::extract(root, cx),
        advantages: advantages::extract(root, cx),
        testimonials: testimonials::extract(root, cx),
    }
}
