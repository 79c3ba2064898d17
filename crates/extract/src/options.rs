// ABOUTME: ExtractorBuilder, a fluent API for constructing Extractor instances.
// ABOUTME: Validates marker selectors and text rules up front and applies matcher overrides.

use std::sync::Arc;

use crate::diagnostics::{Reporter, TracingReporter};
use crate::error::ExtractError;
use crate::extractor::Extractor;
use crate::extractors::Matchers;
use crate::markers::Markers;
use crate::matcher::TextMatcher;

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Clone)]
pub struct ExtractorBuilder {
    markers: Markers,
    reporter: Arc<dyn Reporter>,
    problem_title: Option<Arc<dyn TextMatcher>>,
    advantages_title: Option<Arc<dyn TextMatcher>>,
    before_heading: Option<Arc<dyn TextMatcher>>,
    after_heading: Option<Arc<dyn TextMatcher>>,
    testimonials_title: Option<Arc<dyn TextMatcher>>,
}

impl ExtractorBuilder {
    /// Create a new builder with default markers and a tracing reporter.
    pub fn new() -> Self {
        Self {
            markers: Markers::default(),
            reporter: Arc::new(TracingReporter),
            problem_title: None,
            advantages_title: None,
            before_heading: None,
            after_heading: None,
            testimonials_title: None,
        }
    }

    /// Replace all markers.
    pub fn markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Set the diagnostics reporter.
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Override how the problem-statement heading is recognized.
    pub fn problem_title(mut self, matcher: Arc<dyn TextMatcher>) -> Self {
        self.problem_title = Some(matcher);
        self
    }

    /// Override how the advantages title is recognized.
    pub fn advantages_title(mut self, matcher: Arc<dyn TextMatcher>) -> Self {
        self.advantages_title = Some(matcher);
        self
    }

    /// Override how the "before" column heading is recognized.
    pub fn before_heading(mut self, matcher: Arc<dyn TextMatcher>) -> Self {
        self.before_heading = Some(matcher);
        self
    }

    /// Override how the "after" column heading is recognized.
    pub fn after_heading(mut self, matcher: Arc<dyn TextMatcher>) -> Self {
        self.after_heading = Some(matcher);
        self
    }

    /// Override how the testimonials title is recognized.
    pub fn testimonials_title(mut self, matcher: Arc<dyn TextMatcher>) -> Self {
        self.testimonials_title = Some(matcher);
        self
    }

    /// Build the Extractor, failing if a selector or text rule is invalid.
    pub fn build(self) -> Result<Extractor, ExtractError> {
        self.markers.validate()?;
        let mut matchers = Matchers::from_markers(&self.markers)?;

        if let Some(m) = self.problem_title {
            matchers.problem_title = m;
        }
        if let Some(m) = self.advantages_title {
            matchers.advantages_title = m;
        }
        if let Some(m) = self.before_heading {
            matchers.before_heading = m;
        }
        if let Some(m) = self.after_heading {
            matchers.after_heading = m;
        }
        if let Some(m) = self.testimonials_title {
            matchers.testimonials_title = m;
        }

        Ok(Extractor::from_parts(self.markers, matchers, self.reporter))
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
