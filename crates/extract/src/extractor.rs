// ABOUTME: Extractor entry point tying markers, matchers, and reporter to the extraction flows.
// ABOUTME: Also assembles the combined page payload and exposes default-configured free functions.

use std::fmt;
use std::sync::Arc;

use scraper::Html;

use crate::diagnostics::{Reporter, TracingReporter};
use crate::dom::query;
use crate::extractors::{self, form, Context, Matchers};
use crate::markers::Markers;
use crate::model::{FormField, PagePayload, PageSections};
use crate::options::ExtractorBuilder;

/// Converts CMS markup into typed page sections and a form schema.
///
/// Every method is a pure function of its input markup: repeated calls with
/// the same markup return equal values. Nothing here returns an error; misses
/// become defaults and are reported to the configured `Reporter`.
#[derive(Clone)]
pub struct Extractor {
    markers: Markers,
    matchers: Matchers,
    reporter: Arc<dyn Reporter>,
}

impl Extractor {
    pub(crate) fn from_parts(markers: Markers, matchers: Matchers, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            markers,
            matchers,
            reporter,
        }
    }

    /// Returns a builder for an extractor with custom markers, matchers, or reporter.
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    fn context(&self) -> Context<'_> {
        Context {
            markers: &self.markers,
            matchers: &self.matchers,
            reporter: self.reporter.as_ref(),
        }
    }

    /// Extracts the four page sections from markup.
    pub fn extract_sections(&self, markup: &str) -> PageSections {
        self.sections_from_document(&query::parse(markup))
    }

    /// Extracts the contact form schema from markup.
    pub fn extract_form_fields(&self, markup: &str) -> Vec<FormField> {
        self.form_fields_from_document(&query::parse(markup))
    }

    /// Runs both flows over a single parse of the markup.
    pub fn extract_page(&self, markup: &str) -> PagePayload {
        let doc = query::parse(markup);
        PagePayload {
            sections: self.sections_from_document(&doc),
            form_fields: self.form_fields_from_document(&doc),
        }
    }

    /// Section extraction over an already parsed document.
    pub fn sections_from_document(&self, doc: &Html) -> PageSections {
        extractors::extract_sections(doc.root_element(), &self.context())
    }

    /// Form extraction over an already parsed document.
    pub fn form_fields_from_document(&self, doc: &Html) -> Vec<FormField> {
        form::extract(doc.root_element(), &self.context())
    }
}

impl Default for Extractor {
    /// Default markers and matchers, reporting through `tracing`.
    fn default() -> Self {
        Self::from_parts(
            Markers::default(),
            Matchers::default(),
            Arc::new(TracingReporter),
        )
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("markers", &self.markers)
            .field("matchers", &self.matchers)
            .finish_non_exhaustive()
    }
}

/// Extracts page sections with the default configuration.
pub fn extract_sections(markup: &str) -> PageSections {
    Extractor::default().extract_sections(markup)
}

/// Extracts the contact form schema with the default configuration.
pub fn extract_form_fields(markup: &str) -> Vec<FormField> {
    Extractor::default().extract_form_fields(markup)
}

/// Extracts sections and form schema with the default configuration.
pub fn extract_page(markup: &str) -> PagePayload {
    Extractor::default().extract_page(markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingReporter, DiagnosticKind, Part};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_markup_yields_default_shapes() {
        assert_eq!(extract_sections(""), PageSections::default());
        assert!(extract_form_fields("").is_empty());
        assert_eq!(extract_page(""), PagePayload::default());
    }

    #[test]
    fn test_reporter_sees_every_section_miss() {
        let reporter = Arc::new(CollectingReporter::new());
        let extractor = Extractor::builder()
            .reporter(reporter.clone())
            .build()
            .unwrap();

        let sections = extractor.extract_sections("<p>nothing to see</p>");
        assert!(sections.is_empty());

        assert!(reporter.contains(Part::Hero, DiagnosticKind::MissingContainer));
        assert!(reporter.contains(Part::Problem, DiagnosticKind::MissingContainer));
        assert!(reporter.contains(Part::Advantages, DiagnosticKind::MissingElement));
        assert!(reporter.contains(Part::Testimonials, DiagnosticKind::MissingContainer));
    }

    #[test]
    fn test_extract_page_combines_flows() {
        let markup = r#"
            <div class="wp-block-group alignfull is-style-section-1"><h2>Hello</h2></div>
            <form class="wpcf7-form"><input class="wpcf7-form-control" name="your-name"></form>
        "#;
        let payload = Extractor::default().extract_page(markup);

        assert_eq!(payload.sections.hero.title, "Hello");
        assert_eq!(payload.form_fields.len(), 1);
        assert_eq!(payload.form_fields[0].name, "your-name");
    }
}
