// ABOUTME: Testimonials extractor: quote text plus author name, position, and company per column.
// ABOUTME: Gated on the section title; columns without a blockquote are not testimonials.

use scraper::ElementRef;

use crate::diagnostics::{Diagnostic, DiagnosticKind, Part};
use crate::dom::query;
use crate::extractors::Context;
use crate::model::{Testimonial, TestimonialsSection};

/// Extracts the testimonials section.
///
/// Unlike the other regions, nothing is returned unless the title is found.
pub fn extract(root: ElementRef<'_>, cx: &Context<'_>) -> TestimonialsSection {
    let m = &cx.markers.testimonials;
    let Some(title) =
        query::find_by_text(root, &m.title_element, cx.matchers.testimonials_title.as_ref())
    else {
        cx.report(Diagnostic::missing_container(Part::Testimonials, "section title"));
        return TestimonialsSection::default();
    };

    let testimonials = query::select_all(root, &m.column)
        .into_iter()
        .filter_map(|column| testimonial(column, cx))
        .collect();

    TestimonialsSection {
        section_title: query::text_of(Some(title)),
        testimonials,
    }
}

fn testimonial(column: ElementRef<'_>, cx: &Context<'_>) -> Option<Testimonial> {
    let m = &cx.markers.testimonials;
    let Some(quote) = query::select_first(column, &m.quote) else {
        cx.report(Diagnostic::new(
            Part::Testimonials,
            DiagnosticKind::DroppedCandidate,
            &m.quote,
        ));
        return None;
    };

    Some(Testimonial {
        quote_text: cx.text(quote, &m.quote_text, Part::Testimonials),
        author_name: query::text_at(quote, &m.cite),
        author_position: query::text_at(quote, &m.position),
        author_company: query::text_at(quote, &m.company),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingReporter;
    use crate::extractors::Matchers;
    use crate::markers::Markers;
    use pretty_assertions::assert_eq;

    fn run(html: &str) -> (TestimonialsSection, CollectingReporter) {
        let markers = Markers::default();
        let matchers = Matchers::default();
        let reporter = CollectingReporter::new();
        let cx = Context {
            markers: &markers,
            matchers: &matchers,
            reporter: &reporter,
        };
        let doc = query::parse(html);
        let section = extract(doc.root_element(), &cx);
        (section, reporter)
    }

    #[test]
    fn test_testimonials_with_dropped_columns() {
        let html = r#"
            <p class="has-text-align-center">Testimonials</p>
            <div class="wp-block-columns">
                <div class="wp-block-column">
                    <blockquote class="wp-block-quote">
                        <p>We cut our release cycle in half.</p>
                        <cite>Dana Kim<br><strong>VP Engineering</strong><br><sub>Northwind</sub></cite>
                    </blockquote>
                </div>
                <div class="wp-block-column">
                    <p>No quote here, just a column.</p>
                </div>
                <div class="wp-block-column">
                    <blockquote class="wp-block-quote"><p>Solid.</p></blockquote>
                </div>
            </div>
        "#;
        let (section, reporter) = run(html);

        assert_eq!(section.section_title, "Testimonials");
        assert_eq!(
            section.testimonials,
            vec![
                Testimonial {
                    quote_text: "We cut our release cycle in half.".to_string(),
                    author_name: "Dana KimVP EngineeringNorthwind".to_string(),
                    author_position: "VP Engineering".to_string(),
                    author_company: "Northwind".to_string(),
                },
                Testimonial {
                    quote_text: "Solid.".to_string(),
                    ..Default::default()
                },
            ]
        );
        assert!(reporter.contains(Part::Testimonials, DiagnosticKind::DroppedCandidate));
    }

    #[test]
    fn test_missing_title_gates_whole_section() {
        let html = r#"
            <div class="wp-block-columns">
                <div class="wp-block-column">
                    <blockquote><p>Orphan quote</p><cite>Someone</cite></blockquote>
                </div>
            </div>
        "#;
        let (section, reporter) = run(html);

        assert_eq!(section, TestimonialsSection::default());
        assert!(reporter.contains(Part::Testimonials, DiagnosticKind::MissingContainer));
    }

    #[test]
    fn test_author_name_is_whole_cite_text() {
        let html = r#"
            <p>What clients say: Testimonials</p>
            <div class="wp-block-columns"><div class="wp-block-column">
                <blockquote><p>Great.</p><cite><em>Lee Park</em></cite></blockquote>
            </div></div>
        "#;
        let (section, _) = run(html);

        assert_eq!(section.section_title, "What clients say: Testimonials");
        assert_eq!(section.testimonials[0].author_name, "Lee Park");
        assert_eq!(section.testimonials[0].author_position, "");
    }

    #[test]
    fn test_author_name_keeps_position_and_company_text() {
        let html = r#"
            <p>Testimonials</p>
            <div class="wp-block-columns"><div class="wp-block-column">
                <blockquote><p>Fast.</p><cite>Ana Ortiz <strong>COO</strong> <sub>Fjord</sub></cite></blockquote>
            </div></div>
        "#;
        let (section, _) = run(html);

        let t = &section.testimonials[0];
        assert_eq!(t.author_name, "Ana Ortiz COO Fjord");
        assert_eq!(t.author_position, "COO");
        assert_eq!(t.author_company, "Fjord");
    }
}
