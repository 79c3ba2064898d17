// ABOUTME: Integration tests for page section extraction against a captured CMS page fixture.
// ABOUTME: Covers full extraction, empty input, per-section isolation, dedup, and idempotence.

use std::fs;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use wpblocks_extract::{
    extract_sections, AdvantagesSection, CollectingReporter, DiagnosticKind, Extractor,
    HeroSection, PageSections, Part, ProblemEntry, ProblemSection, StateLabel, StateList,
    Testimonial, TestimonialsSection,
};

/// Load an HTML snapshot from the fixtures directory.
fn load_html_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.html", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
}

#[test]
fn home_page_extracts_every_section() {
    let html = load_html_fixture("home");
    let sections = extract_sections(&html);

    let expected = PageSections {
        hero: HeroSection {
            title: "Hire engineers who ship from week one".to_string(),
            subtitle: "We match vetted remote developers with product teams in under ten days."
                .to_string(),
            cta_label: "Book a call".to_string(),
            image_url: "https://cms.example.com/wp-content/uploads/2024/05/hero-1024x683.jpg"
                .to_string(),
        },
        problem: ProblemSection {
            section_title: "The Problem We Solve".to_string(),
            entries: vec![
                ProblemEntry {
                    stat: "68%".to_string(),
                    description: "of hiring managers say a bad hire cost them a full quarter"
                        .to_string(),
                    image_url: "https://cms.example.com/wp-content/uploads/2024/05/clock.svg"
                        .to_string(),
                },
                ProblemEntry {
                    stat: "$240k".to_string(),
                    description: "average cost of a failed senior engineering hire".to_string(),
                    image_url: "https://cms.example.com/wp-content/uploads/2024/05/money.svg"
                        .to_string(),
                },
            ],
        },
        advantages: AdvantagesSection {
            section_title: "Our Advantages".to_string(),
            before: StateList {
                label: StateLabel::Before,
                items: vec![
                    "Months of interviews".to_string(),
                    "Agency markups of 30%".to_string(),
                ],
            },
            after: StateList {
                label: StateLabel::After,
                items: vec![
                    "Shortlist in 72 hours".to_string(),
                    "Flat monthly fee".to_string(),
                ],
            },
        },
        testimonials: TestimonialsSection {
            section_title: "Testimonials".to_string(),
            testimonials: vec![
                Testimonial {
                    quote_text: "Our first hire through them is now our tech lead.".to_string(),
                    author_name: "Maya ChenCTOBrightlane".to_string(),
                    author_position: "CTO".to_string(),
                    author_company: "Brightlane".to_string(),
                },
                Testimonial {
                    quote_text: "Three engineers onboarded in a single sprint.".to_string(),
                    author_name: "Tomas RuizHead of ProductKelp Labs".to_string(),
                    author_position: "Head of Product".to_string(),
                    author_company: "Kelp Labs".to_string(),
                },
            ],
        },
    };

    assert_eq!(sections, expected);
}

#[test]
fn empty_input_serializes_to_default_shape() {
    let sections = extract_sections("");
    assert_eq!(sections, PageSections::default());

    let json = serde_json::to_value(&sections).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "hero": {"title": "", "subtitle": "", "ctaLabel": "", "imageUrl": ""},
            "problem": {"sectionTitle": "", "entries": []},
            "advantages": {
                "sectionTitle": "",
                "before": {"label": "Before", "items": []},
                "after": {"label": "After", "items": []}
            },
            "testimonials": {"sectionTitle": "", "testimonials": []}
        })
    );
}

#[test]
fn broken_testimonials_do_not_affect_hero() {
    let html = r#"
        <div class="wp-block-group alignfull is-style-section-1">
            <h2>Still here</h2>
            <a class="wp-block-button__link">Go</a>
        </div>
        <div class="wp-block-columns"><div class="wp-block-column">
            <blockquote><p>Quote without a title</p>
        </div>
    "#;
    let reporter = Arc::new(CollectingReporter::new());
    let extractor = Extractor::builder().reporter(reporter.clone()).build().unwrap();

    let sections = extractor.extract_sections(html);

    assert_eq!(sections.hero.title, "Still here");
    assert_eq!(sections.hero.cta_label, "Go");
    assert_eq!(sections.testimonials, TestimonialsSection::default());
    assert!(reporter.contains(Part::Testimonials, DiagnosticKind::MissingContainer));
}

#[test]
fn duplicate_problem_blocks_collapse() {
    let column = r#"<div class="wp-block-column"><h2>3 of 4</h2><p>startups</p>
        <figure class="wp-block-image"><img src="/s.png"></figure></div>"#;
    let html = format!(
        r#"<h2>The Problem We Solve</h2><div class="wp-block-columns">{column}{column}</div>"#
    );

    let sections = extract_sections(&html);
    assert_eq!(sections.problem.entries.len(), 1);
}

#[test]
fn extraction_is_idempotent() {
    let html = load_html_fixture("home");
    let extractor = Extractor::default();

    let first = extractor.extract_sections(&html);
    let second = extractor.extract_sections(&html);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}
