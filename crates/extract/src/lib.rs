// ABOUTME: Main library entry point for the wpblocks content extraction engine.
// ABOUTME: Re-exports the public API: Extractor, ExtractorBuilder, the output model, markers, and diagnostics.

//! wpblocks - turns WordPress block markup into typed page data.
//!
//! The engine has two independent flows over the same parsed document:
//! page sections (hero, problem statement, before/after comparison,
//! testimonials) and the Contact Form 7 field schema. Neither flow fails:
//! anything missing from the markup becomes an empty default and a
//! diagnostic.
//!
//! # Example
//!
//! ```
//! use wpblocks_extract::{extract_form_fields, extract_sections};
//!
//! let sections = extract_sections("");
//! assert!(sections.is_empty());
//!
//! let fields = extract_form_fields(
//!     r#"<form class="wpcf7-form"><input class="wpcf7-form-control" name="your-name"></form>"#,
//! );
//! assert_eq!(fields[0].name, "your-name");
//! ```

pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod extractors;
pub mod loader;
pub mod markers;
pub mod matcher;
pub mod model;
pub mod options;
pub mod response;

pub use crate::diagnostics::{
    CollectingReporter, Diagnostic, DiagnosticKind, NullReporter, Part, Reporter, TracingReporter,
};
pub use crate::error::ExtractError;
pub use crate::extractor::{extract_form_fields, extract_page, extract_sections, Extractor};
pub use crate::extractors::Matchers;
pub use crate::loader::load_markers;
pub use crate::markers::Markers;
pub use crate::matcher::{ContainsAny, ExactText, PatternMatch, TextMatcher, TextRule};
pub use crate::model::{
    AdvantagesSection, FieldKind, FormField, HeroSection, PagePayload, PageSections, ProblemEntry,
    ProblemSection, StateLabel, StateList, Testimonial, TestimonialsSection,
};
pub use crate::options::ExtractorBuilder;
pub use crate::response::page_content_from_response;
