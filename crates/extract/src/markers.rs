// ABOUTME: Structural markers (selectors and text rules) that locate each page region and form control.
// ABOUTME: Defaults describe Gutenberg block markup and Contact Form 7; JSON overrides may replace any key.

//! Marker configuration.
//!
//! A marker is either a CSS selector (structural marker) or a `TextRule`
//! (authored-text locator). Every struct is `#[serde(default)]`, so a JSON
//! override only needs the keys it changes:
//!
//! ```json
//! { "problem": { "title": { "exact": "Why It Matters" } } }
//! ```

use serde::{Deserialize, Serialize};

use crate::dom::compiled;
use crate::error::ExtractError;
use crate::matcher::TextRule;

/// Exact text of the problem-statement heading.
pub const PROBLEM_TITLE: &str = "The Problem We Solve";
pub const ADVANTAGES_TITLE: &str = "Advantages";
/// The CMS content spells the heading "Befour".
pub const BEFORE_HEADINGS: [&str; 2] = ["Before", "Befour"];
pub const AFTER_HEADINGS: [&str; 1] = ["After"];
pub const TESTIMONIALS_TITLE: &str = "Testimonials";

/// Every marker the extractors use, grouped by region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub hero: HeroMarkers,
    pub problem: ProblemMarkers,
    pub advantages: AdvantagesMarkers,
    pub testimonials: TestimonialsMarkers,
    pub form: FormMarkers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroMarkers {
    pub container: String,
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub image: String,
}

impl Default for HeroMarkers {
    fn default() -> Self {
        Self {
            container: ".wp-block-group.alignfull.is-style-section-1".to_string(),
            title: "h2".to_string(),
            subtitle: "p.is-style-text-subtitle".to_string(),
            cta: ".wp-block-button__link".to_string(),
            image: "figure.wp-block-image img".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemMarkers {
    /// Elements considered as the section heading.
    pub heading: String,
    pub title: TextRule,
    /// Column blocks inside the group that follows the heading.
    pub column: String,
    pub stat: String,
    pub description: String,
    pub image: String,
}

impl Default for ProblemMarkers {
    fn default() -> Self {
        Self {
            heading: "h2".to_string(),
            title: TextRule::Exact(PROBLEM_TITLE.to_string()),
            column: ".wp-block-column".to_string(),
            stat: "h2".to_string(),
            description: "p".to_string(),
            image: "figure.wp-block-image img".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvantagesMarkers {
    pub title_element: String,
    pub title: TextRule,
    pub column: String,
    /// Sub-headings naming each column; the enclosing `column` is the match target.
    pub column_heading: String,
    pub before: TextRule,
    pub after: TextRule,
    pub items: String,
}

impl Default for AdvantagesMarkers {
    fn default() -> Self {
        Self {
            title_element: "p".to_string(),
            title: TextRule::contains(ADVANTAGES_TITLE),
            column: ".wp-block-column".to_string(),
            column_heading: ".wp-block-column h4".to_string(),
            before: TextRule::Contains(BEFORE_HEADINGS.map(String::from).to_vec()),
            after: TextRule::Contains(AFTER_HEADINGS.map(String::from).to_vec()),
            items: "ul li".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsMarkers {
    pub title_element: String,
    pub title: TextRule,
    pub column: String,
    /// Required inside a column; columns without one are not testimonials.
    pub quote: String,
    pub quote_text: String,
    pub cite: String,
    pub position: String,
    pub company: String,
}

impl Default for TestimonialsMarkers {
    fn default() -> Self {
        Self {
            title_element: "p".to_string(),
            title: TextRule::contains(TESTIMONIALS_TITLE),
            column: ".wp-block-columns .wp-block-column".to_string(),
            quote: "blockquote".to_string(),
            quote_text: "p".to_string(),
            cite: "cite".to_string(),
            position: "cite strong".to_string(),
            company: "cite sub".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMarkers {
    pub container: String,
    pub controls: String,
    pub label: String,
    pub option: String,
    /// Control names that are plugin plumbing, never user-facing fields.
    pub reserved_names: Vec<String>,
}

impl Default for FormMarkers {
    fn default() -> Self {
        Self {
            container: "form.wpcf7-form".to_string(),
            controls: "input.wpcf7-form-control, textarea.wpcf7-form-control, select.wpcf7-form-control"
                .to_string(),
            label: "label".to_string(),
            option: "option".to_string(),
            reserved_names: vec!["_wpcf7".to_string()],
        }
    }
}

impl Markers {
    /// Parses a JSON marker override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(json)?)
    }

    /// All selector markers, for validation and cache warm-up.
    pub fn selectors(&self) -> Vec<&str> {
        vec![
            &self.hero.container,
            &self.hero.title,
            &self.hero.subtitle,
            &self.hero.cta,
            &self.hero.image,
            &self.problem.heading,
            &self.problem.column,
            &self.problem.stat,
            &self.problem.description,
            &self.problem.image,
            &self.advantages.title_element,
            &self.advantages.column,
            &self.advantages.column_heading,
            &self.advantages.items,
            &self.testimonials.title_element,
            &self.testimonials.column,
            &self.testimonials.quote,
            &self.testimonials.quote_text,
            &self.testimonials.cite,
            &self.testimonials.position,
            &self.testimonials.company,
            &self.form.container,
            &self.form.controls,
            &self.form.label,
            &self.form.option,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }

    /// Checks that every selector compiles. Text rules are checked when matchers are built.
    pub fn validate(&self) -> Result<(), ExtractError> {
        for css in self.selectors() {
            compiled::validate(css)?;
        }
        Ok(())
    }
}
