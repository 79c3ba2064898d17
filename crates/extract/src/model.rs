// ABOUTME: Typed output records for page sections and the contact form schema.
// ABOUTME: Every record has a stable all-empty default so callers can render partial pages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four named regions of the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSections {
    pub hero: HeroSection,
    pub problem: ProblemSection,
    pub advantages: AdvantagesSection,
    pub testimonials: TestimonialsSection,
}

impl PageSections {
    /// Returns true if no section yielded any content.
    pub fn is_empty(&self) -> bool {
        self.hero.is_empty()
            && self.problem.is_empty()
            && self.advantages.is_empty()
            && self.testimonials.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub image_url: String,
}

impl HeroSection {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.subtitle.is_empty()
            && self.cta_label.is_empty()
            && self.image_url.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSection {
    pub section_title: String,
    pub entries: Vec<ProblemEntry>,
}

impl ProblemSection {
    pub fn is_empty(&self) -> bool {
        self.section_title.is_empty() && self.entries.is_empty()
    }
}

/// One statistic column of the problem statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemEntry {
    pub stat: String,
    pub description: String,
    pub image_url: String,
}

impl ProblemEntry {
    pub fn is_empty(&self) -> bool {
        self.stat.is_empty() && self.description.is_empty() && self.image_url.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvantagesSection {
    pub section_title: String,
    pub before: StateList,
    pub after: StateList,
}

impl Default for AdvantagesSection {
    fn default() -> Self {
        Self {
            section_title: String::new(),
            before: StateList::new(StateLabel::Before),
            after: StateList::new(StateLabel::After),
        }
    }
}

impl AdvantagesSection {
    pub fn is_empty(&self) -> bool {
        self.section_title.is_empty() && self.before.items.is_empty() && self.after.items.is_empty()
    }
}

/// Which side of the before/after comparison a list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateLabel {
    Before,
    After,
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StateLabel::Before => "Before",
            StateLabel::After => "After",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateList {
    pub label: StateLabel,
    pub items: Vec<String>,
}

impl StateList {
    /// Creates an empty list for one side of the comparison.
    pub fn new(label: StateLabel) -> Self {
        Self {
            label,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsSection {
    pub section_title: String,
    pub testimonials: Vec<Testimonial>,
}

impl TestimonialsSection {
    pub fn is_empty(&self) -> bool {
        self.section_title.is_empty() && self.testimonials.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote_text: String,
    pub author_name: String,
    pub author_position: String,
    pub author_company: String,
}

/// The kind of input a form control renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Textarea,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Select => "select",
            FieldKind::Textarea => "textarea",
        };
        write!(f, "{}", s)
    }
}

/// A single control of the contact form.
///
/// `options` is `None` unless the control is a select with at least one
/// option value; in that case the key is omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Combined output of both extraction flows over one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePayload {
    pub sections: PageSections,
    pub form_fields: Vec<FormField>,
}
