// ABOUTME: Contact form schema extractor for Contact Form 7 markup.
// ABOUTME: Maps each named control to a FormField with kind, requiredness, label, and select options.

//! Form schema extraction.
//!
//! Key behaviors:
//! - Only controls inside the first form container are considered.
//! - Controls without a name, with a reserved name, or repeating an earlier
//!   name are skipped.
//! - Kind precedence: select tag, then `type="email"`, then textarea tag, else text.
//! - `required` is true only for `aria-required="true"`, compared exactly.

use std::collections::HashSet;

use scraper::ElementRef;

use crate::diagnostics::{Diagnostic, DiagnosticKind, Part};
use crate::dom::query;
use crate::extractors::Context;
use crate::model::{FieldKind, FormField};

pub fn extract(root: ElementRef<'_>, cx: &Context<'_>) -> Vec<FormField> {
    let m = &cx.markers.form;
    let Some(form) = query::select_first(root, &m.container) else {
        cx.report(Diagnostic::missing_container(Part::Form, &m.container));
        return Vec::new();
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut fields = Vec::new();
    for control in query::select_all(form, &m.controls) {
        let Some(name) = control.value().attr("name").filter(|n| !n.is_empty()) else {
            continue;
        };
        if m.reserved_names.iter().any(|reserved| reserved == name) {
            continue;
        }
        if !seen.insert(name) {
            cx.report(Diagnostic::new(Part::Form, DiagnosticKind::DuplicateEntry, name));
            continue;
        }
        fields.push(field(control, name, cx));
    }
    fields
}

fn field(control: ElementRef<'_>, name: &str, cx: &Context<'_>) -> FormField {
    let m = &cx.markers.form;
    let kind = field_kind(control);

    let label = match query::closest(control, &m.label) {
        Some(label) => label_text(label),
        None => name.to_string(),
    };

    let required = control.value().attr("aria-required") == Some("true");

    let options = match kind {
        FieldKind::Select => {
            let values: Vec<String> = query::select_all(control, &m.option)
                .into_iter()
                .filter_map(|option| option.value().attr("value").map(str::to_string))
                .collect();
            if values.is_empty() {
                None
            } else {
                Some(values)
            }
        }
        _ => None,
    };

    FormField {
        name: name.to_string(),
        kind,
        required,
        label,
        options,
    }
}

/// Determines the control kind by fixed precedence.
pub fn field_kind(control: ElementRef<'_>) -> FieldKind {
    let tag = query::tag_name(control);
    if tag == "select" {
        FieldKind::Select
    } else if control.value().attr("type") == Some("email") {
        FieldKind::Email
    } else if tag == "textarea" {
        FieldKind::Textarea
    } else {
        FieldKind::Text
    }
}

/// Full text content of the label, including any option or textarea text
/// nested inside it, with newlines removed and surrounding whitespace trimmed.
fn label_text(label: ElementRef<'_>) -> String {
    normalize_label(&query::text_content(label))
}

/// Drops line feeds only; carriage returns and other whitespace stay until the trim.
fn normalize_label(text: &str) -> String {
    text.replace('\n', "").trim().to_string()
}
