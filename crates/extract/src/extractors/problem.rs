// ABOUTME: Problem-statement extractor: a titled heading followed by a group of stat columns.
// ABOUTME: Drops empty columns and repeated (stat, description, image) blocks, keeping first occurrences.

use std::collections::HashSet;

use scraper::ElementRef;

use crate::diagnostics::{Diagnostic, DiagnosticKind, Part};
use crate::dom::query;
use crate::extractors::Context;
use crate::model::{ProblemEntry, ProblemSection};

/// Extracts the problem statement.
///
/// The heading is located by its exact text; the columns are read from the
/// element immediately following it. The CMS emits the column group twice on
/// some pages, so identical entries are collapsed.
pub fn extract(root: ElementRef<'_>, cx: &Context<'_>) -> ProblemSection {
    let m = &cx.markers.problem;
    let Some(heading) =
        query::find_by_text(root, &m.heading, cx.matchers.problem_title.as_ref())
    else {
        cx.report(Diagnostic::missing_container(Part::Problem, &m.heading));
        return ProblemSection::default();
    };

    let section_title = query::text_of(Some(heading));

    let columns = match query::next_element_sibling(heading) {
        Some(group) => query::select_all(group, &m.column),
        None => {
            cx.report(Diagnostic::missing_element(Part::Problem, "group after heading"));
            Vec::new()
        }
    };

    let mut seen: HashSet<ProblemEntry> = HashSet::new();
    let mut entries = Vec::new();
    for column in columns {
        let entry = ProblemEntry {
            stat: cx.text(column, &m.stat, Part::Problem),
            description: cx.text(column, &m.description, Part::Problem),
            image_url: cx.attr(column, &m.image, "src", Part::Problem),
        };
        if entry.is_empty() {
            continue;
        }
        if seen.contains(&entry) {
            cx.report(Diagnostic::new(
                Part::Problem,
                DiagnosticKind::DuplicateEntry,
                entry.stat.clone(),
            ));
            continue;
        }
        seen.insert(entry.clone());
        entries.push(entry);
    }

    ProblemSection {
        section_title,
        entries,
    }
}
