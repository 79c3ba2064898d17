// ABOUTME: Before/after comparison extractor: a section title and two bulleted columns.
// ABOUTME: Columns are found through their sub-headings; a missing column yields an empty list.

use scraper::ElementRef;

use crate::diagnostics::{Diagnostic, Part};
use crate::dom::query;
use crate::extractors::Context;
use crate::matcher::TextMatcher;
use crate::model::{AdvantagesSection, StateLabel, StateList};

pub fn extract(root: ElementRef<'_>, cx: &Context<'_>) -> AdvantagesSection {
    let m = &cx.markers.advantages;

    let title = query::find_by_text(root, &m.title_element, cx.matchers.advantages_title.as_ref());
    if title.is_none() {
        cx.report(Diagnostic::missing_element(Part::Advantages, "section title"));
    }

    let before_column = find_column(root, cx, cx.matchers.before_heading.as_ref(), None);
    let after_column = find_column(
        root,
        cx,
        cx.matchers.after_heading.as_ref(),
        before_column,
    );

    AdvantagesSection {
        section_title: query::text_of(title),
        before: state_list(before_column, cx, StateLabel::Before),
        after: state_list(after_column, cx, StateLabel::After),
    }
}

/// Finds the column enclosing the first sub-heading accepted by `matcher`.
///
/// A column already claimed by the other side is skipped, so a heading such
/// as "Before and After" cannot feed both lists.
fn find_column<'a>(
    root: ElementRef<'a>,
    cx: &Context<'_>,
    matcher: &dyn TextMatcher,
    exclude: Option<ElementRef<'a>>,
) -> Option<ElementRef<'a>> {
    let m = &cx.markers.advantages;
    query::select_all(root, &m.column_heading)
        .into_iter()
        .filter(|heading| matcher.matches(query::text_content(*heading).trim()))
        .filter_map(|heading| query::closest(heading, &m.column))
        .find(|column| exclude.map_or(true, |other| other.id() != column.id()))
}

fn state_list(column: Option<ElementRef<'_>>, cx: &Context<'_>, label: StateLabel) -> StateList {
    let Some(column) = column else {
        cx.report(Diagnostic::missing_element(
            Part::Advantages,
            format!("{label} column"),
        ));
        return StateList::new(label);
    };

    let items = query::select_all(column, &cx.markers.advantages.items)
        .into_iter()
        .map(|li| query::text_of(Some(li)))
        .filter(|item| !item.is_empty())
        .collect();

    StateList { label, items }
}
