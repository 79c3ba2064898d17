// ABOUTME: Hero section extractor: title, subtitle, call-to-action label, and hero image.
// ABOUTME: Each field resolves independently; a missing container defaults all four.

use scraper::ElementRef;

use crate::diagnostics::{Diagnostic, Part};
use crate::dom::query;
use crate::extractors::Context;
use crate::model::HeroSection;

/// Extracts the hero block. The first container in document order wins.
pub fn extract(root: ElementRef<'_>, cx: &Context<'_>) -> HeroSection {
    let m = &cx.markers.hero;
    let Some(group) = query::select_first(root, &m.container) else {
        cx.report(Diagnostic::missing_container(Part::Hero, &m.container));
        return HeroSection::default();
    };

    HeroSection {
        title: cx.text(group, &m.title, Part::Hero),
        subtitle: cx.text(group, &m.subtitle, Part::Hero),
        cta_label: cx.text(group, &m.cta, Part::Hero),
        image_url: cx.attr(group, &m.image, "src", Part::Hero),
    }
}
