// ABOUTME: Structured diagnostics for recoverable extraction misses, delivered through an injected Reporter.
// ABOUTME: TracingReporter logs via tracing; CollectingReporter records events for inspection.

//! Diagnostics.
//!
//! Extraction never fails. When an expected element is missing, the extractor
//! substitutes a default and emits a `Diagnostic` to its `Reporter`. Reporters
//! observe; they cannot change what the extractor returns.

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// The region or flow a diagnostic concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Hero,
    Problem,
    Advantages,
    Testimonials,
    Form,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Part::Hero => "hero",
            Part::Problem => "problem",
            Part::Advantages => "advantages",
            Part::Testimonials => "testimonials",
            Part::Form => "form",
        };
        write!(f, "{}", s)
    }
}

/// What went missing or was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The region's container, heading, or title was not found; the whole part defaulted.
    MissingContainer,
    /// A sub-element was not found; one field or list defaulted.
    MissingElement,
    /// A block repeated an earlier one and was dropped.
    DuplicateEntry,
    /// A candidate block lacked a required element and was dropped.
    DroppedCandidate,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::MissingContainer => "missing container",
            DiagnosticKind::MissingElement => "missing element",
            DiagnosticKind::DuplicateEntry => "duplicate entry",
            DiagnosticKind::DroppedCandidate => "dropped candidate",
        };
        write!(f, "{}", s)
    }
}

/// A single recoverable condition met during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub part: Part,
    pub kind: DiagnosticKind,
    /// The selector or value involved.
    pub detail: String,
}

impl Diagnostic {
    pub fn new(part: Part, kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            part,
            kind,
            detail: detail.into(),
        }
    }

    pub fn missing_container(part: Part, detail: impl Into<String>) -> Self {
        Self::new(part, DiagnosticKind::MissingContainer, detail)
    }

    pub fn missing_element(part: Part, detail: impl Into<String>) -> Self {
        Self::new(part, DiagnosticKind::MissingElement, detail)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.part, self.kind, self.detail)
    }
}

/// Receives diagnostics from an extractor.
pub trait Reporter: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Logs diagnostics through `tracing`.
///
/// A missing form container is a `warn!`, since the contact page renders
/// nothing without it; everything else is `debug!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let part = diagnostic.part.to_string();
        let kind = diagnostic.kind.to_string();
        match (diagnostic.part, diagnostic.kind) {
            (Part::Form, DiagnosticKind::MissingContainer) => {
                tracing::warn!(part = %part, kind = %kind, detail = %diagnostic.detail, "form container not found");
            }
            _ => {
                tracing::debug!(part = %part, kind = %kind, detail = %diagnostic.detail, "extraction miss");
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Records diagnostics in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns true if a diagnostic of `kind` was recorded for `part`.
    pub fn contains(&self, part: Part, kind: DiagnosticKind) -> bool {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|d| d.part == part && d.kind == kind)
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_reporter_records_in_order() {
        let reporter = CollectingReporter::new();
        reporter.report(Diagnostic::missing_container(Part::Hero, ".hero"));
        reporter.report(Diagnostic::missing_element(Part::Hero, "h2"));

        let events = reporter.diagnostics();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, DiagnosticKind::MissingContainer);
        assert!(reporter.contains(Part::Hero, DiagnosticKind::MissingElement));
        assert!(!reporter.contains(Part::Form, DiagnosticKind::MissingElement));

        assert_eq!(reporter.take().len(), 2);
        assert!(reporter.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::missing_container(Part::Form, "form.wpcf7-form");
        assert_eq!(d.to_string(), "form: missing container: form.wpcf7-form");
    }

    #[test]
    fn test_tracing_and_null_reporters_accept_events() {
        TracingReporter.report(Diagnostic::missing_container(Part::Form, "form"));
        NullReporter.report(Diagnostic::missing_element(Part::Problem, "p"));
    }
}
