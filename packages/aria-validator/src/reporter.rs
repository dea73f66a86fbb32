//! Reporters
//!
//! Diagnostic sinks injected into [`AttributeValidator`](crate::schema::AttributeValidator).

use crate::diagnostic::Diagnostic;

/// Receives one call per unrecognized attribute, in input order
pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl<F> Reporter for F
where
    F: FnMut(&Diagnostic),
{
    fn report(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Keeps every reported diagnostic for later inspection
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Reported attribute names, in report order
    pub fn names(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

/// Emits each diagnostic as a `tracing` warning
#[derive(Debug, Default, Clone)]
pub struct TracingReporter {
    context: Option<String>,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a label (file name, element tag) to every emitted event
    pub fn with_context(context: impl Into<String>) -> Self {
        TracingReporter {
            context: Some(context.into()),
        }
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: &Diagnostic) {
        match &self.context {
            Some(context) => tracing::warn!(
                context = %context,
                name = %diagnostic.name,
                kind = ?diagnostic.kind,
                "{}",
                diagnostic
            ),
            None => tracing::warn!(
                name = %diagnostic.name,
                kind = ?diagnostic.kind,
                "{}",
                diagnostic
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_reporter_keeps_order() {
        let mut reporter = CollectingReporter::new();
        reporter.report(&Diagnostic::unknown("aria-a"));
        reporter.report(&Diagnostic::unknown("aria-b"));
        assert_eq!(reporter.names(), vec!["aria-a", "aria-b"]);
        reporter.clear();
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut reporter = |d: &Diagnostic| seen.push(d.name.clone());
            reporter.report(&Diagnostic::unknown("aria-x"));
        }
        assert_eq!(seen, vec!["aria-x".to_string()]);
    }
}
