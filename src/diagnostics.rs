// Thu Jan 15 2026 - Alex

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub causes: Vec<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for cause in &self.causes {
            write!(f, "\n  Caused by: {}", cause)?;
        }
        Ok(())
    }
}

/// Collects per-symbol and per-node failures without interrupting the batch.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    error_count: usize,
    max_errors: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            error_count: 0,
            max_errors: 1000,
        }
    }

    pub fn with_max_errors(mut self, max: usize) -> Self {
        self.max_errors = max;
        self
    }

    pub fn report<E: Error + ?Sized>(&mut self, error: &E) {
        self.error_count += 1;
        log::error!("{}", error);

        if self.error_count > self.max_errors {
            return;
        }

        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        self.entries.push(Diagnostic {
            message: error.to_string(),
            causes,
        });
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.error_count += other.error_count;
        let room = self.max_errors.saturating_sub(self.entries.len());
        self.entries.extend(other.entries.into_iter().take(room));
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|d| d.message.contains(needle))
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn summary(&self) -> String {
        let count = self.error_count;
        if count == 0 {
            "No errors reported".to_string()
        } else if count == 1 {
            "1 error reported".to_string()
        } else if count > self.max_errors {
            format!("{} errors reported (truncated at {})", count, self.max_errors)
        } else {
            format!("{} errors reported", count)
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolError;

    #[test]
    fn test_report_and_summary() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(diagnostics.summary(), "No errors reported");

        diagnostics.report(&SymbolError::GrammarMismatch("Broken".to_string()));
        assert!(diagnostics.has_errors());
        assert!(diagnostics.contains("Unhandled definition: Broken"));
        assert_eq!(diagnostics.summary(), "1 error reported");
    }

    #[test]
    fn test_truncation() {
        let mut diagnostics = Diagnostics::new().with_max_errors(2);
        for i in 0..5 {
            diagnostics.report(&SymbolError::GrammarMismatch(format!("S{}", i)));
        }
        assert_eq!(diagnostics.entries().len(), 2);
        assert_eq!(diagnostics.error_count(), 5);
        assert!(diagnostics.summary().contains("truncated at 2"));
    }
}
