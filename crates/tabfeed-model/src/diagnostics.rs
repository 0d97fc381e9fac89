//! Parser diagnostics
//!
//! This module provides the structures parsing backends use to report
//! row-level anomalies. Critical diagnostics abort a request; non-critical
//! ones are counted and reported in the metadata response.

use serde::{Deserialize, Serialize};

/// A diagnostic reported while parsing a tabular file
///
/// # Example
///
/// ```
/// use tabfeed_model::diagnostics::{Diagnostic, DiagnosticKind};
///
/// let diag = Diagnostic::new(
///     DiagnosticKind::FieldCountMismatch,
///     "expected 3 fields, found 2",
/// )
/// .with_row(7);
///
/// assert!(!diag.is_critical());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What kind of anomaly was found
    pub kind: DiagnosticKind,

    /// The diagnostic message
    pub message: String,

    /// Row (or source line) the anomaly was found on, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
}

/// Kind of parser diagnostic
///
/// Delimiter and quote problems make the parsed grid structurally
/// untrustworthy, so they are critical; a field-count mismatch only means a
/// ragged row, which downstream code tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The field delimiter could not be determined
    DelimiterAmbiguity,
    /// A quoted field was never closed
    UnterminatedQuote,
    /// A row's field count differs from the first row's
    FieldCountMismatch,
}

impl DiagnosticKind {
    /// Whether diagnostics of this kind abort parsing
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::DelimiterAmbiguity | DiagnosticKind::UnterminatedQuote
        )
    }
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            row: None,
        }
    }

    /// Set the row the diagnostic refers to
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Whether this diagnostic aborts parsing
    pub fn is_critical(&self) -> bool {
        self.kind.is_critical()
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::DelimiterAmbiguity => write!(f, "delimiter-ambiguity"),
            DiagnosticKind::UnterminatedQuote => write!(f, "unterminated-quote"),
            DiagnosticKind::FieldCountMismatch => write!(f, "field-count-mismatch"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(row) = self.row {
            write!(f, " (row {})", row)?;
        }
        Ok(())
    }
}
