//! Delimited-text data source.
//!
//! Parsing is csv-crate tokenization with double-quote quoting and `""`
//! escaping; the delimiter is auto-detected from a bounded preview unless
//! the options pin one. Blank lines never become rows. Quote and delimiter
//! problems are critical; ragged rows are only counted.

use tabfeed_model::{Diagnostic, DiagnosticKind, Grid};
use tracing::{debug, warn};

use crate::error::{DataError, Result};
use crate::sources::{ParsedTable, TableSource};

/// Delimiter candidates tried during detection, in preference order.
///
/// The two control characters are the ASCII record and unit separators,
/// used by exporters whose data itself contains commas and tabs.
pub const DELIMITER_CANDIDATES: [u8; 6] = [b',', b'\t', b'|', b';', 0x1e, 0x1f];

/// Number of non-blank lines sampled for delimiter detection
const SNIFF_LINES: usize = 10;

/// Options for delimited-text parsing
#[derive(Debug, Clone)]
pub struct DelimitedOptions {
    /// Field delimiter; `None` selects auto-detection
    pub delimiter: Option<u8>,
    /// Quote character
    pub quote: u8,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Delimited-text data source with delimiter auto-detection
#[derive(Debug, Clone, Default)]
pub struct DelimitedSource {
    options: DelimitedOptions,
}

impl DelimitedSource {
    /// Create a source with auto-detection and default quoting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source with custom options
    pub fn with_options(options: DelimitedOptions) -> Self {
        Self { options }
    }

    /// Tokenize the full text into a grid, collecting ragged-row diagnostics.
    fn read_grid(&self, text: &str, delimiter: u8) -> Result<(Grid, Vec<Diagnostic>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(self.options.quote)
            .double_quote(true)
            .comment(None)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut grid = Grid::new();
        let mut diagnostics = Vec::new();
        let mut expected_fields: Option<usize> = None;

        for record in reader.records() {
            let record = record?;
            let row: Vec<String> = record.iter().map(|field| field.to_string()).collect();

            // Blank lines never become rows, whether the reader surfaces
            // them as empty records or as a single whitespace field.
            if row.is_empty() || (row.len() == 1 && row[0].trim().is_empty()) {
                continue;
            }

            match expected_fields {
                None => expected_fields = Some(row.len()),
                Some(expected) if row.len() != expected => {
                    diagnostics.push(
                        Diagnostic::new(
                            DiagnosticKind::FieldCountMismatch,
                            format!("expected {} fields, found {}", expected, row.len()),
                        )
                        .with_row(grid.len()),
                    );
                }
                Some(_) => {}
            }

            grid.push(row);
        }

        Ok((grid, diagnostics))
    }
}

impl TableSource for DelimitedSource {
    fn parse(&self, bytes: &[u8]) -> Result<ParsedTable> {
        let text = std::str::from_utf8(bytes)?;

        if let Some(line) = unterminated_quote(text, self.options.quote as char) {
            return Err(DataError::Parse(vec![Diagnostic::new(
                DiagnosticKind::UnterminatedQuote,
                "quoted field is never closed",
            )
            .with_row(line)]));
        }

        let delimiter = match self.options.delimiter {
            Some(delimiter) => delimiter,
            None => match detect_delimiter(text, self.options.quote) {
                Some(delimiter) => delimiter,
                // A file without content rows cannot fail detection: it
                // parses to zero rows and becomes an empty-result error
                // downstream instead of a parse failure.
                None if text.lines().all(|line| line.trim().is_empty()) => b',',
                None => {
                    return Err(DataError::Parse(vec![Diagnostic::new(
                        DiagnosticKind::DelimiterAmbiguity,
                        "unable to detect a field delimiter",
                    )]))
                }
            },
        };
        let printable = (delimiter as char).escape_default().to_string();
        debug!(delimiter = %printable, "using field delimiter");

        let (grid, diagnostics) = self.read_grid(text, delimiter)?;
        if !diagnostics.is_empty() {
            warn!(
                count = diagnostics.len(),
                "delimited parsing produced diagnostics"
            );
        }

        Ok(ParsedTable {
            grid,
            merges: Vec::new(),
            diagnostics,
        })
    }
}

/// Pick the candidate whose preview parse yields the most consistent
/// multi-field rows: fewest rows deviating from the first row's field
/// count, then highest average field count. Returns `None` when no
/// candidate produces more than one field per row on average.
fn detect_delimiter(text: &str, quote: u8) -> Option<u8> {
    let preview: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();
    if preview.is_empty() {
        return None;
    }

    let mut best: Option<(u8, usize, f64)> = None;
    for &candidate in &DELIMITER_CANDIDATES {
        let counts: Vec<usize> = preview
            .iter()
            .map(|line| field_count(line, candidate, quote))
            .collect();

        let avg = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        if avg <= 1.0 {
            continue;
        }

        let first = counts[0];
        let deviating = counts.iter().filter(|&&count| count != first).count();

        let better = match best {
            None => true,
            Some((_, best_deviating, best_avg)) => {
                deviating < best_deviating || (deviating == best_deviating && avg > best_avg)
            }
        };
        if better {
            best = Some((candidate, deviating, avg));
        }
    }

    best.map(|(delimiter, _, _)| delimiter)
}

/// Count the fields of a single line under a candidate delimiter.
fn field_count(line: &str, delimiter: u8, quote: u8) -> usize {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quote(quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.len(),
        _ => 1,
    }
}

/// Scan for a quoted field that is still open at end of input.
///
/// Returns the 1-based line the field opened on. The scan is deliberately
/// lenient about where quotes may appear, so a stray quote that unbalances
/// the file is reported the same way.
fn unterminated_quote(text: &str, quote: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut opened_on = 0;
    let mut line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }
        if in_quotes {
            if c == quote {
                if chars.peek() == Some(&quote) {
                    // Escaped quote inside a quoted field
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
        } else if c == quote {
            in_quotes = true;
            opened_on = line;
        }
    }

    in_quotes.then_some(opened_on)
}
