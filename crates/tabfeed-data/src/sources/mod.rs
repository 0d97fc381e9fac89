//! Data source implementations.
//!
//! This module contains the parsing backends for the supported input
//! formats, behind the [`TableSource`] capability trait so the pipeline
//! can be exercised without any concrete backend.

pub mod delimited;
pub mod spreadsheet;

pub use delimited::{DelimitedOptions, DelimitedSource, DELIMITER_CANDIDATES};
pub use spreadsheet::SpreadsheetSource;

use tabfeed_model::{Diagnostic, Grid, MergeRegion};

use crate::error::Result;

/// The result of parsing file bytes into the shared grid model
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    /// Raw cell grid, before merge normalization and row filtering
    pub grid: Grid,
    /// Merge regions of the active sheet; empty for delimited text
    pub merges: Vec<MergeRegion>,
    /// Non-critical diagnostics emitted while parsing
    pub diagnostics: Vec<Diagnostic>,
}

/// Trait for backends that parse raw file bytes into a grid
///
/// A conforming implementation returns the grid together with any merge
/// regions and non-critical diagnostics. Critical diagnostics abort with
/// [`crate::DataError::Parse`] instead of producing a grid.
pub trait TableSource {
    /// Parse decoded file bytes
    fn parse(&self, bytes: &[u8]) -> Result<ParsedTable>;
}
