//! # tabfeed-data
//!
//! Data sources for tabfeed - decode transported file bytes and parse them
//! into the shared grid model.
//!
//! ## Features
//!
//! - **Transport decoding**: base64 file blobs to raw bytes
//! - **Delimited text**: csv-crate tokenization with delimiter
//!   auto-detection and row-level diagnostics
//! - **Spreadsheets**: first-sheet grids plus merge regions via `calamine`
//!
//! ## Example
//!
//! ```rust,ignore
//! use tabfeed_data::{decode_file_data, DelimitedSource, TableSource};
//!
//! let bytes = decode_file_data(&encoded)?;
//! let table = DelimitedSource::new().parse(&bytes)?;
//! println!("{} raw rows", table.grid.len());
//! ```

pub mod decode;
pub mod error;
pub mod sources;

// Re-exports
pub use decode::decode_file_data;
pub use error::{DataError, Result};
pub use sources::{
    DelimitedOptions, DelimitedSource, ParsedTable, SpreadsheetSource, TableSource,
};

use tabfeed_model::InputFormat;

/// Construct the parsing backend for a declared input format
pub fn source_for(format: InputFormat) -> Box<dyn TableSource> {
    match format {
        InputFormat::Delimited => Box::new(DelimitedSource::new()),
        InputFormat::Spreadsheet => Box::new(SpreadsheetSource::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_covers_both_formats() {
        // Only checks construction; parsing is covered by the source tests
        let _ = source_for(InputFormat::Delimited);
        let _ = source_for(InputFormat::Spreadsheet);
    }
}
