//! Error types for the data sources.

use thiserror::Error;

use tabfeed_model::Diagnostic;

/// Result type for data source operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while decoding or parsing file data
#[derive(Debug, Error)]
pub enum DataError {
    /// Transport decoding failed
    #[error("failed to decode file data: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Delimited input is not valid UTF-8
    #[error("file data is not valid UTF-8 text: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The bytes could not be opened as a workbook
    #[error("failed to open workbook: {0}")]
    WorkbookOpen(String),

    /// The workbook contains no sheets
    #[error("workbook has no sheets")]
    NoSheets,

    /// Calamine failed while reading the workbook
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// The csv reader failed
    #[error("csv reader error: {0}")]
    Csv(String),

    /// Parsing aborted on critical diagnostics
    #[error("parsing failed with {} critical diagnostic(s)", .0.len())]
    Parse(Vec<Diagnostic>),
}

impl From<calamine::XlsxError> for DataError {
    fn from(err: calamine::XlsxError) -> Self {
        DataError::Spreadsheet(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}
