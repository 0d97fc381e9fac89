//! Pipeline error taxonomy.
//!
//! Four kinds exist: missing input, structural parse failure, empty
//! result, and internal (anything unexpected from decode or a parsing
//! backend). The transport collaborator maps each kind's class to its own
//! status vocabulary; the core never picks a status itself.

use thiserror::Error;

use tabfeed_data::DataError;
use tabfeed_model::Diagnostic;

/// What went wrong, as the transport collaborator sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No file bytes were supplied
    MissingInput,
    /// Critical structural diagnostics aborted parsing
    ParseFailed,
    /// Well-formed input with zero usable rows after filtering
    EmptyResult,
    /// Unexpected failure during decode/parse/normalize/paginate
    Internal,
}

/// Coarse error class for transport status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request was at fault
    Client,
    /// The pipeline was at fault
    Server,
}

impl ErrorKind {
    /// The class a transport should report this kind as
    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::MissingInput | ErrorKind::ParseFailed | ErrorKind::EmptyResult => {
                ErrorClass::Client
            }
            ErrorKind::Internal => ErrorClass::Server,
        }
    }
}

/// A failed request
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no file data provided")]
    MissingInput,

    #[error("parsing failed")]
    ParseFailed(Vec<Diagnostic>),

    #[error("file appears to be empty or invalid")]
    EmptyResult,

    #[error(transparent)]
    Internal(DataError),
}

impl PipelineError {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::MissingInput => ErrorKind::MissingInput,
            PipelineError::ParseFailed(_) => ErrorKind::ParseFailed,
            PipelineError::EmptyResult => ErrorKind::EmptyResult,
            PipelineError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The underlying error chain for internal failures
    pub fn internal_detail(&self) -> Option<String> {
        match self {
            PipelineError::Internal(err) => {
                let mut detail = err.to_string();
                let mut source = std::error::Error::source(err);
                while let Some(cause) = source {
                    detail.push_str(": ");
                    detail.push_str(&cause.to_string());
                    source = cause.source();
                }
                Some(detail)
            }
            _ => None,
        }
    }
}

impl From<DataError> for PipelineError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::Parse(diagnostics) => PipelineError::ParseFailed(diagnostics),
            other => PipelineError::Internal(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabfeed_model::{Diagnostic, DiagnosticKind};

    #[test]
    fn test_kind_classes() {
        assert_eq!(ErrorKind::MissingInput.class(), ErrorClass::Client);
        assert_eq!(ErrorKind::ParseFailed.class(), ErrorClass::Client);
        assert_eq!(ErrorKind::EmptyResult.class(), ErrorClass::Client);
        assert_eq!(ErrorKind::Internal.class(), ErrorClass::Server);
    }

    #[test]
    fn test_critical_diagnostics_become_parse_failed() {
        let err: PipelineError = DataError::Parse(vec![Diagnostic::new(
            DiagnosticKind::DelimiterAmbiguity,
            "unable to detect a field delimiter",
        )])
        .into();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
    }

    #[test]
    fn test_other_data_errors_are_internal() {
        let err: PipelineError = DataError::WorkbookOpen("bad zip".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.internal_detail().unwrap().contains("bad zip"));
    }
}
