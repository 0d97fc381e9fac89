//! Outward-facing response shapes.
//!
//! Three shapes exist: metadata (no chunk requested), chunk (a row slice),
//! and error. Field names follow the wire contract (camelCase). Note the
//! two meanings of `chunkSize`: in metadata mode it is the configured rows
//! per chunk; in chunk mode it is the number of rows actually returned.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::grid::{Grid, Row};

/// Format-dependent extras carried by the metadata response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatInfo {
    /// Number of merge regions found (spreadsheet only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_cells: Option<usize>,

    /// Decoded file size in bytes (spreadsheet only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<usize>,

    /// Text encoding of the decoded file (delimited only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl FormatInfo {
    /// Extras for the spreadsheet path
    pub fn spreadsheet(merged_cells: usize, file_size: usize) -> Self {
        Self {
            merged_cells: Some(merged_cells),
            file_size: Some(file_size),
            encoding: None,
        }
    }

    /// Extras for the delimited-text path
    pub fn delimited() -> Self {
        Self {
            merged_cells: None,
            file_size: None,
            encoding: Some("utf8".to_string()),
        }
    }
}

/// Summary metadata for a parsed file, returned when no chunk is requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResponse {
    pub success: bool,
    /// Column labels from the header row
    pub headers: Row,
    /// Number of body rows
    pub total_rows: usize,
    /// Number of chunks the body splits into
    pub total_chunks: usize,
    /// Configured rows per chunk
    pub chunk_size: usize,
    /// Number of non-critical parser diagnostics
    pub diagnostic_count: usize,
    /// Format-dependent extras
    pub format_specific: FormatInfo,
}

/// One chunk of body rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkResponse {
    pub success: bool,
    /// The requested row slice
    pub data: Grid,
    /// Column labels from the header row
    pub headers: Row,
    /// The zero-based chunk index that was requested
    pub chunk: usize,
    /// Number of chunks the body splits into
    pub total_chunks: usize,
    /// Number of body rows
    pub total_rows: usize,
    /// Number of rows actually returned in `data`
    pub chunk_size: usize,
}

/// A typed failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    /// Human-readable error message
    pub error: String,

    /// Representative parser diagnostics, bounded to a few entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Diagnostic>>,

    /// Internal error chain, present only outside production
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Any response the pipeline can produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableResponse {
    Chunk(ChunkResponse),
    Metadata(MetadataResponse),
    Error(ErrorResponse),
}

impl TableResponse {
    /// Whether this is a success response
    pub fn is_success(&self) -> bool {
        !matches!(self, TableResponse::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_serializes_camel_case() {
        let response = MetadataResponse {
            success: true,
            headers: vec!["a".to_string(), "b".to_string()],
            total_rows: 2,
            total_chunks: 1,
            chunk_size: 1000,
            diagnostic_count: 0,
            format_specific: FormatInfo::delimited(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["totalRows"], 2);
        assert_eq!(json["chunkSize"], 1000);
        assert_eq!(json["formatSpecific"]["encoding"], "utf8");
        // Spreadsheet-only extras are absent, not null
        assert!(json["formatSpecific"].get("mergedCells").is_none());
    }

    #[test]
    fn test_chunk_size_means_rows_returned_in_chunk_mode() {
        let response = ChunkResponse {
            success: true,
            data: vec![vec!["1".to_string()]],
            headers: vec!["a".to_string()],
            chunk: 2,
            total_chunks: 3,
            total_rows: 2001,
            chunk_size: 1,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["chunk"], 2);
        assert_eq!(json["chunkSize"], 1);
        assert_eq!(json["data"][0][0], "1");
    }

    #[test]
    fn test_error_omits_empty_optionals() {
        let response = ErrorResponse {
            success: false,
            error: "no file data provided".to_string(),
            details: None,
            detail: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
        assert!(!json.contains("detail"));
    }

    #[test]
    fn test_untagged_roundtrip() {
        let response = TableResponse::Error(ErrorResponse {
            success: false,
            error: "parsing failed".to_string(),
            details: None,
            detail: None,
        });

        let json = serde_json::to_string(&response).unwrap();
        let restored: TableResponse = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_success());
        assert_eq!(restored, response);
    }
}
