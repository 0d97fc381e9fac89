//! Request envelope and chunking options.
//!
//! The transport collaborator hands the pipeline a [`TableRequest`]: the
//! base64-encoded file bytes, the declared input format, and optional
//! chunking options. Field names follow the wire contract (camelCase).

use serde::{Deserialize, Serialize};

/// Default number of body rows per chunk when the request does not set one
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Declared format of the encoded file bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Delimited text (CSV, TSV, and friends)
    Delimited,
    /// Spreadsheet workbook (xlsx)
    Spreadsheet,
}

/// Chunking options supplied with a request
///
/// When `chunk` is present the response is a row slice; when absent the
/// response is metadata only. A `chunk_size` of zero behaves as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkOptions {
    /// Rows per chunk; defaults to [`DEFAULT_CHUNK_SIZE`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<usize>,

    /// Zero-based chunk index to return; absence selects metadata mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk: Option<usize>,
}

impl ChunkOptions {
    /// Options selecting a specific chunk
    pub fn chunk(index: usize) -> Self {
        Self {
            chunk: Some(index),
            ..Default::default()
        }
    }

    /// The chunk size to use, falling back to the default for unset or zero
    pub fn effective_chunk_size(&self) -> usize {
        match self.chunk_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_CHUNK_SIZE,
        }
    }
}

/// A complete processing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequest {
    /// Base64-encoded file bytes
    pub file_data: String,

    /// Declared input format
    pub format: InputFormat,

    /// Chunking options; all fields optional
    #[serde(default)]
    pub options: ChunkOptions,
}

impl TableRequest {
    /// Create a request with default options
    pub fn new(file_data: impl Into<String>, format: InputFormat) -> Self {
        Self {
            file_data: file_data.into(),
            format,
            options: ChunkOptions::default(),
        }
    }

    /// Set the chunking options
    pub fn with_options(mut self, options: ChunkOptions) -> Self {
        self.options = options;
        self
    }
}
