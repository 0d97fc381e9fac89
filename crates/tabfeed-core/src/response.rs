//! Response assembly.
//!
//! Builds the outward-facing shapes from pipeline results. Failure payloads
//! are bounded: at most [`MAX_ERROR_DETAILS`] diagnostics are attached, and
//! internal error chains only appear when the configuration allows it.

use tabfeed_model::{
    ChunkResponse, ErrorResponse, FormatInfo, Grid, MetadataResponse, Row, TableResponse,
};

use crate::error::PipelineError;

/// Maximum number of diagnostics attached to a failure response
pub const MAX_ERROR_DETAILS: usize = 3;

/// Configuration for response assembly
///
/// `expose_internal_detail` gates whether internal error chains are written
/// into failure responses. The transport collaborator decides this from its
/// environment and passes it in; the core never reads ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblerConfig {
    /// Include internal error chains in failure responses
    pub expose_internal_detail: bool,
}

/// Build the metadata response (no chunk requested).
pub fn metadata(
    headers: Row,
    total_rows: usize,
    total_chunks: usize,
    chunk_size: usize,
    diagnostic_count: usize,
    format_specific: FormatInfo,
) -> TableResponse {
    TableResponse::Metadata(MetadataResponse {
        success: true,
        headers,
        total_rows,
        total_chunks,
        chunk_size,
        diagnostic_count,
        format_specific,
    })
}

/// Build a chunk response; `chunkSize` here is the row count of `data`.
pub fn chunk(
    headers: Row,
    data: Grid,
    chunk: usize,
    total_rows: usize,
    total_chunks: usize,
) -> TableResponse {
    let chunk_size = data.len();
    TableResponse::Chunk(ChunkResponse {
        success: true,
        data,
        headers,
        chunk,
        total_chunks,
        total_rows,
        chunk_size,
    })
}

/// Build the failure response for a pipeline error.
pub fn failure(error: &PipelineError, config: &AssemblerConfig) -> TableResponse {
    let details = match error {
        PipelineError::ParseFailed(diagnostics) => Some(
            diagnostics
                .iter()
                .take(MAX_ERROR_DETAILS)
                .cloned()
                .collect(),
        ),
        _ => None,
    };

    let detail = if config.expose_internal_detail {
        error.internal_detail()
    } else {
        None
    };

    TableResponse::Error(ErrorResponse {
        success: false,
        error: error.to_string(),
        details,
        detail,
    })
}
