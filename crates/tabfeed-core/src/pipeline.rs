//! The parse-normalize-paginate pipeline.
//!
//! One [`Processor`] handles any number of requests; every request is
//! processed independently, holds the whole decoded file and grid in
//! memory for its duration, and shares no state with other requests.

use tracing::{debug, error};

use tabfeed_data::{decode_file_data, source_for, ParsedTable, TableSource};
use tabfeed_model::{ChunkOptions, FormatInfo, InputFormat, TableRequest, TableResponse};

use crate::error::PipelineError;
use crate::normalize::apply_merges;
use crate::paginate::{chunk_bounds, total_chunks};
use crate::response::{self, AssemblerConfig};
use crate::table::{drop_blank_rows, split_header};

/// Stateless request processor
#[derive(Debug, Clone, Copy, Default)]
pub struct Processor {
    config: AssemblerConfig,
}

impl Processor {
    /// Create a processor with the given assembly configuration
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// The assembly configuration this processor uses
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Process a request to completion, rendering failures as the error
    /// shape. This is the all-or-nothing outer boundary: no partial
    /// response survives an error.
    pub fn process(&self, request: &TableRequest) -> TableResponse {
        match self.run(request) {
            Ok(response) => response,
            Err(err) => {
                error!(kind = ?err.kind(), error = %err, "request failed");
                response::failure(&err, &self.config)
            }
        }
    }

    /// Run a request with the backend implied by its declared format.
    pub fn run(&self, request: &TableRequest) -> Result<TableResponse, PipelineError> {
        if request.file_data.trim().is_empty() {
            return Err(PipelineError::MissingInput);
        }

        let bytes = decode_file_data(&request.file_data)?;
        debug!(bytes = bytes.len(), format = ?request.format, "decoded file data");

        let source = source_for(request.format);
        self.run_with_source(&bytes, source.as_ref(), request.format, &request.options)
    }

    /// Run decoded bytes through an explicit parsing backend.
    ///
    /// The normalization and pagination stages only see the backend's
    /// [`ParsedTable`], so any [`TableSource`] implementation drops in.
    pub fn run_with_source(
        &self,
        bytes: &[u8],
        source: &dyn TableSource,
        format: InputFormat,
        options: &ChunkOptions,
    ) -> Result<TableResponse, PipelineError> {
        let parsed = source.parse(bytes)?;
        self.assemble(parsed, format, bytes.len(), options)
    }

    fn assemble(
        &self,
        parsed: ParsedTable,
        format: InputFormat,
        file_size: usize,
        options: &ChunkOptions,
    ) -> Result<TableResponse, PipelineError> {
        let ParsedTable {
            mut grid,
            merges,
            diagnostics,
        } = parsed;

        apply_merges(&mut grid, &merges);
        let grid = drop_blank_rows(grid);
        let (headers, body) = split_header(grid).ok_or(PipelineError::EmptyResult)?;

        let chunk_size = options.effective_chunk_size();
        let total_rows = body.len();
        let chunks = total_chunks(total_rows, chunk_size);
        debug!(columns = headers.len(), rows = total_rows, "processed table");

        match options.chunk {
            Some(index) => {
                let bounds = chunk_bounds(total_rows, chunk_size, index);
                debug!(
                    chunk = index,
                    start = bounds.start,
                    end = bounds.end,
                    "returning chunk"
                );
                let data = body[bounds.start..bounds.end].to_vec();
                Ok(response::chunk(headers, data, index, total_rows, chunks))
            }
            None => {
                let format_specific = match format {
                    InputFormat::Spreadsheet => FormatInfo::spreadsheet(merges.len(), file_size),
                    InputFormat::Delimited => FormatInfo::delimited(),
                };
                Ok(response::metadata(
                    headers,
                    total_rows,
                    chunks,
                    chunk_size,
                    diagnostics.len(),
                    format_specific,
                ))
            }
        }
    }
}
