//! tabfeed-model - Shared data model for tabular file processing
//!
//! This crate provides the types shared by the tabfeed parsing backends and
//! the processing pipeline: the rectangular cell grid both input formats
//! converge on, spreadsheet merge regions, chunk request options, parser
//! diagnostics, and the outward-facing response shapes.

pub mod diagnostics;
pub mod grid;
pub mod merge;
pub mod request;
pub mod response;

// Re-export main types
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use grid::{is_blank_row, Grid, Row};
pub use merge::MergeRegion;
pub use request::{ChunkOptions, InputFormat, TableRequest, DEFAULT_CHUNK_SIZE};
pub use response::{
    ChunkResponse, ErrorResponse, FormatInfo, MetadataResponse, TableResponse,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
