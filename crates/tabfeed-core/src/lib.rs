//! tabfeed-core - The parse-normalize-paginate pipeline
//!
//! Core library for tabfeed: takes a [`tabfeed_model::TableRequest`]
//! (base64 file bytes, declared format, chunking options), decodes and
//! parses it through a `tabfeed-data` backend, normalizes spreadsheet
//! merge regions into a flat grid, splits off the header row, and answers
//! with either summary metadata or one chunk of body rows.
//!
//! # Example
//!
//! ```
//! use tabfeed_core::{AssemblerConfig, Processor};
//! use tabfeed_model::{InputFormat, TableRequest};
//!
//! // "a,b\n1,2\n3,4" base64-encoded
//! let request = TableRequest::new("YSxiCjEsMgozLDQ=", InputFormat::Delimited);
//! let response = Processor::new(AssemblerConfig::default()).process(&request);
//! assert!(response.is_success());
//! ```

pub mod error;
pub mod normalize;
pub mod paginate;
pub mod pipeline;
pub mod response;
pub mod table;

// Re-export main types and functions
pub use error::{ErrorClass, ErrorKind, PipelineError};
pub use pipeline::Processor;
pub use response::{AssemblerConfig, MAX_ERROR_DETAILS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
