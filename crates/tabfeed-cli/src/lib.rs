//! tabfeed CLI - Command-line interface library
//!
//! This library provides the CLI functionality for tabfeed:
//! - Process: run a JSON request envelope through the pipeline
//! - Inspect: run a raw local file through the pipeline
//!
//! # Library Usage
//!
//! ```ignore
//! use tabfeed_cli::run_cli;
//!
//! // Run the full CLI
//! let exit_code = run_cli()?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Metadata for a local CSV file
//! tabfeed inspect data.csv --format delimited
//!
//! # Third chunk of an xlsx file, 500 rows per chunk
//! tabfeed inspect report.xlsx --format spreadsheet --chunk 2 --chunk-size 500
//!
//! # Process a request envelope from stdin
//! tabfeed process < request.json
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{run_cli, run_request, FormatArg};
