//! CLI Application logic
//!
//! Contains the command-line interface implementation: the transport
//! collaborator that feeds requests into the core pipeline and renders
//! its responses as JSON on stdout.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use tabfeed_core::{response, AssemblerConfig, ErrorClass, Processor};
use tabfeed_model::{ChunkOptions, InputFormat, TableRequest};

/// Exit code for failures the request caused (the HTTP 4xx analog)
const EXIT_CLIENT_ERROR: i32 = 2;
/// Exit code for failures the pipeline caused (the HTTP 5xx analog)
const EXIT_SERVER_ERROR: i32 = 1;

/// Input format argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Delimited text (CSV, TSV, and friends)
    Delimited,
    /// Spreadsheet workbook (xlsx)
    Spreadsheet,
}

impl From<FormatArg> for InputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Delimited => InputFormat::Delimited,
            FormatArg::Spreadsheet => InputFormat::Spreadsheet,
        }
    }
}

#[derive(Parser)]
#[command(name = "tabfeed")]
#[command(author, version, about = "Chunked tabular file processing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a JSON request envelope and print the JSON response
    Process {
        /// Request file (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Run a raw local file through the pipeline
    Inspect {
        /// Input file
        file: PathBuf,

        /// Input format
        #[arg(short, long, value_enum)]
        format: FormatArg,

        /// Chunk index to return (metadata only when omitted)
        #[arg(short, long)]
        chunk: Option<usize>,

        /// Rows per chunk
        #[arg(long)]
        chunk_size: Option<usize>,
    },
}

/// Run the CLI application
///
/// Parses arguments, builds the request, and processes it. The returned
/// code is the process exit code: 0 on success, with failures mapped by
/// error class.
pub fn run_cli() -> Result<i32> {
    let cli = Cli::parse();
    let processor = Processor::new(assembler_config_from_env());

    let request = match cli.command {
        Commands::Process { input } => read_request(input.as_deref())?,
        Commands::Inspect {
            file,
            format,
            chunk,
            chunk_size,
        } => {
            let bytes = fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            debug!(bytes = bytes.len(), "encoding local file");
            TableRequest::new(STANDARD.encode(bytes), format.into())
                .with_options(ChunkOptions { chunk_size, chunk })
        }
    };

    run_request(&processor, &request)
}

/// Process one request, print its JSON response, and pick the exit code.
pub fn run_request(processor: &Processor, request: &TableRequest) -> Result<i32> {
    match processor.run(request) {
        Ok(response) => {
            println!("{}", serde_json::to_string(&response)?);
            Ok(0)
        }
        Err(err) => {
            let response = response::failure(&err, processor.config());
            println!("{}", serde_json::to_string(&response)?);
            Ok(match err.kind().class() {
                ErrorClass::Client => EXIT_CLIENT_ERROR,
                ErrorClass::Server => EXIT_SERVER_ERROR,
            })
        }
    }
}

/// Read a request envelope from a file or stdin.
fn read_request(input: Option<&Path>) -> Result<TableRequest> {
    let json = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read request from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&json).context("invalid request envelope")
}

/// Internal error detail is exposed everywhere except production.
fn assembler_config_from_env() -> AssemblerConfig {
    let production = std::env::var("TABFEED_ENV").is_ok_and(|env| env == "production");
    AssemblerConfig {
        expose_internal_detail: !production,
    }
}
