//! Kitty Allocator CLI
//!
//! The `kitty` command splits a site kitty among sales agents and prints the
//! allocation as indented JSON.
//!
//! ## Usage
//!
//! ```text
//! kitty <INPUT> [--config config.json] [--format json|markdown] [--output result.json]
//! ```
//!
//! Exits with code 1 when the input path is missing, when either document
//! cannot be read or parsed, or when the input fails validation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sha2::{Digest, Sha256};
use tracing::{info, Level};
use uuid::Uuid;

use kitty_core::{
    allocate_discount, render_allocation_md, write_allocation_json, AllocationConfig,
    AllocationRequest, AllocationResult, AllocationSpan,
};

#[derive(Parser)]
#[command(name = "kitty")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split a discount kitty among sales agents", long_about = None)]
struct Cli {
    /// Path to the input JSON document ({ "siteKitty": .., "salesAgents": [..] })
    input: PathBuf,

    /// Path to the allocation config JSON
    #[arg(short, long, env = "KITTY_CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Output format written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Also write the JSON result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    kitty_core::init_tracing(cli.json_logs, level);

    match run(&cli) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Load both documents, allocate, and render the result for stdout.
fn run(cli: &Cli) -> Result<String> {
    let allocation_id = Uuid::new_v4().to_string();
    let _span = AllocationSpan::enter(&allocation_id);

    let (request, input_digest) = load_request(&cli.input)?;
    let (config, config_digest) = load_config(&cli.config)?;
    info!(
        input = ?cli.input,
        config = ?cli.config,
        input_digest = %input_digest,
        config_digest = %config_digest,
        "documents loaded"
    );

    let result = allocate_discount(request.site_kitty, &request.sales_agents, &config)
        .context("Allocation rejected")?;

    if let Some(path) = &cli.output {
        write_allocation_json(path, &result)?;
        info!(output = ?path, "allocation written");
    }

    render(&result, cli.format)
}

fn load_request(path: &Path) -> Result<(AllocationRequest, String)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {:?}", path))?;
    let request = AllocationRequest::from_json_str(&raw)
        .with_context(|| format!("Failed to parse input file: {:?}", path))?;
    Ok((request, sha256_hex(raw.as_bytes())))
}

fn load_config(path: &Path) -> Result<(AllocationConfig, String)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = AllocationConfig::from_json_str(&raw)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok((config, sha256_hex(raw.as_bytes())))
}

fn render(result: &AllocationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(result).context("Failed to serialize allocation")
        }
        OutputFormat::Markdown => Ok(render_allocation_md(result)),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
