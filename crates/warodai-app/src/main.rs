use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use warodai_config::Config;
use warodai_parser::{DictionaryParser, ParseReport, WarodaiLoader};

pub mod io;
pub mod profile;

#[cfg(test)]
mod tests;

/// Convert a Warodai text dump into JSON
#[derive(Parser, Debug)]
#[command(name = "warodai", version)]
pub struct Args {
    /// Dictionary source text
    input: PathBuf,

    /// JSON output file, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config profile (defaults to ./warodai.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source encoding label, overrides the profile
    #[arg(long)]
    encoding: Option<String>,

    /// Single-line JSON instead of pretty printing
    #[arg(long)]
    compact: bool,

    /// Emit diagnostics as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout stays a clean JSON document
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: &Args) -> anyhow::Result<ParseReport> {
    let cwd = std::env::current_dir()?;
    let mut config = profile::resolve_config(args.config.as_deref(), &cwd)?;
    apply_cli_overrides(&mut config, args);

    convert(&args.input, args.output.as_deref(), &config)
}

fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(encoding) = &args.encoding {
        config.input.encoding = encoding.clone();
    }
    if args.compact {
        config.output.pretty = false;
    }
}

/// Load, parse and write one dictionary
pub fn convert(input: &Path, output: Option<&Path>, config: &Config) -> anyhow::Result<ParseReport> {
    let parser = DictionaryParser::new(&config.parser).context("Invalid parser configuration")?;

    let text = WarodaiLoader::load_from_file(input, &config.input.encoding)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let report = parser.parse(&text);
    if !report.diagnostics.is_empty() {
        tracing::warn!("{} cards skipped", report.diagnostics.len());
    }

    io::write_output(&report.dictionary, &config.output, output)?;
    Ok(report)
}
