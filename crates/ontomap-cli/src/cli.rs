//! CLI argument definitions for the ontology mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ontomap",
    version,
    about = "Reconcile a unit-of-measurement catalog against ontology vocabularies",
    long_about = "Reconcile unit-of-measurement records against formal ontology\n\
                  vocabularies and attach stable external identifiers.\n\n\
                  Consumes ontology elements already decoded from their source\n\
                  syntax; OWL/RDF/TTL parsing belongs to the decoder."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract and merge ontology entities from decoded source elements.
    Extract(ExtractArgs),

    /// Match dataset records against an extracted entity set.
    Match(MatchArgs),

    /// Attach ontology identifiers to the dataset.
    Combine(CombineArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Decoded ontology elements (JSON array).
    #[arg(long, value_name = "PATH")]
    pub elements: PathBuf,

    /// Where to write the extracted entity set (JSON).
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Extracted entity set (JSON).
    #[arg(long, value_name = "PATH")]
    pub entities: PathBuf,

    /// Unit catalog (JSONL, one record per line).
    #[arg(long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Where to write the match report (JSON).
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct CombineArgs {
    /// Unit catalog (JSONL, one record per line).
    #[arg(long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Match report produced by `ontomap match` (JSON).
    #[arg(long, value_name = "PATH")]
    pub matches: PathBuf,

    /// Secondary-vocabulary matches keyed by unit and symbol (JSON).
    #[arg(long, value_name = "PATH")]
    pub secondary: Option<PathBuf>,

    /// uri-to-UCUM-code map (JSON object).
    #[arg(long, value_name = "PATH")]
    pub ucum: Option<PathBuf>,

    /// Where to write the enriched dataset (JSONL).
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
