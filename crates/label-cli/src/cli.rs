//! CLI argument definitions for the care-label tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "care-labels",
    version,
    about = "Parse garment care labels into parts and canonical fiber compositions",
    long_about = "Parse free-text garment care labels into structured parts and fibers.\n\n\
                  Fiber names are normalized, stripped of brand and origin tokens and\n\
                  folded onto canonical spellings seeded from their corpus frequency."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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
    /// Parse a product CSV and write products, parts and fibers.
    Parse(ParseArgs),

    /// Print first-pass fiber name counts, most frequent first.
    Frequencies(FrequencyArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Product CSV with product_id, product_category and care_label columns ("-" for stdin).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Minimum similarity score (0-100) for a fiber name to fold onto a canonical name.
    #[arg(
        long = "threshold",
        default_value_t = 95,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub threshold: u8,

    /// Minimum first-pass count for a fiber name to seed the canonical registry.
    #[arg(long = "min-occurrences", default_value_t = 100)]
    pub min_occurrences: u64,

    #[command(flatten)]
    pub vocabulary: VocabularyArgs,

    /// Output directory for generated files (default: ./output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Parse and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of canonical fiber names listed in the summary.
    #[arg(long = "top", default_value_t = 10)]
    pub top: usize,
}

#[derive(Args)]
pub struct FrequencyArgs {
    /// Product CSV with product_id, product_category and care_label columns ("-" for stdin).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    #[command(flatten)]
    pub vocabulary: VocabularyArgs,

    /// Only list names counted at least this many times.
    #[arg(long = "min", default_value_t = 1)]
    pub min: u64,

    /// Maximum number of names to list.
    #[arg(long = "limit")]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct VocabularyArgs {
    /// JSON metadata vocabulary replacing the built-in brand/origin/dye/recycled tokens.
    #[arg(long = "vocabulary", value_name = "JSON")]
    pub vocabulary: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
