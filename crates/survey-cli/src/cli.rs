//! CLI argument definitions for the survey template builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use survey_report::{DEFAULT_BLANK_ROWS, TemplateFormat};
use survey_standards::BusinessType;

#[derive(Parser)]
#[command(
    name = "survey-builder",
    version,
    about = "Survey column builder - turn a question bank into a survey template",
    long_about = "Build a survey column template from a question bank.\n\n\
                  Selected questions are grouped by topic (inferred by fuzzy matching\n\
                  against the bank when no group is given), repeated as requested and\n\
                  written as a wide CSV template plus a one-row-per-question list."
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
    /// Generate a survey template from a selection file.
    Generate(GenerateArgs),

    /// List the collections of a question bank.
    Catalog(CatalogArgs),

    /// Show which group each text would be assigned to.
    Classify(ClassifyArgs),
}

/// Where to read the question bank from.
///
/// Falls back to the selection file's `business_type`, then to the
/// `SURVEY_CATALOG_DIR` environment variable.
#[derive(Args, Clone)]
pub struct CatalogSourceArgs {
    /// Directory of CSV files, one per question collection.
    #[arg(long = "catalog-dir", value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Use the built-in question bank for a business type.
    #[arg(long = "business-type", value_enum, conflicts_with = "catalog_dir")]
    pub business_type: Option<BusinessTypeArg>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// TOML file listing the selected questions, products and details.
    #[arg(value_name = "SELECTION")]
    pub selection: PathBuf,

    #[command(flatten)]
    pub source: CatalogSourceArgs,

    /// Output directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Which template files to write.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Minimum match score (0-100) for inferring a question's group.
    #[arg(long = "threshold", value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Number of blank data rows below the wide template headers.
    #[arg(long = "blank-rows", value_name = "N", default_value_t = DEFAULT_BLANK_ROWS)]
    pub blank_rows: usize,

    /// Build and summarize the template without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub source: CatalogSourceArgs,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Question texts to classify.
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub source: CatalogSourceArgs,

    /// Minimum match score (0-100) for a group to be assigned.
    #[arg(long = "threshold", value_name = "SCORE")]
    pub threshold: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Wide,
    Tall,
    Both,
}

impl OutputFormatArg {
    pub fn formats(self) -> Vec<TemplateFormat> {
        match self {
            Self::Wide => vec![TemplateFormat::Wide],
            Self::Tall => vec![TemplateFormat::Tall],
            Self::Both => vec![TemplateFormat::Wide, TemplateFormat::Tall],
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BusinessTypeArg {
    Retail,
    Manufacturing,
    Services,
}

impl From<BusinessTypeArg> for BusinessType {
    fn from(value: BusinessTypeArg) -> Self {
        match value {
            BusinessTypeArg::Retail => Self::Retail,
            BusinessTypeArg::Manufacturing => Self::Manufacturing,
            BusinessTypeArg::Services => Self::Services,
        }
    }
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
