//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mixcheck - Check how dangerous it is to combine psychoactive substances.
#[derive(Debug, Parser)]
#[command(name = "mixcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Substance feed (JSON) to load
    #[arg(short, long, global = true, env = "MIXCHECK_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (severities and names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the interaction between two substances
    Check(CheckArgs),

    /// Check every pair among several substances
    Matrix(MatrixArgs),

    /// Check a substance against commonly co-used substances
    Common(CommonArgs),

    /// Show what is known about a substance
    Show(ShowArgs),

    /// Search substances by name and category
    Search(SearchArgs),

    /// Show statistics of the loaded graph
    Stats,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// First substance
    pub a: String,

    /// Second substance
    pub b: String,
}

/// Arguments for the matrix command.
#[derive(Debug, Parser)]
pub struct MatrixArgs {
    /// Substances to combine
    #[arg(required = true, num_args = 2..)]
    pub names: Vec<String>,
}

/// Arguments for the common command.
#[derive(Debug, Parser)]
pub struct CommonArgs {
    /// Substance to check
    pub name: String,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Substance name
    pub name: String,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query text (empty lists everything)
    #[arg(default_value = "")]
    pub query: String,

    /// Only substances in this category (repeatable)
    #[arg(short = 'c', long = "category")]
    pub categories: Vec<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
