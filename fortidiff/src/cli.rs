use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fortidiff")]
#[command(about = "Compare and inspect FortiGate configuration exports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Compare two configuration dumps and show differences.
    Diff(DiffArgs),
    /// Show the parsed structure of a single configuration dump.
    Inspect(InspectArgs),
    /// List top-level sections and difference hot spots between two dumps.
    Sections(SectionsArgs),
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    pub file1: PathBuf,
    pub file2: PathBuf,
    /// Additional ignore-key substring (repeatable).
    #[arg(long)]
    pub ignore: Vec<String>,
    /// TOML file with a `keys` array, replacing the built-in ignore list.
    #[arg(long, conflicts_with = "no_default_ignores")]
    pub ignore_file: Option<PathBuf>,
    /// Start from an empty ignore list instead of the built-in defaults.
    #[arg(long)]
    pub no_default_ignores: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Show record counts only.
    #[arg(long)]
    pub summary: bool,
    #[arg(short, long)]
    pub quiet: bool,
    /// Also write the plain-text report to a file.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Override the display label for the first file.
    #[arg(long)]
    pub label1: Option<String>,
    /// Override the display label for the second file.
    #[arg(long)]
    pub label2: Option<String>,
    /// Print parse diagnostics to stderr.
    #[arg(long)]
    pub show_diagnostics: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub section: Option<String>,
    /// Outline depth: 1 sections, 2 subsections, 3 keys.
    #[arg(long, default_value_t = 3)]
    pub depth: usize,
    /// Print normalized configuration text instead of an outline.
    #[arg(long)]
    pub canonical: bool,
    /// Print parse diagnostics to stderr.
    #[arg(long)]
    pub show_diagnostics: bool,
}

#[derive(Parser, Debug)]
pub struct SectionsArgs {
    pub file1: PathBuf,
    pub file2: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
