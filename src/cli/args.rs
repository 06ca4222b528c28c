//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    browse::BrowseArgs, build::BuildArgs, completions::CompletionsArgs, doc::DocCommands,
    ind::IndCommands, stage::StageCommands, validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "imslc")]
#[command(author, version, about = "Analog IC lifecycle knowledge base")]
#[command(long_about = "Browse the lifecycle stages, risks, quality indicators and regulatory documents of standard analog integrated microcircuits, and build the static reference site.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Load content from this directory instead of the built-in tables
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the static site
    Build(BuildArgs),

    /// Lifecycle stages and their risks
    #[command(subcommand)]
    Stage(StageCommands),

    /// Quality indicators and their documents
    #[command(subcommand)]
    Ind(IndCommands),

    /// Aggregated regulatory documents
    #[command(subcommand)]
    Doc(DocCommands),

    /// Interactively browse the pyramid or the indicator tree
    Browse(BrowseArgs),

    /// Check the content tables
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (text for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-aligned table for the terminal
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}

impl OutputFormat {
    /// Replace `Auto` with the configured default, then with `fallback`
    pub fn resolve(self, configured: Option<&str>, fallback: OutputFormat) -> OutputFormat {
        if self != OutputFormat::Auto {
            return self;
        }
        configured
            .and_then(|s| OutputFormat::from_str(s, true).ok())
            .filter(|f| *f != OutputFormat::Auto)
            .unwrap_or(fallback)
    }
}
