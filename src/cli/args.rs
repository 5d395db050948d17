//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs,
    components::ComponentsArgs,
    export::ExportArgs,
    interactive::InteractiveArgs,
    machines::MachinesArgs,
    plan::PlanArgs,
    show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "bomplan")]
#[command(author, version, about = "BOM requirement planner")]
#[command(
    long_about = "Derive multi-year component requirements from a bill-of-materials forecast CSV."
)]
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

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute component requirements over a year horizon
    Plan(PlanArgs),

    /// List distinct component names in a BOM file
    Components(ComponentsArgs),

    /// List distinct machine types in a BOM file
    Machines(MachinesArgs),

    /// Render the parsed BOM table
    Show(ShowArgs),

    /// Write the normalized row set back to CSV
    Export(ExportArgs),

    /// Prompt-driven planning session
    Interactive(InteractiveArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Report layout for reading in a terminal
    #[default]
    Auto,
    /// Plain lines (for piping)
    Text,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
