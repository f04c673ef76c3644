//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Reelsmith - scenario-driven video prompts, SEO copy and publishing schedules
#[derive(Parser, Debug)]
#[command(name = "reelsmith")]
#[command(about = "Scenario-driven video prompts, SEO copy and publishing schedules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline and print the result as JSON
    Run(RunArgs),

    /// Print the built-in platform table as JSON
    Platforms,
}

/// Arguments for a pipeline run
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scenario JSON file
    #[arg(long)]
    pub scenario: PathBuf,

    /// Media directory, CSV or JSON file
    #[arg(long)]
    pub media: PathBuf,

    /// Platform keyword hints and copy limits (TOML or JSON)
    #[arg(long)]
    pub platform_config: Option<PathBuf>,

    /// Publishing start time, cadence and strategy (TOML or JSON)
    #[arg(long)]
    pub publish_config: Option<PathBuf>,

    /// Video engine to build prompts for (repeatable)
    #[arg(long = "engine", default_value = "google_veo_3")]
    pub engines: Vec<String>,

    /// Restrict the run to these platforms (repeatable)
    #[arg(long = "platform")]
    pub platforms: Vec<String>,

    /// Only pick up media files with these extensions (repeatable)
    #[arg(long = "extension")]
    pub extensions: Vec<String>,

    /// Directory for render manifests and export targets
    #[arg(long, env = "REELSMITH_OUTPUT_DIR", default_value = "build")]
    pub output_dir: PathBuf,

    /// Also write the JSON result to this file once the run succeeds
    #[arg(long)]
    pub dump: Option<PathBuf>,
}
