//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for aggregation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Consensus, confidence and group overview
    Summary,
    /// The full aggregated response as JSON
    Json,
}

impl From<OutputFormat> for quorum_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => quorum_domain::OutputFormat::Summary,
            OutputFormat::Json => quorum_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for quorum-aggregate
#[derive(Parser, Debug)]
#[command(name = "quorum-aggregate")]
#[command(author, version, about = "Aggregate answers from multiple LLMs into one response")]
#[command(long_about = r#"
quorum-aggregate takes the answers several models gave to the same prompt and
reduces them to a single aggregated response:

1. Validate: the batch must be a non-empty JSON array of model results
2. Filter:   keep successful answers, then apply the quality threshold
             (falling back to a looser threshold if nothing passes)
3. Report:   best answer, consensus text, top answers, length-based groups
             and a 0-1 confidence score

Input format (JSON array):
  [{"modelId": "gpt-5.2-codex", "modelName": "GPT", "success": true,
    "response": "...", "latency": 1200}]

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quorum.toml       Project-level config
3. ~/.config/quorum-aggregate/config.toml   Global config

Example:
  quorum-aggregate results.json
  cat results.json | quorum-aggregate -o json
"#)]
pub struct Cli {
    /// JSON file with model results (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL audit record for this run (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,
}
