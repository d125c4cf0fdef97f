//! CLI command definitions

use clap::{Parser, ValueEnum};
use foreach_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// What to print once the session completes
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Completion reason and per-statement tallies
    Summary,
    /// Collected responses as JSON
    Json,
    /// Nothing (results are still written to output.json)
    None,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
            OutputFormat::None => DomainOutputFormat::None,
        }
    }
}

/// CLI arguments for response-foreach
#[derive(Parser, Debug)]
#[command(name = "response-foreach")]
#[command(author, version, about = "Collect a response to every statement from every participant")]
#[command(long_about = r#"
response-foreach sends each participant the same list of statements, one at a
time, and records their answers. An answer is accepted when it matches one of
the configured option triggers ("*" accepts anything).

The session ends when everyone has answered every statement, or when the
max time elapses, whichever comes first. Results are written to
<DIR>/output.json.

Input (<DIR>/input.json):
  {
    "options": [{"text": "Agree", "triggers": ["a"]}, ...],
    "statements": [{"text": "..."}, ...],
    "participants_config": [{"type": "cli", "id": "me"}, ...],
    "max_time": 600000
  }

Configuration files are loaded from (in priority order):
1. RESPONSE_FOREACH_* environment variables
2. --config <path>                 Explicit config file
3. ./response-foreach.toml         Project-level config
4. ~/.config/response-foreach/config.toml   Global config

Example:
  response-foreach ./session
  response-foreach ./session --max-time 30000 -o json
"#)]
pub struct Cli {
    /// Session directory containing input.json
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Time budget in milliseconds (overrides input.json and config)
    #[arg(long, value_name = "MS")]
    pub max_time: Option<u64>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write a JSONL transcript of every message to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
