//! CLI command definitions.

pub mod query;

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{D1Config, DEFAULT_API_BASE};

/// CLI for the Cloudflare D1 query API.
#[derive(Debug, Parser)]
#[command(name = "d1-client")]
#[command(about = "Execute SQL against a Cloudflare D1 database", long_about = None)]
pub struct Cli {
    /// Base URL of the Cloudflare API.
    #[arg(long, env = "CLOUDFLARE_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Cloudflare account identifier.
    #[arg(long, env = "CLOUDFLARE_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// D1 database identifier.
    #[arg(long, env = "CLOUDFLARE_D1_DATABASE_ID")]
    pub database_id: Option<String>,

    /// API token used as the bearer credential.
    #[arg(long, env = "CLOUDFLARE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Per-call timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the client configuration from the parsed flags.
    ///
    /// Empty values (typically from blank environment variables) count as
    /// absent, matching [`D1Config::from_env`].
    pub fn to_config(&self) -> D1Config {
        D1Config {
            account_id: self.account_id.clone().filter(|v| !v.is_empty()),
            database_id: self.database_id.clone().filter(|v| !v.is_empty()),
            api_token: self.api_token.clone().filter(|v| !v.is_empty()),
            api_base: self.api_base.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Execute a SQL statement.
    Query(query::QueryCommand),
    /// Show which configuration values are present.
    Config,
}
