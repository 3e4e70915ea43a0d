//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::core::{ClientConfig, DEFAULT_MAX_CALLS_PER_MINUTE, DEFAULT_SHARD, PUBG_BASE_URL};

/// Upstream connection arguments shared by every command
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// PUBG developer API key (or set `PUBG_API_KEY` env var).
    #[clap(long, global = true)]
    pub api_key: Option<String>,

    /// Platform shard (steam, psn, xbox, kakao, stadia, console).
    #[clap(long, global = true, env = "PUBG_SHARD", default_value = DEFAULT_SHARD)]
    pub shard: String,

    /// Override the API host, e.g. for a local mock.
    #[clap(long, global = true, env = "PUBG_BASE_URL", default_value = PUBG_BASE_URL)]
    pub base_url: String,

    /// Upstream requests allowed per rolling minute.
    #[clap(long, global = true, default_value_t = DEFAULT_MAX_CALLS_PER_MINUTE)]
    pub max_calls_per_minute: usize,

    /// Per-request timeout in seconds.
    #[clap(long, global = true, default_value_t = 10)]
    pub timeout_secs: u64,
}

impl ApiArgs {
    /// Build the client config once the API key has been resolved.
    pub fn into_config(self, api_key: String) -> ClientConfig {
        ClientConfig::new(api_key)
            .with_base_url(self.base_url)
            .with_shard(self.shard)
            .with_max_calls_per_minute(self.max_calls_per_minute)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Resolve the current official ranked season.
    Season {
        /// List every season, marking the current one.
        #[clap(long)]
        all: bool,
    },

    /// Compare current-season stats for up to 6 players.
    ///
    /// Looks every name up in one batch, fetches each player's season stats
    /// and sums them across game modes into K/D, ADR and KPR.
    PlayerStats {
        /// Player name, repeatable or comma-separated: `-n alice -n bob` or `-n alice,bob`.
        #[clap(long = "name", short = 'n', required = true)]
        names: Vec<String>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Show a per-mode breakdown under the summary table.
        #[clap(long)]
        modes: bool,

        /// Render comparison charts (SVG).
        #[clap(long)]
        charts: bool,

        /// Where to write charts (defaults to the user cache directory).
        #[clap(long, requires = "charts")]
        charts_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "pubg-stats", about = "PUBG season stats comparison CLI")]
pub struct PubgStats {
    #[clap(flatten)]
    pub api: ApiArgs,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the PUBG API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
