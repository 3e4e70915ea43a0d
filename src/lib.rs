//! PUBG Season Stats Library
//!
//! Compares the current-season competitive statistics of up to six PUBG
//! players, pulled from the rate-limited PUBG developer API.
//!
//! ## Features
//!
//! - **Season Discovery**: Finds the current official ranked season once and caches it
//! - **Rate Limiting**: Every upstream call waits for a slot in a sliding 60 second window
//! - **Concurrent Fetching**: Per-player season stats are fetched together and joined
//! - **Partial Failure Tolerance**: Players without a season record get all-zero stats
//! - **Aggregation**: Per-mode stats summed into K/D, ADR and KPR
//! - **Charts**: Optional SVG bar charts comparing the players
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pubg_stats::{commands::player_stats::StatsEngine, ClientConfig, PlayerNames};
//!
//! # async fn example() -> pubg_stats::Result<()> {
//! let engine = StatsEngine::from_config(&ClientConfig::new("my-api-key"))?;
//! let names = PlayerNames::parse(["alice", "bob"])?;
//!
//! for player in engine.aggregate(&names).await? {
//!     println!("{}: K/D {:.2}", player.name, player.summary_stats.kd);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your API key to avoid passing it in every command:
//! ```bash
//! export PUBG_API_KEY=eyJ0eXAiOi...
//! ```

pub mod charts;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod pubg;

// Re-export commonly used types
pub use cli::types::{PlayerId, PlayerNames, SeasonId, MAX_PLAYERS};
pub use core::ClientConfig;
pub use error::{Result, StatsError};
pub use pubg::types::{GameModeStats, ModeStats, Player, PlayerSummary, Season, SummaryStats};

pub const API_KEY_ENV_VAR: &str = "PUBG_API_KEY";
