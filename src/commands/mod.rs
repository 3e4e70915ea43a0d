//! Command implementations for the PUBG stats CLI

pub mod player_stats;
pub mod season;

use crate::{error::StatsError, Result, API_KEY_ENV_VAR};

/// Resolve the API key from option or environment variable
pub fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    api_key
        .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| StatsError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
}
