//! ID types for PUBG players and seasons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StatsError};

/// Prefix shared by every official ranked season id (e.g. `division.bro.official.pc-2018-01`).
pub const OFFICIAL_SEASON_PREFIX: &str = "division.bro.official.";

/// Type-safe wrapper for PUBG account ids.
///
/// ```rust
/// use pubg_stats::PlayerId;
///
/// let id = PlayerId::new("account.c0e530e9b7244b358def282782f893af");
/// assert_eq!(id.as_str(), "account.c0e530e9b7244b358def282782f893af");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for PUBG season ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonId(pub String);

impl SeasonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Official ranked seasons only; event and non-official variants are excluded.
    pub fn is_official(&self) -> bool {
        self.0.starts_with(OFFICIAL_SEASON_PREFIX)
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StatsError::invalid_input("season id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}
