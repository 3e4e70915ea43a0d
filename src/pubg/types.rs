use crate::cli::types::{PlayerId, SeasonId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Top-level JSON:API document: everything the PUBG API returns sits under `data`.
#[derive(Debug, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

/// Entry of `GET /seasons`
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonResource {
    pub id: SeasonId,
    pub attributes: SeasonAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonAttributes {
    #[serde(rename = "isCurrentSeason", default)]
    pub is_current_season: bool,
}

/// Season as seen by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub id: SeasonId,
    #[serde(rename = "isCurrent")]
    pub is_current: bool,
}

impl Season {
    pub fn new(id: impl Into<String>, is_current: bool) -> Self {
        Self {
            id: SeasonId::new(id),
            is_current,
        }
    }
}

impl From<SeasonResource> for Season {
    fn from(res: SeasonResource) -> Self {
        Self {
            id: res.id,
            is_current: res.attributes.is_current_season,
        }
    }
}

/// Entry of `GET /players?filter[playerNames]=...`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerResource {
    pub id: PlayerId,
    pub attributes: PlayerAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerAttributes {
    pub name: String,
    #[serde(rename = "shardId", default)]
    pub shard_id: Option<String>,
    #[serde(rename = "patchVersion", default)]
    pub patch_version: Option<String>,
    #[serde(rename = "titleId", default)]
    pub title_id: Option<String>,
}

/// Player resolved from an exact-name lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "shardId", skip_serializing_if = "Option::is_none")]
    pub shard_id: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            shard_id: None,
        }
    }
}

impl From<PlayerResource> for Player {
    fn from(res: PlayerResource) -> Self {
        Self {
            id: res.id,
            name: res.attributes.name,
            shard_id: res.attributes.shard_id,
        }
    }
}

/// `GET /players/{id}/seasons/{seasonId}` payload
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSeasonResource {
    pub attributes: PlayerSeasonAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSeasonAttributes {
    #[serde(rename = "gameModeStats", default)]
    pub game_mode_stats: GameModeStats,
}

/// Per-mode statistics keyed by mode name (`squad-fpp`, `solo`, ...)
pub type GameModeStats = BTreeMap<String, ModeStats>;

/// Statistics for one game mode. Fields missing upstream are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModeStats {
    pub kills: u64,
    pub deaths: u64,
    pub wins: u64,
    pub losses: u64,
    pub damage_dealt: f64,
    pub rounds_played: u64,
    pub assists: u64,
    pub max_kill_streaks: u64,
    pub longest_kill: f64,
}

/// Cross-mode totals for one player plus the derived ratios
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub kills: u64,
    pub deaths: u64,
    pub wins: u64,
    pub losses: u64,
    pub damage_dealt: f64,
    pub rounds_played: u64,
    pub assists: u64,
    pub max_kill_streaks: u64,
    pub longest_kill: f64,
    pub kd: f64,
    pub adr: f64,
    pub kpr: f64,
}

/// One requested player's aggregated result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "summaryStats")]
    pub summary_stats: SummaryStats,
    /// Raw per-mode statistics the summary was built from
    #[serde(rename = "seasonStats")]
    pub season_stats: GameModeStats,
}
