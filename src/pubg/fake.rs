//! In-memory [`UpstreamApi`] used by unit tests.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    cli::types::{PlayerId, PlayerNames, SeasonId},
    error::StatsError,
    pubg::{
        http::{SeasonStatsLookup, UpstreamApi},
        types::{GameModeStats, Player, Season},
    },
    Result,
};

pub const CURRENT_SEASON: &str = "division.bro.official.pc-2021-09";

#[derive(Debug, Clone)]
pub enum FakeStats {
    Found(GameModeStats),
    NotFound,
    Fail(u16),
}

pub struct FakeApi {
    seasons: Mutex<std::result::Result<Vec<Season>, u16>>,
    season_delay: Duration,
    stats_delay: Duration,
    players: Vec<Player>,
    players_error: Option<u16>,
    stats: HashMap<PlayerId, FakeStats>,
    pub season_calls: AtomicUsize,
    pub player_calls: AtomicUsize,
    pub stats_calls: AtomicUsize,
}

fn upstream(status: u16) -> StatsError {
    StatsError::Upstream {
        status: Some(status),
        message: format!("fake upstream returned {status}"),
    }
}

impl FakeApi {
    /// Catalog with one past and one current official season, no players.
    pub fn new() -> Self {
        Self {
            seasons: Mutex::new(Ok(vec![
                Season::new("division.bro.official.pc-2021-08", false),
                Season::new(CURRENT_SEASON, true),
            ])),
            season_delay: Duration::ZERO,
            stats_delay: Duration::ZERO,
            players: Vec::new(),
            players_error: None,
            stats: HashMap::new(),
            season_calls: AtomicUsize::new(0),
            player_calls: AtomicUsize::new(0),
            stats_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_seasons(self, seasons: Vec<Season>) -> Self {
        self.set_seasons(Ok(seasons));
        self
    }

    pub fn with_seasons_error(self, status: u16) -> Self {
        self.set_seasons(Err(status));
        self
    }

    pub fn with_season_delay(mut self, delay: Duration) -> Self {
        self.season_delay = delay;
        self
    }

    /// Every season stats call takes `delay` before answering.
    pub fn with_stats_delay(mut self, delay: Duration) -> Self {
        self.stats_delay = delay;
        self
    }

    pub fn with_player(mut self, id: &str, name: &str, stats: FakeStats) -> Self {
        self.players.push(Player::new(id, name));
        self.stats.insert(PlayerId::new(id), stats);
        self
    }

    pub fn with_players_error(mut self, status: u16) -> Self {
        self.players_error = Some(status);
        self
    }

    pub fn set_seasons(&self, seasons: std::result::Result<Vec<Season>, u16>) {
        *self.seasons.lock().unwrap() = seasons;
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamApi for FakeApi {
    async fn list_seasons(&self) -> Result<Vec<Season>> {
        self.season_calls.fetch_add(1, Ordering::SeqCst);
        if !self.season_delay.is_zero() {
            tokio::time::sleep(self.season_delay).await;
        }
        let seasons = self.seasons.lock().unwrap().clone();
        seasons.map_err(upstream)
    }

    async fn find_players_by_name(&self, names: &PlayerNames) -> Result<Vec<Player>> {
        self.player_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.players_error {
            return Err(upstream(status));
        }
        Ok(self
            .players
            .iter()
            .filter(|p| names.iter().any(|n| n == &p.name))
            .cloned()
            .collect())
    }

    async fn get_player_season_stats(
        &self,
        player_id: &PlayerId,
        _season_id: &SeasonId,
    ) -> Result<SeasonStatsLookup> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        if !self.stats_delay.is_zero() {
            tokio::time::sleep(self.stats_delay).await;
        }
        match self.stats.get(player_id) {
            Some(FakeStats::Found(stats)) => Ok(SeasonStatsLookup::Found(stats.clone())),
            Some(FakeStats::NotFound) | None => Ok(SeasonStatsLookup::NotFound),
            Some(FakeStats::Fail(status)) => Err(upstream(*status)),
        }
    }
}
