//! PUBG API client.
//!
//! [`UpstreamApi`] is the seam the aggregation engine talks to; [`PubgClient`]
//! is the reqwest-backed implementation. Every request goes through the
//! shared [`RateLimiter`] before it is sent.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    cli::types::{PlayerId, PlayerNames, SeasonId},
    core::{auth_header_map, build_http_client, ClientConfig, RateLimiter},
    error::StatsError,
    pubg::types::{
        Document, GameModeStats, Player, PlayerResource, PlayerSeasonResource, Season,
        SeasonResource,
    },
    Result,
};


/// Outcome of a per-player season stats request.
#[derive(Debug, Clone, PartialEq)]
pub enum SeasonStatsLookup {
    Found(GameModeStats),
    /// The player has no record for the season (HTTP 404).
    NotFound,
}

/// The three read-only upstream operations the engine needs.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    async fn list_seasons(&self) -> Result<Vec<Season>>;

    async fn find_players_by_name(&self, names: &PlayerNames) -> Result<Vec<Player>>;

    async fn get_player_season_stats(
        &self,
        player_id: &PlayerId,
        season_id: &SeasonId,
    ) -> Result<SeasonStatsLookup>;
}

pub struct PubgClient {
    http: Client,
    headers: HeaderMap,
    shard_url: String,
    limiter: Arc<RateLimiter>,
}

impl PubgClient {
    /// Client with its own limiter sized from the config.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let limiter = Arc::new(RateLimiter::new(config.max_calls_per_minute));
        Self::with_limiter(config, limiter)
    }

    /// Client sharing an existing limiter, for when several clients use one key.
    pub fn with_limiter(config: &ClientConfig, limiter: Arc<RateLimiter>) -> Result<Self> {
        Ok(Self {
            http: build_http_client(config.timeout)?,
            headers: auth_header_map(&config.api_key)?,
            shard_url: config.shard_url(),
            limiter,
        })
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Rate-limited GET. `Ok(None)` means the upstream answered 404.
    async fn get_document<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let url = format!("{}{}", self.shard_url, path);

        self.limiter.acquire().await;
        debug!(%url, "GET");

        let res = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "upstream returned 404");
            return Ok(None);
        }
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "upstream request failed");
            return Err(StatsError::Upstream {
                status: Some(status.as_u16()),
                message: format!("GET {path} returned {status}: {}", snippet(&body)),
            });
        }

        Ok(Some(res.json::<T>().await?))
    }
}

#[async_trait]
impl UpstreamApi for PubgClient {
    async fn list_seasons(&self) -> Result<Vec<Season>> {
        let doc: Document<Vec<SeasonResource>> =
            self.get_document("/seasons", &[]).await?.ok_or_else(|| {
                StatsError::Upstream {
                    status: Some(StatusCode::NOT_FOUND.as_u16()),
                    message: "GET /seasons returned 404".to_string(),
                }
            })?;
        Ok(doc.data.into_iter().map(Season::from).collect())
    }

    async fn find_players_by_name(&self, names: &PlayerNames) -> Result<Vec<Player>> {
        let filter = names.to_filter_value();
        let doc: Option<Document<Vec<PlayerResource>>> = self
            .get_document("/players", &[("filter[playerNames]", filter.as_str())])
            .await?;

        // The players endpoint answers 404 when none of the names exist
        Ok(doc
            .map(|d| d.data.into_iter().map(Player::from).collect())
            .unwrap_or_default())
    }

    async fn get_player_season_stats(
        &self,
        player_id: &PlayerId,
        season_id: &SeasonId,
    ) -> Result<SeasonStatsLookup> {
        let path = format!("/players/{player_id}/seasons/{season_id}");
        let doc: Option<Document<PlayerSeasonResource>> = self.get_document(&path, &[]).await?;

        Ok(match doc {
            Some(d) => SeasonStatsLookup::Found(d.data.attributes.game_mode_stats),
            None => SeasonStatsLookup::NotFound,
        })
    }
}

fn snippet(body: &str) -> &str {
    const MAX: usize = 200;
    let body = body.trim();
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
