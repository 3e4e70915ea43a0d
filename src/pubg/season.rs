//! Current-season discovery and caching.
//!
//! The upstream publishes a catalog of seasons; exactly one official ranked
//! season is flagged current. The resolver looks it up once, on first need,
//! and serves the cached id from then on. It is looked up again only when
//! [`SeasonResolver::refresh`] is called.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use arc_swap::ArcSwapOption;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{error, info, warn};

use crate::{
    cli::types::SeasonId,
    error::StatsError,
    pubg::{http::UpstreamApi, types::Season},
    Result,
};


pub struct SeasonResolver {
    api: Arc<dyn UpstreamApi>,
    /// Readers never block; resolution swaps the whole value in.
    current: ArcSwapOption<SeasonId>,
    /// Set once the lazy first resolution has run, successful or not.
    attempted: AtomicBool,
    /// Serializes resolution so only one seasons call is in flight.
    resolving: Mutex<()>,
}

impl SeasonResolver {
    pub fn new(api: Arc<dyn UpstreamApi>) -> Self {
        Self {
            api,
            current: ArcSwapOption::empty(),
            attempted: AtomicBool::new(false),
            resolving: Mutex::new(()),
        }
    }

    /// The cached season id, or `SeasonUnresolved` if none has been resolved.
    pub fn current_season_id(&self) -> Result<SeasonId> {
        self.current
            .load_full()
            .map(|id| SeasonId::clone(&id))
            .ok_or(StatsError::SeasonUnresolved)
    }

    /// Return the cached id, resolving it first if this is the first need.
    ///
    /// A failed first attempt is not retried here; callers get
    /// `SeasonUnresolved` until [`refresh`](Self::refresh) succeeds.
    /// Concurrent first callers wait on the same attempt.
    pub async fn ensure_resolved(&self) -> Result<SeasonId> {
        if let Ok(id) = self.current_season_id() {
            return Ok(id);
        }

        let _guard = self.resolving.lock().await;
        if let Ok(id) = self.current_season_id() {
            return Ok(id);
        }
        if self.attempted.load(Ordering::Acquire) {
            return Err(StatsError::SeasonUnresolved);
        }

        let outcome = self.resolve().await;
        self.attempted.store(true, Ordering::Release);
        outcome
    }

    /// Look the current season up again.
    ///
    /// On failure a previously cached id stays in place and is returned;
    /// the error only reaches the caller when nothing was cached before.
    pub async fn refresh(&self) -> Result<SeasonId> {
        let _guard = self.resolving.lock().await;
        let outcome = self.resolve().await;
        self.attempted.store(true, Ordering::Release);

        match outcome {
            Ok(id) => Ok(id),
            Err(e) => match self.current_season_id() {
                Ok(previous) => {
                    warn!(season = %previous, "season refresh failed, keeping previous season");
                    Ok(previous)
                }
                Err(_) => Err(e),
            },
        }
    }

    /// Refresh on a fixed interval for long-lived processes. The first
    /// refresh happens one `interval` after spawning.
    pub fn spawn_periodic_refresh(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                // Failures are logged inside; the cached id is kept
                let _ = self.refresh().await;
            }
        })
    }

    /// Caller must hold `resolving`.
    async fn resolve(&self) -> Result<SeasonId> {
        info!("fetching list of all seasons");
        let seasons = match self.api.list_seasons().await {
            Ok(seasons) => seasons,
            Err(e) => {
                error!(error = %e, "failed to fetch seasons from the upstream API");
                return Err(StatsError::SeasonUnresolved);
            }
        };

        let Some(id) = select_current_season(&seasons) else {
            error!(
                seasons = seasons.len(),
                "could not find a single current official season in the season list"
            );
            return Err(StatsError::SeasonUnresolved);
        };

        self.current.store(Some(Arc::new(id.clone())));
        info!(season = %id, "current season set");
        Ok(id)
    }
}

/// The one season flagged current with an official ranked id.
///
/// Zero or several candidates both count as "unknown".
pub fn select_current_season(seasons: &[Season]) -> Option<SeasonId> {
    let mut candidates = seasons
        .iter()
        .filter(|s| s.is_current && s.id.is_official());
    match (candidates.next(), candidates.next()) {
        (Some(season), None) => Some(season.id.clone()),
        _ => None,
    }
}
