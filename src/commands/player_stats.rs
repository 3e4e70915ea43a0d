//! Player stats command: the season-aware aggregation engine and its CLI handler.
//!
//! A request runs in a fixed order: resolve the current season, look all
//! requested names up in one batch, fetch every player's season stats
//! concurrently, then summarize. Only a 404 on a player's season stats is
//! absorbed (as empty stats); any other failure fails the whole request.

use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use futures::future::try_join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    charts::{default_charts_dir, write_charts, ChartRenderer, SvgChartRenderer},
    cli::types::{PlayerNames, SeasonId},
    core::ClientConfig,
    error::StatsError,
    pubg::{
        compute::{average_damage_per_round, kill_death_ratio, ordered_modes, summarize},
        http::{PubgClient, SeasonStatsLookup, UpstreamApi},
        season::SeasonResolver,
        types::{GameModeStats, Player, PlayerSummary},
    },
    Result,
};


/// Aggregation engine shared across requests.
///
/// Holds the upstream client and the process-wide season cache; everything
/// player-related is rebuilt on each call to [`aggregate`](Self::aggregate).
pub struct StatsEngine {
    api: Arc<dyn UpstreamApi>,
    seasons: Arc<SeasonResolver>,
}

impl StatsEngine {
    pub fn new(api: Arc<dyn UpstreamApi>) -> Self {
        let seasons = Arc::new(SeasonResolver::new(Arc::clone(&api)));
        Self { api, seasons }
    }

    /// Engine backed by the real PUBG API.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(PubgClient::new(config)?)))
    }

    pub fn seasons(&self) -> &Arc<SeasonResolver> {
        &self.seasons
    }

    /// Re-resolve the current season on demand.
    pub async fn refresh_season(&self) -> Result<SeasonId> {
        self.seasons.refresh().await
    }

    /// Summaries for `names`, in request order.
    ///
    /// Names the upstream does not know are left out of the result.
    pub async fn aggregate(&self, names: &PlayerNames) -> Result<Vec<PlayerSummary>> {
        if names.is_empty() {
            return Err(StatsError::invalid_input("at least one player name is required"));
        }

        let season_id = self.seasons.ensure_resolved().await?;

        let players = self.api.find_players_by_name(names).await?;
        let players = order_by_request(names, players);
        info!(
            requested = names.len(),
            found = players.len(),
            season = %season_id,
            "fetching season stats"
        );

        // Dropping the joined future on the first error cancels the siblings
        let season_stats = try_join_all(
            players
                .iter()
                .map(|player| fetch_season_stats(self.api.as_ref(), player, &season_id)),
        )
        .await?;

        Ok(players
            .into_iter()
            .zip(season_stats)
            .map(|(player, stats)| PlayerSummary {
                summary_stats: summarize(&stats),
                id: player.id,
                name: player.name,
                season_stats: stats,
            })
            .collect())
    }
}

/// One player's game-mode stats for `season_id`; a 404 means no ranked
/// activity and comes back as an empty map.
pub async fn fetch_season_stats(
    api: &dyn UpstreamApi,
    player: &Player,
    season_id: &SeasonId,
) -> Result<GameModeStats> {
    match api.get_player_season_stats(&player.id, season_id).await {
        Ok(SeasonStatsLookup::Found(stats)) => {
            debug!(player = %player.name, modes = stats.len(), "fetched season stats");
            Ok(stats)
        }
        Ok(SeasonStatsLookup::NotFound) => {
            info!(player = %player.name, season = %season_id, "no season record (404), using empty stats");
            Ok(GameModeStats::new())
        }
        Err(e) => {
            warn!(player = %player.name, error = %e, "unexpected error fetching season stats");
            Err(e)
        }
    }
}

/// Sort players into request order and drop duplicates or unrequested names.
fn order_by_request(names: &PlayerNames, players: Vec<Player>) -> Vec<Player> {
    let mut slots: Vec<Option<Player>> = vec![None; names.len()];
    for player in players {
        match names.position_of(&player.name) {
            Some(i) if slots[i].is_none() => slots[i] = Some(player),
            _ => debug!(player = %player.name, "ignoring unrequested or duplicate player"),
        }
    }
    slots.into_iter().flatten().collect()
}

/// What a stats request hands back to its caller.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStatsResponse {
    pub stats: Vec<PlayerSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<BTreeMap<String, Vec<u8>>>,
}

/// Serve one request: empty input short-circuits, charts are best-effort.
pub async fn run_request(
    engine: &StatsEngine,
    names: &PlayerNames,
    renderer: Option<&dyn ChartRenderer>,
) -> Result<PlayerStatsResponse> {
    if names.is_empty() {
        return Ok(PlayerStatsResponse {
            stats: Vec::new(),
            charts: None,
        });
    }

    let stats = engine.aggregate(names).await?;

    let charts = match renderer {
        Some(r) if !stats.is_empty() => match r.render(&stats) {
            Ok(charts) => Some(charts),
            Err(e) => {
                warn!(error = %e, "chart rendering failed, returning stats without charts");
                None
            }
        },
        _ => None,
    };

    Ok(PlayerStatsResponse { stats, charts })
}

/// Parameters for the player stats command
#[derive(Debug)]
pub struct PlayerStatsParams {
    pub names: Vec<String>,
    pub as_json: bool,
    pub show_modes: bool,
    pub charts: bool,
    pub charts_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    stats: &'a [PlayerSummary],
    #[serde(skip_serializing_if = "Option::is_none")]
    charts: Option<BTreeMap<String, PathBuf>>,
}

/// Handle the player stats command
pub async fn handle_player_stats(config: &ClientConfig, params: PlayerStatsParams) -> Result<()> {
    let names = PlayerNames::parse(&params.names)?;
    if names.is_empty() {
        println!("No player names given, nothing to compare.");
        return Ok(());
    }

    let engine = StatsEngine::from_config(config)?;
    let renderer = SvgChartRenderer::default();
    let response = run_request(
        &engine,
        &names,
        params.charts.then_some(&renderer as &dyn ChartRenderer),
    )
    .await?;

    let chart_paths = match &response.charts {
        Some(charts) => {
            let dir = params.charts_dir.clone().unwrap_or_else(default_charts_dir);
            match write_charts(&dir, renderer.extension(), charts) {
                Ok(paths) => Some(paths),
                Err(e) => {
                    warn!(error = %e, dir = %dir.display(), "could not write charts");
                    None
                }
            }
        }
        None => None,
    };

    let missing: Vec<&str> = names
        .iter()
        .enumerate()
        .filter(|(i, _)| {
            !response
                .stats
                .iter()
                .any(|p| names.position_of(&p.name) == Some(*i))
        })
        .map(|(_, n)| n.as_str())
        .collect();

    if params.as_json {
        let out = JsonOutput {
            stats: &response.stats,
            charts: chart_paths,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_summary_table(&response.stats);
    if params.show_modes {
        print_mode_breakdown(&response.stats);
    }
    if !missing.is_empty() {
        println!("\nNo player found for: {}", missing.join(", "));
    }
    if let Some(paths) = chart_paths {
        println!();
        for (metric, path) in paths {
            println!("{metric} chart: {}", path.display());
        }
    }

    Ok(())
}

fn print_summary_table(players: &[PlayerSummary]) {
    println!(
        "{:<20} {:>6} {:>6} {:>6} {:>8} {:>6} {:>5} {:>6} {:>7} {:>6} {:>8}",
        "Player", "Kills", "Deaths", "K/D", "ADR", "KPR", "Wins", "Rounds", "Assists", "Streak", "Longest"
    );
    for p in players {
        let s = &p.summary_stats;
        println!(
            "{:<20} {:>6} {:>6} {:>6.2} {:>8.2} {:>6.2} {:>5} {:>6} {:>7} {:>6} {:>7.1}m",
            p.name,
            s.kills,
            s.deaths,
            s.kd,
            s.adr,
            s.kpr,
            s.wins,
            s.rounds_played,
            s.assists,
            s.max_kill_streaks,
            s.longest_kill
        );
    }
}

fn print_mode_breakdown(players: &[PlayerSummary]) {
    for p in players {
        println!("\n{}", p.name);
        let modes = ordered_modes(&p.season_stats);
        if modes.is_empty() {
            println!("  No ranked stats found this season.");
            continue;
        }
        for (mode, s) in modes {
            println!(
                "  {:<10} K/D {:>5.2}  ADR {:>7.2}  Wins {:>3}  Rounds {:>4}",
                mode.replace('-', " ").to_uppercase(),
                kill_death_ratio(s.kills, s.deaths),
                average_damage_per_round(s.damage_dealt, s.rounds_played),
                s.wins,
                s.rounds_played
            );
        }
    }
}
