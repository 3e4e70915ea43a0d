//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use pubg_stats::{
    cli::{Commands, GetCmd, PubgStats},
    commands::{
        player_stats::{handle_player_stats, PlayerStatsParams},
        resolve_api_key,
        season::handle_season,
    },
    error::exit_status,
    StatsError,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Run the CLI. Caller errors exit with 2, upstream and processing failures with 3.
#[tokio::main]
async fn main() -> ExitCode {
    let app = PubgStats::parse();
    init_logging(app.verbose);

    match run(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(status) = err
                .chain()
                .find_map(|e| e.downcast_ref::<StatsError>())
                .and_then(StatsError::upstream_status)
            {
                debug!(status, "upstream responded with an error status");
            }
            eprintln!("Error: {err:?}");
            ExitCode::from(exit_status(&err))
        }
    }
}

async fn run(app: PubgStats) -> anyhow::Result<()> {
    let api_key = resolve_api_key(app.api.api_key.clone())?;
    let config = app.api.into_config(api_key);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Season { all } => handle_season(&config, all)
                .await
                .context("failed to resolve the current season")?,

            GetCmd::PlayerStats {
                names,
                json,
                modes,
                charts,
                charts_dir,
            } => handle_player_stats(
                &config,
                PlayerStatsParams {
                    names,
                    as_json: json,
                    show_modes: modes,
                    charts,
                    charts_dir,
                },
            )
            .await
            .context("failed to fetch player data")?,
        },
    }

    Ok(())
}

/// Log to stderr so JSON output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "pubg_stats=debug"
    } else {
        "pubg_stats=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
