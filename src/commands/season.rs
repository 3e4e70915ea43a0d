//! Season command implementation

use crate::{
    core::ClientConfig,
    pubg::{
        http::{PubgClient, UpstreamApi},
        season::select_current_season,
        SeasonResolver,
    },
    Result,
};
use std::sync::Arc;

/// Handle the season command
pub async fn handle_season(config: &ClientConfig, all: bool) -> Result<()> {
    let client = Arc::new(PubgClient::new(config)?);

    if all {
        let seasons = client.list_seasons().await?;
        let current = select_current_season(&seasons);
        for season in &seasons {
            let marker = if current.as_ref() == Some(&season.id) {
                "*"
            } else {
                " "
            };
            println!("{marker} {}", season.id);
        }
        println!("\n{} seasons listed (* = current official season)", seasons.len());
        return Ok(());
    }

    let resolver = SeasonResolver::new(client);
    let season_id = resolver.ensure_resolved().await?;
    println!("{season_id}");

    Ok(())
}
