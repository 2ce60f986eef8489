//! Ignotus demo entry point.
//!
//! Boots a game mode from environment configuration and reports the outcome.

use std::error::Error;

use ignotus_core::match_outcome;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod game_mode;

use config::GameModeConfig;
use game_mode::GameMode;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Ignotus game mode");

    let game_mode =
        GameMode::new(GameModeConfig::from_env().inspect_error("reading game mode configuration"));
    tracing::info!(
        ready = game_mode.config().is_ok(),
        status = %game_mode.status_line(),
        "game mode bootstrapped"
    );

    match_outcome!(game_mode.open_slots(),
        ok(slots) => { tracing::info!(slots, "accepting players"); },
        error(_err) => { tracing::error!("refusing players until configuration is fixed"); },
    );

    let config = game_mode.into_config().into_result()?;
    tracing::info!(map = %config.map, "loading map");

    Ok(())
}
