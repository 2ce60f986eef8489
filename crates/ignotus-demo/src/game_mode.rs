//! Game mode — holds the bootstrap outcome and forwards it to callers.

use ignotus_core::match_outcome;
use ignotus_core::outcome::Outcome;

use crate::config::GameModeConfig;
use crate::error::AppError;

/// The host-side game mode. It stores whatever configuration outcome it was
/// started with and never looks inside it except through the public API.
#[derive(Debug, Clone)]
pub struct GameMode {
    config: Outcome<GameModeConfig, AppError>,
}

impl GameMode {
    /// Creates a game mode from a configuration outcome.
    #[must_use]
    pub fn new(config: Outcome<GameModeConfig, AppError>) -> Self {
        Self { config }
    }

    /// The configuration outcome, by reference.
    #[must_use]
    pub fn config(&self) -> &Outcome<GameModeConfig, AppError> {
        &self.config
    }

    /// Player slots available once the host seat is taken.
    pub fn open_slots(&self) -> Outcome<u32, AppError> {
        self.config.map_ref(|config| config.max_players.saturating_sub(1))
    }

    /// One-line status for logs.
    #[must_use]
    pub fn status_line(&self) -> String {
        match_outcome!(self.config,
            ok(config) => { format!("{} ready for {} players", config.map, config.max_players) },
            error(err) => { format!("not ready: {err}") },
        )
    }

    /// Hands the configuration outcome back to the caller.
    pub fn into_config(self) -> Outcome<GameModeConfig, AppError> {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> GameMode {
        GameMode::new(Outcome::ok(GameModeConfig {
            max_players: 4,
            map: "Lobby".to_owned(),
        }))
    }

    fn broken() -> GameMode {
        GameMode::new(Outcome::error(AppError::Config {
            var: "IGNOTUS_MAP",
            reason: "must not be empty".to_owned(),
        }))
    }

    #[test]
    fn test_open_slots_excludes_host() {
        assert_eq!(ready().open_slots(), Outcome::ok(3));
    }

    #[test]
    fn test_open_slots_forwards_config_error() {
        let slots = broken().open_slots();

        assert_eq!(slots.get_ok(), None);
        assert_eq!(slots.get_error(), broken().config().get_error());
    }

    #[test]
    fn test_status_line_per_branch() {
        assert_eq!(ready().status_line(), "Lobby ready for 4 players");
        assert_eq!(
            broken().status_line(),
            "not ready: configuration error: IGNOTUS_MAP must not be empty"
        );
    }

    #[test]
    fn test_into_config_returns_held_outcome() {
        let game_mode = ready();
        let expected = game_mode.config().clone();

        assert_eq!(game_mode.into_config(), expected);
    }
}
