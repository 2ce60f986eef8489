//! Game mode configuration read from the environment.

use ignotus_core::outcome::Outcome;

use crate::error::AppError;

const MAX_PLAYERS_VAR: &str = "IGNOTUS_MAX_PLAYERS";
const MAP_VAR: &str = "IGNOTUS_MAP";

const DEFAULT_MAX_PLAYERS: u32 = 4;
const DEFAULT_MAP: &str = "Lobby";

/// Settings the game mode starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModeConfig {
    /// Upper bound on connected players.
    pub max_players: u32,
    /// Name of the map to load.
    pub map: String,
}

impl GameModeConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Outcome<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<L>(lookup: L) -> Outcome<Self, AppError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let max_players = match lookup(MAX_PLAYERS_VAR) {
            None => DEFAULT_MAX_PLAYERS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) => {
                    return Outcome::error(AppError::Config {
                        var: MAX_PLAYERS_VAR,
                        reason: "must be at least 1".to_owned(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Outcome::error(AppError::Config {
                        var: MAX_PLAYERS_VAR,
                        reason: format!("must be a valid u32: {e}"),
                    });
                }
            },
        };

        let map = lookup(MAP_VAR).unwrap_or_else(|| DEFAULT_MAP.to_owned());
        if map.trim().is_empty() {
            return Outcome::error(AppError::Config {
                var: MAP_VAR,
                reason: "must not be empty".to_owned(),
            });
        }

        Outcome::ok(Self { max_players, map })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GameModeConfig::from_lookup(lookup_from(&[]));

        assert_eq!(
            config.get_ok(),
            Some(&GameModeConfig {
                max_players: 4,
                map: "Lobby".to_owned(),
            })
        );
    }

    #[test]
    fn test_reads_both_variables() {
        let config = GameModeConfig::from_lookup(lookup_from(&[
            ("IGNOTUS_MAX_PLAYERS", " 16 "),
            ("IGNOTUS_MAP", "Crypt"),
        ]));

        let config = config.try_into_ok().unwrap();
        assert_eq!(config.max_players, 16);
        assert_eq!(config.map, "Crypt");
    }

    #[test]
    fn test_rejects_non_numeric_player_count() {
        let config =
            GameModeConfig::from_lookup(lookup_from(&[("IGNOTUS_MAX_PLAYERS", "many")]));

        assert!(matches!(
            config.get_error(),
            Some(AppError::Config {
                var: "IGNOTUS_MAX_PLAYERS",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_players() {
        let config = GameModeConfig::from_lookup(lookup_from(&[("IGNOTUS_MAX_PLAYERS", "0")]));

        assert_eq!(
            config.into_error(),
            Some(AppError::Config {
                var: "IGNOTUS_MAX_PLAYERS",
                reason: "must be at least 1".to_owned(),
            })
        );
    }

    #[test]
    fn test_rejects_blank_map() {
        let config = GameModeConfig::from_lookup(lookup_from(&[("IGNOTUS_MAP", "  ")]));

        assert!(config.is_error());
    }
}
