//! Ignotus demo — host error types.

use thiserror::Error;

/// Errors raised while bootstrapping the game mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// An environment variable held a value that could not be used.
    #[error("configuration error: {var} {reason}")]
    Config {
        /// The offending environment variable.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
