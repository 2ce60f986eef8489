//! Outcome error types.

use thiserror::Error;

/// Returned when an outcome is unwrapped into the branch it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BranchMismatch {
    /// An ok payload was requested from an error outcome.
    #[error("expected an ok outcome, found an error")]
    ExpectedOk,

    /// An error payload was requested from an ok outcome.
    #[error("expected an error outcome, found an ok")]
    ExpectedError,
}
