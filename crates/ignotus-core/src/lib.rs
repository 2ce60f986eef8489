//! Ignotus Core — the `Outcome` success/failure primitive.
//!
//! This crate defines a value-typed container that holds exactly one of an
//! ok payload or an error payload, and the `match_outcome!` macro for
//! dispatching on it. It performs no I/O and owns no resources.

mod macros;

pub mod error;
pub mod outcome;

pub use error::BranchMismatch;
pub use outcome::{Branch, BranchKind, Outcome};
