//! The `Outcome` success/failure container.
//!
//! An `Outcome<O, E>` holds exactly one of an ok payload or an error payload.
//! The payload lives in a private tagged union, so the only way to build one
//! is through [`Outcome::ok`] and [`Outcome::error`] (or the `From<Result>`
//! conversion, which defers to them). An outcome with both slots or neither
//! slot populated cannot be expressed.

use std::fmt;

use crate::error::BranchMismatch;

/// Storage for the populated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<O, E> {
    Ok(O),
    Error(E),
}

/// A value that is exactly one of an ok payload or an error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an outcome may hold an error that should be handled"]
pub struct Outcome<O, E> {
    slot: Slot<O, E>,
}

/// Which slot of an outcome is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    /// The ok slot.
    Ok,
    /// The error slot.
    Error,
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Borrowed view of the populated slot of an outcome.
///
/// This is what [`match_outcome!`](crate::match_outcome) dispatches on.
#[derive(Debug, PartialEq, Eq)]
pub enum Branch<'a, O, E> {
    /// The outcome holds an ok payload.
    Ok(&'a O),
    /// The outcome holds an error payload.
    Error(&'a E),
}

// Derives would require `O: Clone` and `E: Clone`; the view only holds references.
impl<O, E> Clone for Branch<'_, O, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, E> Copy for Branch<'_, O, E> {}

impl<O, E> Outcome<O, E> {
    /// Creates an outcome whose ok slot holds `value`.
    pub const fn ok(value: O) -> Self {
        Self {
            slot: Slot::Ok(value),
        }
    }

    /// Creates an outcome whose error slot holds `value`.
    pub const fn error(value: E) -> Self {
        Self {
            slot: Slot::Error(value),
        }
    }

    /// Returns the ok payload, or `None` if this is an error outcome.
    #[must_use]
    pub const fn get_ok(&self) -> Option<&O> {
        match &self.slot {
            Slot::Ok(value) => Some(value),
            Slot::Error(_) => None,
        }
    }

    /// Returns the error payload, or `None` if this is an ok outcome.
    #[must_use]
    pub const fn get_error(&self) -> Option<&E> {
        match &self.slot {
            Slot::Ok(_) => None,
            Slot::Error(value) => Some(value),
        }
    }

    /// Returns `true` if the ok slot is populated.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.slot, Slot::Ok(_))
    }

    /// Returns `true` if the error slot is populated.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.slot, Slot::Error(_))
    }

    /// Returns which slot is populated.
    #[must_use]
    pub const fn kind(&self) -> BranchKind {
        match self.slot {
            Slot::Ok(_) => BranchKind::Ok,
            Slot::Error(_) => BranchKind::Error,
        }
    }

    /// Returns a borrowed view of the populated slot.
    #[must_use]
    pub const fn branch(&self) -> Branch<'_, O, E> {
        match &self.slot {
            Slot::Ok(value) => Branch::Ok(value),
            Slot::Error(value) => Branch::Error(value),
        }
    }

    /// Transforms the ok payload with `mapper`, keeping the error type.
    ///
    /// An error outcome is passed through with its payload untouched and
    /// `mapper` is never called. `mapper` must not itself fail; branch on
    /// [`get_ok`](Self::get_ok) first when the transformation is fallible.
    pub fn map<N, F>(self, mapper: F) -> Outcome<N, E>
    where
        F: FnOnce(O) -> N,
    {
        match self.slot {
            Slot::Ok(value) => Outcome::ok(mapper(value)),
            Slot::Error(value) => Outcome::error(value),
        }
    }

    /// Like [`map`](Self::map), but reads the ok payload by reference and
    /// leaves `self` intact. The error payload is cloned into the result.
    pub fn map_ref<N, F>(&self, mapper: F) -> Outcome<N, E>
    where
        E: Clone,
        F: FnOnce(&O) -> N,
    {
        match &self.slot {
            Slot::Ok(value) => Outcome::ok(mapper(value)),
            Slot::Error(value) => Outcome::error(value.clone()),
        }
    }

    /// Transforms the error payload with `mapper`, keeping the ok type.
    pub fn map_error<F2, G>(self, mapper: G) -> Outcome<O, F2>
    where
        G: FnOnce(E) -> F2,
    {
        match self.slot {
            Slot::Ok(value) => Outcome::ok(value),
            Slot::Error(value) => Outcome::error(mapper(value)),
        }
    }

    /// Consumes the outcome, returning the ok payload if present.
    #[must_use]
    pub fn into_ok(self) -> Option<O> {
        match self.slot {
            Slot::Ok(value) => Some(value),
            Slot::Error(_) => None,
        }
    }

    /// Consumes the outcome, returning the error payload if present.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self.slot {
            Slot::Ok(_) => None,
            Slot::Error(value) => Some(value),
        }
    }

    /// Consumes the outcome, returning the ok payload.
    ///
    /// # Errors
    ///
    /// Returns `BranchMismatch::ExpectedOk` if this is an error outcome.
    pub fn try_into_ok(self) -> Result<O, BranchMismatch> {
        self.into_ok().ok_or(BranchMismatch::ExpectedOk)
    }

    /// Consumes the outcome, returning the error payload.
    ///
    /// # Errors
    ///
    /// Returns `BranchMismatch::ExpectedError` if this is an ok outcome.
    pub fn try_into_error(self) -> Result<E, BranchMismatch> {
        self.into_error().ok_or(BranchMismatch::ExpectedError)
    }

    /// Converts into a standard `Result` for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns the error payload if this is an error outcome.
    pub fn into_result(self) -> Result<O, E> {
        match self.slot {
            Slot::Ok(value) => Ok(value),
            Slot::Error(value) => Err(value),
        }
    }

    /// Logs the error payload at `warn` level, tagged with `context`, and
    /// returns the outcome unchanged. Ok outcomes are not logged.
    pub fn inspect_error(self, context: &str) -> Self
    where
        E: fmt::Debug,
    {
        if let Slot::Error(error) = &self.slot {
            tracing::warn!(context, ?error, "outcome carries an error");
        }
        self
    }
}

impl<O, E> From<Result<O, E>> for Outcome<O, E> {
    fn from(result: Result<O, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(value) => Self::error(value),
        }
    }
}

impl<O, E> From<Outcome<O, E>> for Result<O, E> {
    fn from(outcome: Outcome<O, E>) -> Self {
        outcome.into_result()
    }
}
