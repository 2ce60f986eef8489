//! Recording mapper — observes which values a mapping closure receives.

use std::sync::Mutex;

/// Records every value passed through closures built by [`wrap`](Self::wrap).
///
/// Used to assert that a mapper ran exactly once with the ok payload, or was
/// never called at all for an error outcome.
#[derive(Debug, Default)]
pub struct RecordingMapper<T> {
    calls: Mutex<Vec<T>>,
}

impl<T: Clone> RecordingMapper<T> {
    /// Create a mapper with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Wraps `f` so that each input is recorded before `f` runs.
    ///
    /// # Panics
    ///
    /// The returned closure panics if the internal mutex is poisoned.
    pub fn wrap<U, F>(&self, f: F) -> impl FnOnce(T) -> U
    where
        F: FnOnce(T) -> U,
    {
        move |input: T| {
            self.calls.lock().unwrap().push(input.clone());
            f(input)
        }
    }

    /// Returns a snapshot of all recorded inputs, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns how many times a wrapped closure was invoked.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}
