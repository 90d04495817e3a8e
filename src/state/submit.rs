//! Request state machine shared by all dashboard widgets.
//!
//! DESIGN
//! ======
//! One tagged variant replaces the loading/error/result flag trio so
//! impossible combinations (loading with a stale error shown) cannot be
//! represented. The generation counter makes superseded responses
//! detectable: a submission that was overtaken by a newer one resolves into
//! nothing instead of overwriting fresher state.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Lifecycle of one widget interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitState<T> {
    Idle,
    Submitting,
    Success(T),
    Failed(&'static str),
}

impl<T> Default for SubmitState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// A [`SubmitState`] paired with the generation of the request that may
/// currently be in flight.
#[derive(Clone, Debug)]
pub struct Submission<T> {
    state: SubmitState<T>,
    generation: u64,
}

impl<T> Default for Submission<T> {
    fn default() -> Self {
        Self {
            state: SubmitState::default(),
            generation: 0,
        }
    }
}

impl<T> Submission<T> {
    pub fn state(&self) -> &SubmitState<T> {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting)
    }

    pub fn success(&self) -> Option<&T> {
        match &self.state {
            SubmitState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&'static str> {
        match self.state {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start a new submission, clearing any prior result or error.
    ///
    /// Returns the generation to resolve with, or `None` when a request is
    /// already in flight (re-entrant submits are ignored).
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_submitting() {
            return None;
        }
        self.generation += 1;
        self.state = SubmitState::Submitting;
        Some(self.generation)
    }

    /// Settle the submission started with `generation`.
    ///
    /// Returns `false` (leaving state untouched) when the response is stale:
    /// a newer `begin` has happened since, or nothing is in flight.
    pub fn resolve(&mut self, generation: u64, result: Result<T, &'static str>) -> bool {
        if generation != self.generation || !self.is_submitting() {
            return false;
        }
        self.state = match result {
            Ok(value) => SubmitState::Success(value),
            Err(message) => SubmitState::Failed(message),
        };
        true
    }
}
