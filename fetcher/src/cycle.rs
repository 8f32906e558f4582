use derive_more::Display;
use std::cell::Cell;

/// Identifies one fetch cycle within a hook instance. Later cycles have
/// larger generations.
#[derive(
    Debug, Display, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Generation(pub u64);

/// Hands out increasing generations. Owned by a single hook instance.
#[derive(Debug, Default)]
pub struct GenerationCounter(Cell<u64>);

impl GenerationCounter {
    pub fn next(&self) -> Generation {
        let next = self.0.get() + 1;
        self.0.set(next);
        Generation(next)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// State of a fetch hook: the last payload, the in-flight flag, and the
/// last error.
///
/// Only the most recently begun generation may settle the state, so a
/// slow response that lands after a newer cycle started is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCycle<T> {
    data: Option<T>,
    error: Option<String>,
    phase: Phase,
    latest: Generation,
}

impl<T> Default for FetchCycle<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            phase: Phase::Idle,
            latest: Generation::default(),
        }
    }
}

impl<T> FetchCycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` for `generation`, clearing the previous error.
    pub fn begin(&mut self, generation: Generation) {
        if generation < self.latest {
            tracing::debug!(%generation, latest = %self.latest, "Ignoring out-of-order begin");
            return;
        }
        self.latest = generation;
        self.phase = Phase::Loading;
        self.error = None;
    }

    /// Apply the result of `generation`. Returns false if a newer cycle has
    /// begun since, in which case nothing changes.
    ///
    /// `Ok(None)` means the response had no payload and clears `data`. An
    /// error keeps the previous `data`.
    pub fn settle(
        &mut self,
        generation: Generation,
        outcome: Result<Option<T>, String>,
    ) -> bool {
        if generation != self.latest || self.phase != Phase::Loading {
            tracing::debug!(%generation, latest = %self.latest, "Dropping stale fetch result");
            return false;
        }

        match outcome {
            Ok(data) => {
                self.data = data;
                self.error = None;
                self.phase = Phase::Succeeded;
            }
            Err(e) => {
                self.error = Some(e);
                self.phase = Phase::Failed;
            }
        }
        true
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
