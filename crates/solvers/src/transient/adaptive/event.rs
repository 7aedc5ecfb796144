use hyperstep_core::Snapshot;

use crate::timestep::Selection;

/// Event emitted by the adaptive driver for each snapshot.
///
/// Step 0 is the initial state. Steps 1..N follow each accepted step.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number (0 for the initial state).
    pub step: usize,

    /// Simulation time of the snapshot.
    pub time: f64,

    /// Step size taken to reach this snapshot (0.0 for the initial state).
    pub dt: f64,

    /// The step chosen for the next iteration.
    ///
    /// `None` for the initial state and for the final step that lands on the
    /// end time.
    pub next: Option<Selection>,

    /// Snapshot of the model input and output at this step.
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Event<I, O> {
    /// Returns `true` if this snapshot lies on the end time.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.step > 0 && self.next.is_none()
    }
}
