use hyperstep_core::Snapshot;

/// Indicates how the simulation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end time.
    Complete,

    /// Ran out of steps before reaching the end time.
    MaxSteps,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an adaptive simulation.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the simulation terminated.
    pub status: Status,

    /// Snapshots from each step, including the initial state.
    pub history: Vec<Snapshot<I, O>>,

    /// Simulation time of each snapshot in `history`.
    pub times: Vec<f64>,

    /// Number of steps taken.
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the time of the last snapshot.
    #[must_use]
    pub fn final_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Returns the step sizes taken, one per step.
    #[must_use]
    pub fn step_sizes(&self) -> Vec<f64> {
        self.times.windows(2).map(|w| w[1] - w[0]).collect()
    }
}
