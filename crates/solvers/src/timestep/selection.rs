/// The outcome of a time-step selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// The next step size, in `(0, T - t]`.
    pub dt: f64,

    /// Whether `dt` was snapped to land exactly on the end time.
    pub at_end: bool,

    /// The unsmoothed step implied by the error estimate.
    pub candidate: f64,

    /// The candidate blended with the previous step, before snapping.
    pub smoothed: f64,
}
