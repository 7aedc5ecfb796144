use thiserror::Error;

/// Everything the controller needs to choose the next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    /// Residual (error) estimate `R` for the step just taken.
    pub residual: f64,

    /// Stability factor `S` of the scheme.
    pub stability: f64,

    /// Error tolerance `TOL`.
    pub tolerance: f64,

    /// Previous step size.
    pub dt: f64,

    /// Current simulation time `t`.
    pub time: f64,

    /// Simulation end time `T`.
    pub end_time: f64,
}

/// Reasons an [`Input`] is rejected before any arithmetic is done.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InputError {
    #[error("residual must be finite and positive, got {0}")]
    Residual(f64),

    #[error("stability factor must be finite and positive, got {0}")]
    Stability(f64),

    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("previous time step must be finite and positive, got {0}")]
    TimeStep(f64),

    #[error("time bounds must be finite, got t = {time} and T = {end_time}")]
    NonFiniteTime { time: f64, end_time: f64 },

    #[error("simulation already finished: t = {time} is not before T = {end_time}")]
    Finished { time: f64, end_time: f64 },
}

impl Input {
    /// Checks every constraint on the inputs.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, checked in field order.
    pub fn validate(&self) -> Result<(), InputError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !positive(self.residual) {
            return Err(InputError::Residual(self.residual));
        }
        if !positive(self.stability) {
            return Err(InputError::Stability(self.stability));
        }
        if !positive(self.tolerance) {
            return Err(InputError::Tolerance(self.tolerance));
        }
        if !positive(self.dt) {
            return Err(InputError::TimeStep(self.dt));
        }
        if !self.time.is_finite() || !self.end_time.is_finite() {
            return Err(InputError::NonFiniteTime {
                time: self.time,
                end_time: self.end_time,
            });
        }
        if self.time >= self.end_time {
            return Err(InputError::Finished {
                time: self.time,
                end_time: self.end_time,
            });
        }
        Ok(())
    }

    /// Returns the time left before the end, `T - t`.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.end_time - self.time
    }
}
