use hyperstep_core::hyperelasticity::HyperelasticityProblem;
use thiserror::Error;

/// Run settings for the adaptive driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    end_time: f64,
    initial_dt: f64,
    tolerance: f64,
    max_steps: usize,
}

/// Errors that can occur when validating adaptive driver settings.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SettingsError {
    #[error("end time must be finite, got {0}")]
    EndTime(f64),

    #[error("initial time step must be finite and positive, got {0}")]
    InitialStep(f64),

    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max_steps must be at least one")]
    MaxSteps,

    #[error("a static problem has no time interval to step through")]
    NotTransient,
}

impl Settings {
    /// Step limit used unless [`with_max_steps`](Self::with_max_steps) overrides it.
    pub const DEFAULT_MAX_STEPS: usize = 10_000;

    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `end_time` is not finite, or if `initial_dt` or
    /// `tolerance` is not finite and positive.
    pub fn new(end_time: f64, initial_dt: f64, tolerance: f64) -> Result<Self, SettingsError> {
        if !end_time.is_finite() {
            return Err(SettingsError::EndTime(end_time));
        }
        if !initial_dt.is_finite() || initial_dt <= 0.0 {
            return Err(SettingsError::InitialStep(initial_dt));
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(SettingsError::Tolerance(tolerance));
        }

        Ok(Self {
            end_time,
            initial_dt,
            tolerance,
            max_steps: Self::DEFAULT_MAX_STEPS,
        })
    }

    /// Takes the end time and initial step from a transient problem description.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotTransient`] for a static problem, or a
    /// validation error from [`new`](Self::new).
    pub fn for_problem<const D: usize>(
        problem: &HyperelasticityProblem<D>,
        tolerance: f64,
    ) -> Result<Self, SettingsError> {
        match (problem.end_time(), problem.time_step()) {
            (Some(end_time), Some(time_step)) => Self::new(end_time, time_step, tolerance),
            _ => Err(SettingsError::NotTransient),
        }
    }

    /// Sets the maximum number of steps.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MaxSteps`] if `max_steps` is zero.
    pub fn with_max_steps(mut self, max_steps: usize) -> Result<Self, SettingsError> {
        if max_steps == 0 {
            return Err(SettingsError::MaxSteps);
        }
        self.max_steps = max_steps;
        Ok(self)
    }

    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    #[must_use]
    pub fn initial_dt(&self) -> f64 {
        self.initial_dt
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates() {
        assert!(Settings::new(1.0, 0.1, 1e-3).is_ok());
        assert!(matches!(
            Settings::new(f64::NAN, 0.1, 1e-3),
            Err(SettingsError::EndTime(_))
        ));
        assert_eq!(
            Settings::new(1.0, 0.0, 1e-3),
            Err(SettingsError::InitialStep(0.0))
        );
        assert_eq!(
            Settings::new(1.0, 0.1, -1.0),
            Err(SettingsError::Tolerance(-1.0))
        );
    }

    #[test]
    fn max_steps_must_be_positive() {
        let settings = Settings::new(1.0, 0.1, 1e-3).unwrap();
        assert_eq!(settings.max_steps(), Settings::DEFAULT_MAX_STEPS);
        assert_eq!(settings.with_max_steps(0), Err(SettingsError::MaxSteps));
        assert_eq!(settings.with_max_steps(7).unwrap().max_steps(), 7);
    }

    #[test]
    fn seeded_from_transient_problem() {
        let problem = HyperelasticityProblem::<3>::dynamic(4.0, 0.05).unwrap();
        let settings = Settings::for_problem(&problem, 1e-4).unwrap();

        assert_eq!(settings.end_time(), 4.0);
        assert_eq!(settings.initial_dt(), 0.05);
        assert_eq!(settings.tolerance(), 1e-4);
    }

    #[test]
    fn static_problem_has_no_settings() {
        let problem = HyperelasticityProblem::<3>::static_problem();
        assert_eq!(
            Settings::for_problem(&problem, 1e-4),
            Err(SettingsError::NotTransient)
        );
    }
}
