use thiserror::Error;

/// Errors that can occur when describing a hyperelasticity problem.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("a static problem has no end time or time step")]
    StaticRegime,

    #[error("end time must be finite and positive, got {0}")]
    EndTime(f64),

    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f64),

    #[error("reference density must be finite and positive, got {0}")]
    ReferenceDensity(f64),
}
