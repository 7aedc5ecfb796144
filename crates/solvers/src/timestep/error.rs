use thiserror::Error;

use super::InputError;

/// Errors that can occur when selecting a time step.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("degenerate time step: {dt}")]
    DegenerateStep { dt: f64 },
}
