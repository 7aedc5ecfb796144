//! Adaptive time-step control and transient drivers for hyperstep.
//!
//! # Modules
//!
//! - [`timestep`] — selects the next step size from a residual estimate,
//!   smoothing the change and snapping onto the end time
//! - [`transient`] — drivers that advance a model through time, currently
//!   [`transient::adaptive`]
//!
//! Diagnostics go through the [`log`] facade; install a logger such as
//! `env_logger` in the binary to see them.

pub mod timestep;
pub mod transient;
