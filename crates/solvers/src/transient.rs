//! Transient drivers that advance a model through time.
//!
//! - [`adaptive`] — forward Euler with step sizes chosen by the [`timestep`]
//!   controller
//!
//! [`timestep`]: crate::timestep

pub mod adaptive;
