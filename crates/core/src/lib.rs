//! Core traits and types for hyperstep.
//!
//! This crate defines the shared abstractions that the time-step controller,
//! the adaptive driver, and user models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * dt`
//! - [`OdeProblem`], [`AdaptiveProblem`] — problem traits that adapt model
//!   inputs and outputs to a time integrator and supply the residual and
//!   stability estimates that drive step-size selection
//! - [`hyperelasticity`] — a declarative description of static, quasi-static,
//!   and dynamic hyperelasticity problems

pub mod hyperelasticity;

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::{AdaptiveProblem, OdeProblem};
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
