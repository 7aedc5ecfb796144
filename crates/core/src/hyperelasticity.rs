//! Declarative descriptions of hyperelasticity problems.
//!
//! A [`HyperelasticityProblem`] collects everything a finite-element solver
//! needs to know about a problem besides the mesh and the material law: how
//! time enters ([`Regime`]), the time interval, loads, initial conditions,
//! Dirichlet conditions, and an optional goal functional.
//!
//! Every term has a zero-valued default, so a problem only overrides what it
//! uses:
//!
//! ```
//! use hyperstep_core::hyperelasticity::{DirichletCondition, HyperelasticityProblem};
//!
//! let problem = HyperelasticityProblem::<3>::dynamic(2.0, 0.1)?
//!     .with_body_force(|_t| [0.0, 0.0, -9.81])
//!     .with_boundary_condition(DirichletCondition::clamped(1));
//!
//! assert!(problem.is_dynamic());
//! assert_eq!(problem.surface_force(0.5), [0.0; 3]);
//! # Ok::<(), hyperstep_core::hyperelasticity::ProblemError>(())
//! ```
//!
//! Assembling and solving the resulting variational problem is the job of an
//! external finite-element library.

mod dirichlet;
mod error;
mod regime;

pub use dirichlet::{DirichletCondition, Prescribed};
pub use error::ProblemError;
pub use regime::Regime;

use std::{fmt, sync::Arc};

/// A vector-valued function of time, such as a body force or a boundary value.
pub type Load<const D: usize> = Arc<dyn Fn(f64) -> [f64; D] + Send + Sync>;

/// A goal functional evaluated on nodal displacements.
pub type Functional<const D: usize> = Arc<dyn Fn(&[[f64; D]]) -> f64 + Send + Sync>;

/// A hyperelasticity problem in `D` spatial dimensions.
#[derive(Clone)]
pub struct HyperelasticityProblem<const D: usize> {
    regime: Regime,
    end_time: Option<f64>,
    time_step: Option<f64>,
    reference_density: f64,
    body_force: Option<Load<D>>,
    surface_force: Option<Load<D>>,
    initial_displacement: [f64; D],
    initial_velocity: [f64; D],
    boundary_conditions: Vec<DirichletCondition<D>>,
    functional: Option<Functional<D>>,
    reference: Option<f64>,
}

impl<const D: usize> HyperelasticityProblem<D> {
    /// Creates a static problem with all terms at their defaults.
    #[must_use]
    pub fn static_problem() -> Self {
        Self {
            regime: Regime::Static,
            end_time: None,
            time_step: None,
            reference_density: 1.0,
            body_force: None,
            surface_force: None,
            initial_displacement: [0.0; D],
            initial_velocity: [0.0; D],
            boundary_conditions: Vec::new(),
            functional: None,
            reference: None,
        }
    }

    /// Creates a time-dependent problem on `[0, end_time]`.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::StaticRegime`] if `regime` is [`Regime::Static`],
    /// or an error naming `end_time` or `time_step` if either is not finite
    /// and positive.
    pub fn transient(regime: Regime, end_time: f64, time_step: f64) -> Result<Self, ProblemError> {
        if !regime.is_transient() {
            return Err(ProblemError::StaticRegime);
        }
        if !end_time.is_finite() || end_time <= 0.0 {
            return Err(ProblemError::EndTime(end_time));
        }
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ProblemError::TimeStep(time_step));
        }

        Ok(Self {
            regime,
            end_time: Some(end_time),
            time_step: Some(time_step),
            ..Self::static_problem()
        })
    }

    /// Creates a quasi-static problem, see [`transient`](Self::transient).
    ///
    /// # Errors
    ///
    /// Returns an error if `end_time` or `time_step` is invalid.
    pub fn quasi_static(end_time: f64, time_step: f64) -> Result<Self, ProblemError> {
        Self::transient(Regime::QuasiStatic, end_time, time_step)
    }

    /// Creates a dynamic problem, see [`transient`](Self::transient).
    ///
    /// # Errors
    ///
    /// Returns an error if `end_time` or `time_step` is invalid.
    pub fn dynamic(end_time: f64, time_step: f64) -> Result<Self, ProblemError> {
        Self::transient(Regime::Dynamic, end_time, time_step)
    }

    /// Sets the reference (undeformed) density.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::ReferenceDensity`] if `density` is not finite
    /// and positive.
    pub fn with_reference_density(mut self, density: f64) -> Result<Self, ProblemError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ProblemError::ReferenceDensity(density));
        }
        self.reference_density = density;
        Ok(self)
    }

    /// Overrides the body force `B(t)`.
    #[must_use]
    pub fn with_body_force<F>(mut self, force: F) -> Self
    where
        F: Fn(f64) -> [f64; D] + Send + Sync + 'static,
    {
        self.body_force = Some(Arc::new(force));
        self
    }

    /// Overrides the surface traction `T(t)`.
    #[must_use]
    pub fn with_surface_force<F>(mut self, force: F) -> Self
    where
        F: Fn(f64) -> [f64; D] + Send + Sync + 'static,
    {
        self.surface_force = Some(Arc::new(force));
        self
    }

    /// Overrides the initial displacement and velocity.
    #[must_use]
    pub fn with_initial_conditions(mut self, displacement: [f64; D], velocity: [f64; D]) -> Self {
        self.initial_displacement = displacement;
        self.initial_velocity = velocity;
        self
    }

    /// Adds a Dirichlet condition on the displacement.
    #[must_use]
    pub fn with_boundary_condition(mut self, condition: DirichletCondition<D>) -> Self {
        self.boundary_conditions.push(condition);
        self
    }

    /// Sets the goal functional and, optionally, its known reference value.
    #[must_use]
    pub fn with_functional<F>(mut self, functional: F, reference: Option<f64>) -> Self
    where
        F: Fn(&[[f64; D]]) -> f64 + Send + Sync + 'static,
    {
        self.functional = Some(Arc::new(functional));
        self.reference = reference;
        self
    }

    #[must_use]
    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// Returns `true` if the inertia term is to be considered.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.regime.is_dynamic()
    }

    /// Returns the end time, or `None` for a static problem.
    #[must_use]
    pub fn end_time(&self) -> Option<f64> {
        self.end_time
    }

    /// Returns the nominal time step, or `None` for a static problem.
    #[must_use]
    pub fn time_step(&self) -> Option<f64> {
        self.time_step
    }

    #[must_use]
    pub fn reference_density(&self) -> f64 {
        self.reference_density
    }

    /// Returns the body force at time `t`.
    ///
    /// Static problems have no clock and are evaluated at `t = 0.0`.
    #[must_use]
    pub fn body_force(&self, t: f64) -> [f64; D] {
        self.body_force.as_ref().map_or([0.0; D], |f| f(t))
    }

    /// Returns the surface traction at time `t`.
    #[must_use]
    pub fn surface_force(&self, t: f64) -> [f64; D] {
        self.surface_force.as_ref().map_or([0.0; D], |f| f(t))
    }

    /// Returns the initial displacement and velocity.
    #[must_use]
    pub fn initial_conditions(&self) -> ([f64; D], [f64; D]) {
        (self.initial_displacement, self.initial_velocity)
    }

    #[must_use]
    pub fn boundary_conditions(&self) -> &[DirichletCondition<D>] {
        &self.boundary_conditions
    }

    /// Evaluates every Dirichlet condition at time `t` as `(marker, value)` pairs.
    #[must_use]
    pub fn boundary_values(&self, t: f64) -> Vec<(usize, [f64; D])> {
        self.boundary_conditions
            .iter()
            .map(|bc| (bc.marker(), bc.value_at(t)))
            .collect()
    }

    /// Evaluates the goal functional, or `None` if none is set.
    #[must_use]
    pub fn functional(&self, displacement: &[[f64; D]]) -> Option<f64> {
        self.functional.as_ref().map(|f| f(displacement))
    }

    /// Returns the reference value of the goal functional, if known.
    #[must_use]
    pub fn reference(&self) -> Option<f64> {
        self.reference
    }

    /// Returns `|functional(u) - reference|` when both are available.
    #[must_use]
    pub fn functional_error(&self, displacement: &[[f64; D]]) -> Option<f64> {
        let value = self.functional(displacement)?;
        let reference = self.reference?;
        Some((value - reference).abs())
    }
}

impl<const D: usize> Default for HyperelasticityProblem<D> {
    fn default() -> Self {
        Self::static_problem()
    }
}

impl<const D: usize> fmt::Display for HyperelasticityProblem<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.regime {
            Regime::Static => f.write_str("Static hyperelasticity problem"),
            regime => write!(f, "Hyperelasticity problem ({regime})"),
        }
    }
}

impl<const D: usize> fmt::Debug for HyperelasticityProblem<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HyperelasticityProblem")
            .field("regime", &self.regime)
            .field("end_time", &self.end_time)
            .field("time_step", &self.time_step)
            .field("reference_density", &self.reference_density)
            .field("body_force", &self.body_force.is_some())
            .field("surface_force", &self.surface_force.is_some())
            .field("initial_displacement", &self.initial_displacement)
            .field("initial_velocity", &self.initial_velocity)
            .field("boundary_conditions", &self.boundary_conditions)
            .field("functional", &self.functional.is_some())
            .field("reference", &self.reference)
            .finish()
    }
}
