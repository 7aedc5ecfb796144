use super::OdeProblem;

/// An ODE problem that can estimate its own error, enabling adaptive stepping.
///
/// After each accepted step the adaptive driver asks the problem for a
/// residual `R` and a stability factor `S` evaluated on the new snapshot.
/// Together with a tolerance these fix the next step size:
///
/// ```text
/// dt_candidate = safety_factor * TOL / (C * S * R)
/// ```
///
/// so a larger residual or stability factor shrinks the step.
///
/// Time is measured in the same `f64` units as the step size.
pub trait AdaptiveProblem: OdeProblem<Delta = f64> {
    /// Returns the simulation time stored in a model input.
    ///
    /// # Errors
    ///
    /// Returns [`OdeProblem::Error`] if the time cannot be read.
    fn time(&self, input: &Self::Input) -> Result<f64, Self::Error>;

    /// Estimates the residual (local error indicator) at a snapshot.
    ///
    /// Must be strictly positive; zero or negative values are rejected by the
    /// step-size controller.
    ///
    /// # Errors
    ///
    /// Returns [`OdeProblem::Error`] if the estimate cannot be computed.
    fn residual(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;

    /// Estimates the stability factor of the scheme at a snapshot.
    ///
    /// Defaults to `1.0`, which leaves step selection to the residual alone.
    ///
    /// # Errors
    ///
    /// Returns [`OdeProblem::Error`] if the estimate cannot be computed.
    fn stability_factor(
        &self,
        _input: &Self::Input,
        _output: &Self::Output,
    ) -> Result<f64, Self::Error> {
        Ok(1.0)
    }
}
