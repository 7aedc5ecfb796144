use crate::{DerivativeOf, StepIntegrable};

/// Adapts a model to time integration.
///
/// An ODE problem pulls the integrable state out of a model input, computes
/// its derivative from the input and the model output, and rebuilds a model
/// input once the state has been stepped. Integrators only ever see the
/// [`StepIntegrable`] state, so the model input can carry anything else it
/// needs (material parameters, loads, the current time).
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state from model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the derivative of the state from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds the next model input from a stepped state.
    ///
    /// `base` is the input the step started from and `delta` is the step
    /// that was taken, so implementations advance their clock by `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the state.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;

    /// Adjusts an input after its step has been taken.
    ///
    /// Use this for constraint enforcement or discrete updates such as
    /// re-applying Dirichlet values at the new time. The default returns the
    /// input unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if finalization fails.
    fn finalize_step(
        &self,
        next_input: Self::Input,
        _prev_input: &Self::Input,
        _prev_output: &Self::Output,
        _step_delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error> {
        Ok(next_input)
    }
}
