/// A callable model that maps a typed input to a typed output.
///
/// In a transient simulation the input typically carries the current time and
/// state (displacement, velocity) and the output carries whatever the model
/// derives from them: rates, residual norms, stresses.
///
/// Models must be deterministic. The adaptive driver re-reads outputs to
/// estimate residuals and assumes a repeated call gives the same answer.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
