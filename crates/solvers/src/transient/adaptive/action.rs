/// Control actions supported by the adaptive driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the simulation and return the history so far.
    StopEarly,
}
