mod adaptive;
mod ode;

pub use adaptive::AdaptiveProblem;
pub use ode::OdeProblem;
