use std::fmt;

/// How time enters a hyperelasticity problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Equilibrium under fixed loads, no time dependence.
    Static,

    /// Loads vary in time but inertia is neglected.
    QuasiStatic,

    /// Loads vary in time and the inertia term is included.
    Dynamic,
}

impl Regime {
    /// Returns `true` if the inertia term is to be considered.
    #[must_use]
    pub fn is_dynamic(self) -> bool {
        matches!(self, Self::Dynamic)
    }

    /// Returns `true` if the problem advances in time.
    #[must_use]
    pub fn is_transient(self) -> bool {
        !matches!(self, Self::Static)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Static => "static",
            Self::QuasiStatic => "quasi-static",
            Self::Dynamic => "dynamic",
        };
        f.write_str(name)
    }
}
