use std::{fmt, sync::Arc};

use super::Load;

/// A prescribed displacement value.
#[derive(Clone)]
pub enum Prescribed<const D: usize> {
    /// The same displacement at every time.
    Fixed([f64; D]),

    /// A displacement that depends on time.
    Varying(Load<D>),
}

impl<const D: usize> Prescribed<D> {
    /// Evaluates the prescribed displacement at time `t`.
    #[must_use]
    pub fn at(&self, t: f64) -> [f64; D] {
        match self {
            Self::Fixed(value) => *value,
            Self::Varying(f) => f(t),
        }
    }
}

impl<const D: usize> fmt::Debug for Prescribed<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Varying(_) => f.write_str("Varying(..)"),
        }
    }
}

/// A Dirichlet condition on the displacement field.
///
/// The boundary is identified by an integer marker, the same way a mesh
/// library tags facets. Resolving markers to degrees of freedom is left to
/// the finite-element library.
#[derive(Debug, Clone)]
pub struct DirichletCondition<const D: usize> {
    marker: usize,
    value: Prescribed<D>,
}

impl<const D: usize> DirichletCondition<D> {
    /// Fixes the boundary `marker` to `value`.
    #[must_use]
    pub fn fixed(marker: usize, value: [f64; D]) -> Self {
        Self {
            marker,
            value: Prescribed::Fixed(value),
        }
    }

    /// Clamps the boundary `marker` to zero displacement.
    #[must_use]
    pub fn clamped(marker: usize) -> Self {
        Self::fixed(marker, [0.0; D])
    }

    /// Prescribes a time-dependent displacement on the boundary `marker`.
    #[must_use]
    pub fn varying<F>(marker: usize, value: F) -> Self
    where
        F: Fn(f64) -> [f64; D] + Send + Sync + 'static,
    {
        Self {
            marker,
            value: Prescribed::Varying(Arc::new(value)),
        }
    }

    #[must_use]
    pub fn marker(&self) -> usize {
        self.marker
    }

    #[must_use]
    pub fn prescribed(&self) -> &Prescribed<D> {
        &self.value
    }

    /// Evaluates the prescribed displacement at time `t`.
    #[must_use]
    pub fn value_at(&self, t: f64) -> [f64; D] {
        self.value.at(t)
    }
}
