/// A state that can be advanced in time using its derivative.
///
/// Implementing this trait lets the adaptive driver advance any state type
/// with a forward-Euler update, `state + derivative * dt`, without knowing
/// its layout. The state can be a single scalar, a fixed-size displacement
/// vector, or a user type holding several fields.
///
/// `Delta` is the type of the step. The adaptive driver uses `f64` seconds.
pub trait StepIntegrable<Delta> {
    /// The derivative of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state after a step of size `delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for the derivative of a [`StepIntegrable`] state.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: [f64; N], delta: f64) -> Self {
        let mut next = *self;
        for (value, rate) in next.iter_mut().zip(derivative) {
            *value += rate * delta;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Displacement and velocity of a single node.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Kinematics {
        u: [f64; 2],
        v: [f64; 2],
    }

    /// Velocity and acceleration of a single node.
    struct Rates {
        v: [f64; 2],
        a: [f64; 2],
    }

    impl StepIntegrable<f64> for Kinematics {
        type Derivative = Rates;

        fn step(&self, derivative: Rates, dt: f64) -> Self {
            Kinematics {
                u: self.u.step(derivative.v, dt),
                v: self.v.step(derivative.a, dt),
            }
        }
    }

    #[test]
    fn scalar_state() {
        let next = 1.0_f64.step(-2.0, 0.25);
        assert_relative_eq!(next, 0.5);
    }

    #[test]
    fn array_state() {
        let next = [1.0_f64, 2.0, 3.0].step([0.1, 0.2, 0.3], 10.0);
        assert_eq!(next, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn composite_state() {
        let node = Kinematics {
            u: [0.0, 0.0],
            v: [1.0, 0.0],
        };
        let rates = Rates {
            v: node.v,
            a: [0.0, -9.81],
        };

        let next = node.step(rates, 0.5);

        assert_relative_eq!(next.u[0], 0.5);
        assert_relative_eq!(next.u[1], 0.0);
        assert_relative_eq!(next.v[0], 1.0);
        assert_relative_eq!(next.v[1], -4.905);
    }
}
