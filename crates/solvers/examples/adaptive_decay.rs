//! Integrates `y' = -k y` with adaptive step sizes and prints each step.
//!
//! Run with `RUST_LOG=debug` to also see the controller's step changes:
//!
//! ```text
//! RUST_LOG=debug cargo run -p hyperstep-solvers --example adaptive_decay
//! ```

use std::convert::Infallible;

use hyperstep_core::{AdaptiveProblem, DerivativeOf, Model, OdeProblem};
use hyperstep_solvers::{
    timestep,
    transient::adaptive::{self, Event, Settings},
};

#[derive(Debug, Clone, Copy)]
struct Input {
    y: f64,
    t: f64,
}

#[derive(Debug, Clone, Copy)]
struct Output {
    rate: f64,
}

struct Decay {
    k: f64,
}

impl Model for Decay {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Output, Self::Error> {
        Ok(Output {
            rate: -self.k * input.y,
        })
    }
}

struct DecayProblem;

impl OdeProblem for DecayProblem {
    type Input = Input;
    type Output = Output;
    type Delta = f64;
    type State = f64;
    type Error = Infallible;

    fn state(&self, input: &Input) -> Result<f64, Self::Error> {
        Ok(input.y)
    }

    fn derivative(
        &self,
        _input: &Input,
        output: &Output,
    ) -> Result<DerivativeOf<f64, f64>, Self::Error> {
        Ok(output.rate)
    }

    fn build_input(&self, base: &Input, state: &f64, delta: &f64) -> Result<Input, Self::Error> {
        Ok(Input {
            y: *state,
            t: base.t + delta,
        })
    }
}

impl AdaptiveProblem for DecayProblem {
    fn time(&self, input: &Input) -> Result<f64, Self::Error> {
        Ok(input.t)
    }

    fn residual(&self, _input: &Input, output: &Output) -> Result<f64, Self::Error> {
        Ok(output.rate.abs())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Settings::new(5.0, 1e-3, 1e-2)?;
    let config = timestep::Config::default();

    println!("{:>5} {:>12} {:>12} {:>12}", "step", "t", "dt", "y");
    let solution = adaptive::solve(
        &Decay { k: 1.0 },
        &DecayProblem,
        Input { y: 1.0, t: 0.0 },
        &settings,
        &config,
        |event: &Event<Input, Output>| {
            println!(
                "{:>5} {:>12.6} {:>12.6} {:>12.6}",
                event.step, event.time, event.dt, event.snapshot.input.y
            );
            None
        },
    )?;

    println!("{:?} after {} steps", solution.status, solution.steps);
    Ok(())
}
