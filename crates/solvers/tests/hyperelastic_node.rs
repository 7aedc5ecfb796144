//! Drives a single dynamic node, described by a `HyperelasticityProblem`,
//! through the adaptive driver.

use std::convert::Infallible;

use approx::assert_relative_eq;
use hyperstep_core::{
    AdaptiveProblem, DerivativeOf, Model, OdeProblem,
    hyperelasticity::HyperelasticityProblem,
};
use hyperstep_solvers::{
    timestep,
    transient::adaptive::{self, Event, Settings, SettingsError, Status},
};

#[derive(Debug, Clone, Copy)]
struct NodeInput {
    /// Displacement and velocity.
    state: [f64; 2],
    time: f64,
}

#[derive(Debug, Clone, Copy)]
struct NodeOutput {
    acceleration: f64,
}

/// A lumped node on a linear spring, loaded by the problem's forces.
struct Node {
    problem: HyperelasticityProblem<1>,
    stiffness: f64,
}

impl Model for Node {
    type Input = NodeInput;
    type Output = NodeOutput;
    type Error = Infallible;

    fn call(&self, input: &NodeInput) -> Result<NodeOutput, Self::Error> {
        let [u, _] = input.state;
        let load = self.problem.body_force(input.time)[0] + self.problem.surface_force(input.time)[0];
        Ok(NodeOutput {
            acceleration: (load - self.stiffness * u) / self.problem.reference_density(),
        })
    }
}

struct NodeMotion;

impl OdeProblem for NodeMotion {
    type Input = NodeInput;
    type Output = NodeOutput;
    type Delta = f64;
    type State = [f64; 2];
    type Error = Infallible;

    fn state(&self, input: &NodeInput) -> Result<[f64; 2], Self::Error> {
        Ok(input.state)
    }

    fn derivative(
        &self,
        input: &NodeInput,
        output: &NodeOutput,
    ) -> Result<DerivativeOf<[f64; 2], f64>, Self::Error> {
        Ok([input.state[1], output.acceleration])
    }

    fn build_input(
        &self,
        base: &NodeInput,
        state: &[f64; 2],
        delta: &f64,
    ) -> Result<NodeInput, Self::Error> {
        Ok(NodeInput {
            state: *state,
            time: base.time + delta,
        })
    }
}

impl AdaptiveProblem for NodeMotion {
    fn time(&self, input: &NodeInput) -> Result<f64, Self::Error> {
        Ok(input.time)
    }

    fn residual(&self, _input: &NodeInput, output: &NodeOutput) -> Result<f64, Self::Error> {
        // Floor keeps the estimate positive when the node passes equilibrium.
        Ok(output.acceleration.abs().max(1e-6))
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn falling_node() -> HyperelasticityProblem<1> {
    HyperelasticityProblem::dynamic(1.0, 0.01)
        .unwrap()
        .with_reference_density(2.0)
        .unwrap()
        .with_body_force(|_| [-9.81])
        .with_initial_conditions([0.0], [0.5])
}

#[test]
fn dynamic_node_reaches_end_time() {
    init_logger();

    let problem = falling_node();
    let settings = Settings::for_problem(&problem, 1e-2).unwrap();
    let (u0, v0) = problem.initial_conditions();
    let initial = NodeInput {
        state: [u0[0], v0[0]],
        time: 0.0,
    };
    let node = Node {
        problem,
        stiffness: 50.0,
    };

    let mut violations = Vec::new();
    let solution = adaptive::solve(
        &node,
        &NodeMotion,
        initial,
        &settings,
        &timestep::Config::default(),
        |event: &Event<NodeInput, NodeOutput>| {
            if let Some(next) = event.next {
                let remaining = settings.end_time() - event.time;
                if next.dt <= 0.0 || next.dt > remaining {
                    violations.push((event.step, next.dt, remaining));
                }
                if !next.at_end && next.dt > 0.9 * remaining {
                    violations.push((event.step, next.dt, remaining));
                }
            }
            None
        },
    )
    .expect("should integrate to the end time");

    assert!(violations.is_empty(), "{violations:?}");
    assert_eq!(solution.status, Status::Complete);
    assert_relative_eq!(solution.final_time().unwrap(), 1.0, max_relative = 1e-12);
    assert!(solution.steps > 10);

    // The node oscillates about its static equilibrium without blowing up.
    let equilibrium = -9.81 / 50.0;
    let last = solution.history.last().unwrap();
    assert!((last.input.state[0] - equilibrium).abs() < 0.5);
}

#[test]
fn static_problem_cannot_be_stepped() {
    let problem = HyperelasticityProblem::<1>::static_problem();
    assert_eq!(
        Settings::for_problem(&problem, 1e-2),
        Err(SettingsError::NotTransient)
    );
}

#[test]
fn tighter_tolerance_takes_more_steps() {
    let run = |tolerance: f64| {
        let problem = falling_node();
        let settings = Settings::for_problem(&problem, tolerance).unwrap();
        let node = Node {
            problem,
            stiffness: 50.0,
        };
        let initial = NodeInput {
            state: [0.0, 0.5],
            time: 0.0,
        };
        adaptive::solve_unobserved(
            &node,
            &NodeMotion,
            initial,
            &settings,
            &timestep::Config::default(),
        )
        .unwrap()
    };

    let loose = run(1e-1);
    let tight = run(1e-2);

    assert_eq!(loose.status, Status::Complete);
    assert_eq!(tight.status, Status::Complete);
    assert!(tight.steps > loose.steps);
}
