//! Adaptive forward Euler driver for transient problems.
//!
//! Each step advances the state with explicit Euler using the current step
//! size, re-estimates the residual and stability factor on the new snapshot,
//! and asks the [`timestep`] controller for the next step:
//!
//! ```text
//! state_{n+1} = state_n + derivative_n * dt_n
//! dt_{n+1}    = timestep::select(R_{n+1}, S_{n+1}, TOL, dt_n, t_{n+1}, T)
//! ```
//!
//! The run ends when the controller snaps a step onto the end time and that
//! step has been taken. The initial step is clamped with the same snap rule
//! (but not smoothed), so a run whose first step already covers most of the
//! interval finishes in one step.
//!
//! # Example
//!
//! ```ignore
//! use hyperstep_solvers::{timestep, transient::adaptive};
//!
//! let settings = adaptive::Settings::new(2.0, 1e-3, 1e-2)?;
//! let solution = adaptive::solve_unobserved(
//!     &model,
//!     &problem,
//!     initial,
//!     &settings,
//!     &timestep::Config::default(),
//! )?;
//!
//! for (t, snapshot) in solution.times.iter().zip(&solution.history) {
//!     println!("t={t}: {:?}", snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod settings;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use settings::{Settings, SettingsError};
pub use solution::{Solution, Status};

use hyperstep_core::{AdaptiveProblem, Model, Observer, Snapshot, StepIntegrable};

use crate::timestep::{self, InputError};

/// Integrates an adaptive problem from `initial` to the end time.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state and after each
/// step, and may return [`Action::StopEarly`] to end the run. An action
/// returned for the final step is ignored because the run is already
/// complete.
///
/// # Errors
///
/// Returns an error if the initial time is not before the end time, if the
/// model or problem fails, or if the controller rejects an estimate (for
/// example a zero residual).
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    settings: &Settings,
    config: &timestep::Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: AdaptiveProblem<Input = M::Input, Output = M::Output>,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let end_time = settings.end_time();
    let mut time = problem.time(&initial).map_err(Error::problem)?;
    check_start(time, end_time)?;

    let initial_output = model.call(&initial).map_err(Error::model)?;
    let mut current = Snapshot::new(initial, initial_output);

    let mut history = Vec::new();
    let mut times = Vec::new();
    history.push(current.clone());
    times.push(time);

    let event = Event {
        step: 0,
        time,
        dt: 0.0,
        next: None,
        snapshot: current.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        log::debug!("Stopped by observer before the first step");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            times,
            steps: 0,
        });
    }

    let (mut dt, mut at_end) = timestep::snap(settings.initial_dt(), end_time - time, config);

    for step in 1..=settings.max_steps() {
        // Step state forward.
        let state = problem.state(&current.input).map_err(Error::problem)?;
        let derivative = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::problem)?;
        let next_state = state.step(derivative, dt);

        let next_input = problem
            .build_input(&current.input, &next_state, &dt)
            .map_err(Error::problem)?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &dt)
            .map_err(Error::problem)?;

        let next_output = model.call(&next_input).map_err(Error::model)?;
        let next = Snapshot::new(next_input, next_output);
        time = problem.time(&next.input).map_err(Error::problem)?;

        // Choose the following step unless this one landed on the end time.
        let selection = if at_end {
            None
        } else {
            let residual = problem
                .residual(&next.input, &next.output)
                .map_err(Error::problem)?;
            let stability = problem
                .stability_factor(&next.input, &next.output)
                .map_err(Error::problem)?;
            let input = timestep::Input {
                residual,
                stability,
                tolerance: settings.tolerance(),
                dt,
                time,
                end_time,
            };
            Some(timestep::select(&input, config)?)
        };

        log::trace!("Step {step}: t = {time:.6e}, dt = {dt:.6e}");

        history.push(next.clone());
        times.push(time);

        let event = Event {
            step,
            time,
            dt,
            next: selection,
            snapshot: next.clone(),
        };
        let action = observer.observe(&event);

        let Some(selection) = selection else {
            log::debug!("Reached end time t = {time:.6e} after {step} steps");
            return Ok(Solution {
                status: Status::Complete,
                history,
                times,
                steps: step,
            });
        };

        if let Some(Action::StopEarly) = action {
            log::debug!("Stopped by observer at t = {time:.6e} after {step} steps");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                times,
                steps: step,
            });
        }

        dt = selection.dt;
        at_end = selection.at_end;
        current = next;
    }

    log::debug!(
        "Stopped at t = {time:.6e} after the maximum of {} steps",
        settings.max_steps()
    );
    Ok(Solution {
        status: Status::MaxSteps,
        history,
        times,
        steps: settings.max_steps(),
    })
}

/// Integrates an adaptive problem without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    settings: &Settings,
    config: &timestep::Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: AdaptiveProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial, settings, config, ())
}

fn check_start(time: f64, end_time: f64) -> Result<(), timestep::Error> {
    if !time.is_finite() {
        return Err(InputError::NonFiniteTime { time, end_time }.into());
    }
    if time >= end_time {
        return Err(InputError::Finished { time, end_time }.into());
    }
    Ok(())
}
