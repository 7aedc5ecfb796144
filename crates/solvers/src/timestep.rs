//! Adaptive time-step selection.
//!
//! # Algorithm
//!
//! Given a residual estimate `R`, a stability factor `S`, a tolerance `TOL`,
//! the previous step `dt`, the current time `t`, and the end time `T`:
//!
//! ```text
//! candidate = safety_factor * TOL / (C * S * R)
//! smoothed  = (1 + c) * dt * candidate / (dt + c * candidate)
//! dt_new    = T - t     if smoothed > snap_fraction * (T - t)
//!             smoothed  otherwise
//! ```
//!
//! where `C` is the interpolation constant and `c` the conservation factor
//! (see [`Config`]). The blend is a weighted harmonic mean of the previous
//! and candidate steps. It leans toward the smaller of the two, which damps
//! step-size chatter from one step to the next. Snapping avoids leaving a
//! tiny final step: once the step would cover most of what remains, it is
//! stretched to land exactly on `T` and [`Selection::at_end`] is set.
//!
//! Smoothing happens before snapping, and the snap test compares the
//! smoothed step. The blend is evaluated as
//! `(1 + c) / (1 / candidate + c / dt)`, which is the same value but stays
//! finite when `dt * candidate` would overflow.
//!
//! # Entry points
//!
//! - [`compute`] — the pure calculation, no side effects
//! - [`select`] — [`compute`] plus diagnostics through the [`log`] facade
//! - [`compute_timestep`] — [`select`] with scalar arguments and the default [`Config`]
//!
//! The controller holds no state. Callers thread `dt` and `t` from one call
//! to the next.
//!
//! # Errors
//!
//! Inputs are validated before any arithmetic; see [`InputError`]. A result
//! that still comes out non-positive or non-finite (for example after
//! overflow with extreme inputs) is reported as [`Error::DegenerateStep`]
//! rather than returned.

mod config;
mod error;
mod input;
mod selection;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use input::{Input, InputError};
pub use selection::Selection;

/// Selects the next time step without emitting diagnostics.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if any input violates its constraint, or
/// [`Error::DegenerateStep`] if the resulting step is not finite and positive.
pub fn compute(input: &Input, config: &Config) -> Result<Selection, Error> {
    input.validate()?;

    let candidate = config.safety_factor() * input.tolerance
        / (config.interpolation_constant() * input.stability * input.residual);

    // Harmonic form of (1 + c) * dt * candidate / (dt + c * candidate).
    // The product form overflows for large but finite steps.
    let c = config.conservation();
    let smoothed = (1.0 + c) / (1.0 / candidate + c / input.dt);
    if !smoothed.is_finite() || smoothed <= 0.0 {
        return Err(Error::DegenerateStep { dt: smoothed });
    }

    let (dt, at_end) = snap(smoothed, input.remaining(), config);
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::DegenerateStep { dt });
    }

    Ok(Selection {
        dt,
        at_end,
        candidate,
        smoothed,
    })
}

/// Selects the next time step and logs the decision.
///
/// Emits an `info` record when the step snaps to the end time (with the
/// smoothed step and the remaining interval) and a `debug` record for every
/// change (with the previous and the new step).
///
/// # Errors
///
/// Same as [`compute`].
pub fn select(input: &Input, config: &Config) -> Result<Selection, Error> {
    let selection = compute(input, config)?;

    if selection.at_end {
        log::info!(
            "Close to t = T, snapping time step to end time: {:.5e} --> {:.5e}",
            selection.smoothed,
            selection.dt,
        );
    }
    log::debug!(
        "Changing time step: {:.5e} --> {:.5e}",
        input.dt,
        selection.dt
    );

    Ok(selection)
}

/// Computes the next time step from scalar arguments using [`Config::default`].
///
/// Returns `(dt_new, at_end)`.
///
/// # Errors
///
/// Same as [`compute`].
pub fn compute_timestep(
    residual: f64,
    stability: f64,
    tolerance: f64,
    dt: f64,
    time: f64,
    end_time: f64,
) -> Result<(f64, bool), Error> {
    let input = Input {
        residual,
        stability,
        tolerance,
        dt,
        time,
        end_time,
    };
    let selection = select(&input, &Config::default())?;
    Ok((selection.dt, selection.at_end))
}

/// Stretches `dt` to `remaining` if it covers more than the snap fraction of it.
pub(crate) fn snap(dt: f64, remaining: f64, config: &Config) -> (f64, bool) {
    if dt > config.snap_fraction() * remaining {
        (remaining, true)
    } else {
        (dt, false)
    }
}
