//! Fixed-step trajectory propagation.
//!
//! Converts the initial elements to a state vector and integrates
//! two-body motion with RK4, recording every step.

use bevy::log::debug;
use bevy::prelude::Resource;

use super::gravity::two_body_acceleration;
use super::integrator::rk4_step;
use crate::elements::to_cartesian;
use crate::types::{BodyConstants, OrbitalElements, StateVector, TrajectoryPoint};

/// Configuration for trajectory sampling.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PropagationConfig {
    /// Integration step in seconds for [`propagate_with_config`]. Default: 60.
    pub step_seconds: f64,
    /// Steps per orbital period for whole-orbit sampling. Default: 100.
    pub samples_per_period: usize,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            step_seconds: 60.0,
            samples_per_period: 100,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PropagationError {
    #[error("invalid step size: {0} (must be finite and positive)")]
    InvalidStep(f64),

    #[error("invalid duration: {0} (must be finite and non-negative)")]
    InvalidDuration(f64),

    #[error("step count {0} exceeds the addressable range")]
    StepCountOverflow(f64),
}

/// Upper bound on points reserved up front; longer runs grow as they go.
const MAX_PREALLOCATED_POINTS: usize = 1 << 20;

/// A materialized trajectory: time-ordered samples starting at `time = 0`.
///
/// Immutable once produced; iterate it as often as needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Column layout downstream exporters use for these samples.
    pub const CSV_HEADER: &'static str =
        "Time (s),X (km),Y (km),Z (km),Vx (km/s),Vy (km/s),Vz (km/s)";

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// Time of the final sample (seconds).
    pub fn duration(&self) -> f64 {
        self.last().map_or(0.0, |p| p.time)
    }

    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = TrajectoryPoint;
    type IntoIter = std::vec::IntoIter<TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Propagate `elements` for `duration` seconds with a requested step of
/// `step` seconds.
///
/// The step count is `ceil(duration / step)` and the actual spacing is
/// `duration / steps`, so the last sample lands exactly on `duration`.
/// The result holds `steps + 1` points. A zero duration yields only the
/// initial point.
///
/// Arguments are checked once up front so the step count stays finite and
/// representable; the loop itself performs no stability checks. Invalid elements (for example
/// a sub-surface perigee) still propagate to meaningless but defined output.
pub fn propagate(
    elements: &OrbitalElements,
    duration: f64,
    step: f64,
    constants: &BodyConstants,
) -> Result<Trajectory, PropagationError> {
    propagate_state(to_cartesian(elements, constants), duration, step, constants)
}

/// Same as [`propagate`] but starting from a Cartesian state.
pub fn propagate_state(
    initial: StateVector,
    duration: f64,
    step: f64,
    constants: &BodyConstants,
) -> Result<Trajectory, PropagationError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(PropagationError::InvalidStep(step));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(PropagationError::InvalidDuration(duration));
    }

    let steps = (duration / step).ceil();
    if !steps.is_finite() || steps >= usize::MAX as f64 {
        return Err(PropagationError::StepCountOverflow(steps));
    }
    Ok(integrate(initial, duration, steps as usize, constants.mu))
}

/// [`propagate`] with the step taken from `config.step_seconds`.
pub fn propagate_with_config(
    elements: &OrbitalElements,
    duration: f64,
    constants: &BodyConstants,
    config: &PropagationConfig,
) -> Result<Trajectory, PropagationError> {
    propagate(elements, duration, config.step_seconds, constants)
}

/// Propagate `elements` for `duration` seconds in exactly `steps` uniform
/// steps (`steps + 1` points).
pub fn propagate_steps(
    elements: &OrbitalElements,
    duration: f64,
    steps: usize,
    constants: &BodyConstants,
) -> Result<Trajectory, PropagationError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(PropagationError::InvalidDuration(duration));
    }
    Ok(integrate(to_cartesian(elements, constants), duration, steps, constants.mu))
}

fn integrate(initial: StateVector, duration: f64, steps: usize, mu: f64) -> Trajectory {
    let dt = if steps > 0 { duration / steps as f64 } else { 0.0 };
    debug!("Propagating {steps} RK4 steps of {dt:.3} s over {duration:.1} s");

    let mut points = Vec::with_capacity(steps.saturating_add(1).min(MAX_PREALLOCATED_POINTS));
    let mut state = initial;

    points.push(TrajectoryPoint {
        time: 0.0,
        position: state.position,
        velocity: state.velocity,
    });

    for i in 0..steps {
        state = rk4_step(state, dt, |pos| two_body_acceleration(pos, mu));
        points.push(TrajectoryPoint {
            time: (i + 1) as f64 * dt,
            position: state.position,
            velocity: state.velocity,
        });
    }

    Trajectory { points }
}

/// Propagate over exactly one orbital period in
/// `config.samples_per_period` steps.
pub fn propagate_one_period(
    elements: &OrbitalElements,
    constants: &BodyConstants,
    config: &PropagationConfig,
) -> Result<Trajectory, PropagationError> {
    let period = crate::metrics::orbital_period(elements.a, constants);
    propagate_steps(elements, period, config.samples_per_period, constants)
}
