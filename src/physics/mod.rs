//! Two-body dynamics: gravity model, RK4 integrator, and propagation.
//!
//! Also hosts [`OrbitPlugin`], which installs the configuration resources
//! shared by the computations so a Bevy host app can read and tune them.

mod gravity;
mod integrator;
mod propagator;


use bevy::prelude::*;

pub use gravity::{angular_momentum, specific_energy, two_body_acceleration};
pub use integrator::rk4_step;
pub use propagator::{
    propagate, propagate_one_period, propagate_state, propagate_steps, propagate_with_config,
    PropagationConfig, PropagationError, Trajectory,
};

use crate::kepler::KeplerSolverConfig;
use crate::types::BodyConstants;

/// Plugin providing the orbital computation resources.
///
/// Inserts (without overwriting existing values):
/// - [`BodyConstants`] for the governing body
/// - [`KeplerSolverConfig`] solver tolerance and iteration cap
/// - [`PropagationConfig`] propagation sampling
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyConstants>()
            .init_resource::<KeplerSolverConfig>()
            .init_resource::<PropagationConfig>();
    }
}
