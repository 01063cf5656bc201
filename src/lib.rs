//! Orbitcalc - Orbital Mechanics Core
//!
//! A library crate for two-body orbit computations around the Earth:
//! element/state conversion, Kepler's equation, RK4 propagation, orbit
//! metrics and validation, Hohmann transfers, ground tracks and launch
//! windows. [`physics::OrbitPlugin`] exposes the configuration as Bevy
//! resources for host applications.

pub mod elements;
pub mod ground_track;
pub mod kepler;
pub mod launch;
pub mod maneuver;
pub mod metrics;
pub mod physics;
pub mod time;
pub mod types;
pub mod vector;

#[cfg(test)]
mod proptest_elements;

#[cfg(test)]
pub mod test_utils;
