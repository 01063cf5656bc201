//! Point-mass gravity of the governing body.

use crate::types::{BodyConstants, Vector3};

/// Two-body acceleration `-μ r / |r|³` at a position (km/s²).
///
/// There is no singularity guard: a position at the body center yields NaN.
#[inline]
pub fn two_body_acceleration(pos: Vector3, mu: f64) -> Vector3 {
    let r_squared = pos.length_squared();
    let r = r_squared.sqrt();
    pos * (-mu / (r_squared * r))
}

/// Specific orbital energy `v²/2 - μ/r` (km²/s²).
///
/// Negative for bound orbits, zero for parabolic, positive for hyperbolic.
pub fn specific_energy(pos: Vector3, vel: Vector3, constants: &BodyConstants) -> f64 {
    0.5 * vel.length_squared() - constants.mu / pos.length()
}

/// Specific angular momentum vector `r × v` (km²/s).
pub fn angular_momentum(pos: Vector3, vel: Vector3) -> Vector3 {
    pos.cross(vel)
}
