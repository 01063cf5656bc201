//! Classical fourth-order Runge-Kutta step for second-order motion.
//!
//! The state derivative is `(velocity, acceleration(position))`; the
//! acceleration depends on position only.

use crate::types::{StateVector, Vector3};

/// Advance `state` by `dt` seconds with one RK4 step.
///
/// The four stage derivatives are combined with the 1-2-2-1 weights scaled
/// by `dt/6`.
pub fn rk4_step<F>(state: StateVector, dt: f64, acceleration_fn: F) -> StateVector
where
    F: Fn(Vector3) -> Vector3,
{
    let StateVector { position: r, velocity: v } = state;
    let half_dt = dt / 2.0;

    let k1r = v;
    let k1v = acceleration_fn(r);

    let k2r = v + k1v * half_dt;
    let k2v = acceleration_fn(r + k1r * half_dt);

    let k3r = v + k2v * half_dt;
    let k3v = acceleration_fn(r + k2r * half_dt);

    let k4r = v + k3v * dt;
    let k4v = acceleration_fn(r + k3r * dt);

    StateVector {
        position: r + (k1r + k2r * 2.0 + k3r * 2.0 + k4r) * (dt / 6.0),
        velocity: v + (k1v + k2v * 2.0 + k3v * 2.0 + k4v) * (dt / 6.0),
    }
}
