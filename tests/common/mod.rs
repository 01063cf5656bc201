//! Common test utilities for integration tests.

#![allow(dead_code)]

use orbitcalc::types::{BodyConstants, OrbitalElements, StateVector, Vector3};

/// ISS-like low Earth orbit.
pub fn iss() -> OrbitalElements {
    OrbitalElements::new(6778.0, 0.0001, 51.6, 0.0, 0.0, 0.0)
}

/// Geostationary orbit.
pub fn geo() -> OrbitalElements {
    OrbitalElements::circular(42164.0, 0.0)
}

/// Molniya orbit starting at perigee.
pub fn molniya() -> OrbitalElements {
    OrbitalElements::new(26600.0, 0.74, 63.4, 45.0, 270.0, 0.0)
}

/// Create an orbit state at periapsis on the positive x-axis.
pub fn periapsis_state(a: f64, e: f64) -> StateVector {
    let mu = BodyConstants::earth().mu;
    let r_p = a * (1.0 - e);
    let v = (mu * (2.0 / r_p - 1.0 / a)).sqrt();
    StateVector::new(Vector3::new(r_p, 0.0, 0.0), Vector3::new(0.0, v, 0.0))
}

/// Compute specific orbital energy.
pub fn orbital_energy(state: &StateVector) -> f64 {
    let mu = BodyConstants::earth().mu;
    0.5 * state.velocity.length_squared() - mu / state.position.length()
}

/// Relative drift between two values.
pub fn relative_drift(initial: f64, final_value: f64) -> f64 {
    ((final_value - initial) / initial).abs()
}
