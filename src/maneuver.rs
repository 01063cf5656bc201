//! Hohmann transfer between coplanar circular orbits.
//!
//! Two tangential burns: one at the departure radius onto the transfer
//! ellipse, one at the arrival radius to circularize. Works in either
//! direction (raising or lowering).

use std::f64::consts::PI;

use crate::metrics::{circular_velocity, vis_viva};
use crate::types::BodyConstants;

/// Shape of the transfer ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferOrbit {
    /// Semi-major axis (km)
    pub a: f64,
    /// Eccentricity
    pub e: f64,
}

/// Result of a Hohmann computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferPlan {
    /// Departure burn magnitude (km/s)
    pub delta_v1: f64,
    /// Arrival burn magnitude (km/s)
    pub delta_v2: f64,
    /// Sum of both burns (km/s)
    pub total_delta_v: f64,
    /// Coast time, half the transfer orbit period (seconds)
    pub transfer_time: f64,
    pub transfer_orbit: TransferOrbit,
}

/// Plan a Hohmann transfer between circular orbits of radius `r1` and `r2`
/// (km from the body center, not altitudes).
pub fn hohmann_transfer(r1: f64, r2: f64, constants: &BodyConstants) -> TransferPlan {
    let a_transfer = (r1 + r2) / 2.0;

    let v1 = circular_velocity(r1, constants);
    let v2 = circular_velocity(r2, constants);

    // Transfer ellipse speeds at departure and arrival
    let v_depart = vis_viva(r1, a_transfer, constants);
    let v_arrive = vis_viva(r2, a_transfer, constants);

    let delta_v1 = (v_depart - v1).abs();
    let delta_v2 = (v2 - v_arrive).abs();

    TransferPlan {
        delta_v1,
        delta_v2,
        total_delta_v: delta_v1 + delta_v2,
        transfer_time: PI * (a_transfer.powi(3) / constants.mu).sqrt(),
        transfer_orbit: TransferOrbit {
            a: a_transfer,
            e: (r2 - r1).abs() / (r1 + r2),
        },
    }
}

/// [`hohmann_transfer`] between two altitudes above the body surface (km).
pub fn hohmann_transfer_altitudes(h1: f64, h2: f64, constants: &BodyConstants) -> TransferPlan {
    hohmann_transfer(h1 + constants.radius, h2 + constants.radius, constants)
}
