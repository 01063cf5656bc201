//! Core orbital types and constants.
//!
//! Distances are kilometers, velocities km/s, and angles degrees at the
//! public boundary. Everything below the boundary works in radians.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Mean radius of the Earth (km)
pub const EARTH_RADIUS: f64 = 6371.0;

/// Earth gravitational parameter GM (km³/s²)
pub const EARTH_MU: f64 = 398600.4418;

/// Earth oblateness coefficient. Reserved, no computation uses it yet.
pub const EARTH_J2: f64 = 0.00108263;

/// Earth sidereal rotation rate (rad/s)
pub const EARTH_ROTATION_RATE: f64 = 7.2921159e-5;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Three-component vector used for both positions (km) and velocities (km/s).
pub type Vector3 = DVec3;

/// Physical constants of the governing body.
///
/// Shared read-only by every computation; pass it by reference.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct BodyConstants {
    /// Display name used in validation messages
    pub name: &'static str,
    /// Surface radius (km)
    pub radius: f64,
    /// Gravitational parameter GM (km³/s²)
    pub mu: f64,
    /// Oblateness coefficient (reserved)
    pub j2: f64,
    /// Sidereal rotation rate (rad/s)
    pub rotation_rate: f64,
}

impl BodyConstants {
    /// Constants for the Earth.
    pub const fn earth() -> Self {
        Self {
            name: "Earth",
            radius: EARTH_RADIUS,
            mu: EARTH_MU,
            j2: EARTH_J2,
            rotation_rate: EARTH_ROTATION_RATE,
        }
    }
}

impl Default for BodyConstants {
    fn default() -> Self {
        Self::earth()
    }
}

/// Classical Keplerian elements.
///
/// An immutable snapshot: conversions and propagation take it by reference
/// and never modify it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (km)
    pub a: f64,
    /// Eccentricity (dimensionless)
    pub e: f64,
    /// Inclination (degrees, 0..=180)
    pub i: f64,
    /// Right ascension of the ascending node (degrees)
    pub raan: f64,
    /// Argument of periapsis (degrees)
    pub arg_pe: f64,
    /// True anomaly (degrees)
    pub true_anomaly: f64,
}

impl OrbitalElements {
    pub const fn new(a: f64, e: f64, i: f64, raan: f64, arg_pe: f64, true_anomaly: f64) -> Self {
        Self {
            a,
            e,
            i,
            raan,
            arg_pe,
            true_anomaly,
        }
    }

    /// Circular orbit of radius `a` with every angle zeroed except inclination.
    pub const fn circular(a: f64, i: f64) -> Self {
        Self::new(a, 0.0, i, 0.0, 0.0, 0.0)
    }

    /// Periapsis distance from the body center (km).
    pub fn periapsis_radius(&self) -> f64 {
        self.a * (1.0 - self.e)
    }

    /// Apoapsis distance from the body center (km).
    pub fn apoapsis_radius(&self) -> f64 {
        self.a * (1.0 + self.e)
    }

    /// Semi-latus rectum p = a(1 - e²) (km).
    pub fn semi_latus_rectum(&self) -> f64 {
        self.a * (1.0 - self.e * self.e)
    }

    /// Copy of these elements at a different true anomaly (degrees).
    pub fn with_true_anomaly(&self, true_anomaly: f64) -> Self {
        Self {
            true_anomaly,
            ..*self
        }
    }
}

/// Cartesian state at a single instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StateVector {
    /// Position (km)
    pub position: Vector3,
    /// Velocity (km/s)
    pub velocity: Vector3,
}

impl StateVector {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }
}

/// One sample of a propagated trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    /// Seconds since propagation start
    pub time: f64,
    /// Position (km)
    pub position: Vector3,
    /// Velocity (km/s)
    pub velocity: Vector3,
}

impl TrajectoryPoint {
    pub fn state(&self) -> StateVector {
        StateVector::new(self.position, self.velocity)
    }
}
