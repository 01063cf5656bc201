//! Test utilities for orbital mechanics tests.
//!
//! Provides fixture orbits and assertions for verifying physical invariants
//! like energy and angular momentum conservation.

use crate::types::{BodyConstants, OrbitalElements, StateVector, Vector3};

/// Fixtures for creating test orbits.
pub mod fixtures {
    use super::*;

    /// ISS-like low Earth orbit.
    pub fn iss() -> OrbitalElements {
        OrbitalElements::new(6778.0, 0.0001, 51.6, 0.0, 0.0, 0.0)
    }

    /// Geostationary orbit.
    pub fn geo() -> OrbitalElements {
        OrbitalElements::circular(42164.0, 0.0)
    }

    /// Highly eccentric Molniya orbit, starting at perigee.
    pub fn molniya() -> OrbitalElements {
        OrbitalElements::new(26600.0, 0.74, 63.4, 45.0, 270.0, 0.0)
    }

    /// A body in a circular equatorial orbit of radius `r` (km).
    ///
    /// Placed on the positive x-axis moving in +y.
    pub fn equatorial_circular(r: f64) -> StateVector {
        let v = (BodyConstants::earth().mu / r).sqrt();
        StateVector::new(Vector3::new(r, 0.0, 0.0), Vector3::new(0.0, v, 0.0))
    }

    /// A state with the given specific energy at radius `r`, velocity
    /// tilted out of the equatorial plane by `tilt` radians.
    pub fn orbit_with_energy(r: f64, specific_energy: f64, tilt: f64) -> StateVector {
        let v_squared = 2.0 * (specific_energy + BodyConstants::earth().mu / r);
        assert!(v_squared >= 0.0, "Energy too low for this radius");
        let v = v_squared.sqrt();
        StateVector::new(
            Vector3::new(r, 0.0, 0.0),
            Vector3::new(0.0, v * tilt.cos(), v * tilt.sin()),
        )
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Specific orbital energy `v²/2 - μ/r` around the Earth.
    pub fn orbital_energy(state: &StateVector) -> f64 {
        let mu = BodyConstants::earth().mu;
        0.5 * state.velocity.length_squared() - mu / state.position.length()
    }

    /// Specific angular momentum vector `r × v`.
    pub fn angular_momentum(state: &StateVector) -> Vector3 {
        state.position.cross(state.velocity)
    }

    /// Assert that energy is conserved within relative tolerance.
    ///
    /// # Panics
    /// Panics if relative energy drift exceeds tolerance.
    pub fn assert_energy_conserved(initial_energy: f64, final_energy: f64, tolerance: f64) {
        let drift = if initial_energy.abs() > 1e-10 {
            ((final_energy - initial_energy) / initial_energy).abs()
        } else {
            (final_energy - initial_energy).abs()
        };
        assert!(
            drift <= tolerance,
            "Energy not conserved: initial={initial_energy:.6e}, final={final_energy:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Assert that the angular momentum vector is conserved within relative
    /// tolerance.
    ///
    /// # Panics
    /// Panics if the relative change of `h` exceeds tolerance.
    pub fn assert_angular_momentum_conserved(initial: Vector3, final_h: Vector3, tolerance: f64) {
        let drift = (final_h - initial).length() / initial.length().max(1e-10);
        assert!(
            drift <= tolerance,
            "Angular momentum not conserved: initial={initial:?}, final={final_h:?}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Semi-major axis from specific energy, `None` when unbound.
    pub fn semi_major_axis_from_energy(energy: f64) -> Option<f64> {
        if energy >= 0.0 {
            None
        } else {
            Some(-BodyConstants::earth().mu / (2.0 * energy))
        }
    }

    pub fn is_bound(state: &StateVector) -> bool {
        orbital_energy(state) < 0.0
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equatorial_circular_speed() {
        let state = fixtures::equatorial_circular(7000.0);
        assert_relative_eq!(state.velocity.length(), 7.546, epsilon = 1e-3);
        assert!(assertions::is_bound(&state));
    }

    #[test]
    fn test_circular_energy_gives_radius() {
        let state = fixtures::equatorial_circular(8000.0);
        let a = assertions::semi_major_axis_from_energy(assertions::orbital_energy(&state));
        assert_relative_eq!(a.unwrap(), 8000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_positive_energy_is_unbound() {
        let state = fixtures::orbit_with_energy(7000.0, 5.0, 0.3);
        assert!(!assertions::is_bound(&state));
        assert_eq!(assertions::semi_major_axis_from_energy(5.0), None);
        assert_relative_eq!(assertions::orbital_energy(&state), 5.0, max_relative = 1e-9);
    }

    #[test]
    fn test_fixtures_are_valid_closed_orbits() {
        let earth = BodyConstants::earth();
        for elements in [fixtures::iss(), fixtures::geo(), fixtures::molniya()] {
            assert!(elements.periapsis_radius() > earth.radius);
            assert!((0.0..1.0).contains(&elements.e));
        }
    }
}
