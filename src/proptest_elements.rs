//! Property-based tests for the element/state conversions.

use proptest::prelude::*;

use crate::elements::{state_to_keplerian, to_cartesian};
use crate::kepler::{propagate_kepler, KeplerSolverConfig};
use crate::types::{BodyConstants, OrbitalElements};

/// Smallest difference between two angles in degrees.
fn angle_diff(a: f64, b: f64) -> f64 {
    ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Shape and tilt survive a round trip through Cartesian state.
    #[test]
    fn prop_roundtrip_preserves_a_e_i(
        a in 6500.0f64..=50000.0,
        e in 0.0f64..0.95,
        i in 0.1f64..179.9,
        raan in 0.0f64..360.0,
        arg_pe in 0.0f64..360.0,
        true_anomaly in 0.0f64..360.0,
    ) {
        let earth = BodyConstants::earth();
        let elements = OrbitalElements::new(a, e, i, raan, arg_pe, true_anomaly);
        let back = state_to_keplerian(&to_cartesian(&elements, &earth), &earth);

        prop_assert!(((back.a - a) / a).abs() < 1e-6, "a: {} -> {}", a, back.a);
        prop_assert!((back.e - e).abs() < 1e-6, "e: {} -> {}", e, back.e);
        prop_assert!((back.i - i).abs() < 1e-6, "i: {} -> {}", i, back.i);
    }

    /// Away from circular and equatorial orbits the orientation angles
    /// survive too.
    #[test]
    fn prop_roundtrip_preserves_angles(
        a in 6500.0f64..=50000.0,
        e in 0.01f64..0.9,
        i in 1.0f64..179.0,
        raan in 0.0f64..360.0,
        arg_pe in 0.0f64..360.0,
        true_anomaly in 0.0f64..360.0,
    ) {
        let earth = BodyConstants::earth();
        let elements = OrbitalElements::new(a, e, i, raan, arg_pe, true_anomaly);
        let back = state_to_keplerian(&to_cartesian(&elements, &earth), &earth);

        prop_assert!(angle_diff(back.raan, raan) < 1e-5, "raan: {} -> {}", raan, back.raan);
        prop_assert!(
            angle_diff(back.arg_pe, arg_pe) < 1e-5,
            "arg_pe: {} -> {}", arg_pe, back.arg_pe
        );
        prop_assert!(
            angle_diff(back.true_anomaly, true_anomaly) < 1e-5,
            "true anomaly: {} -> {}", true_anomaly, back.true_anomaly
        );
    }

    /// Analytic propagation by one full period returns to the same anomaly.
    #[test]
    fn prop_kepler_propagation_periodic(
        a in 6500.0f64..50000.0,
        e in 0.0f64..0.9,
        true_anomaly in 0.0f64..360.0,
    ) {
        let earth = BodyConstants::earth();
        let elements = OrbitalElements::new(a, e, 40.0, 10.0, 20.0, true_anomaly);
        let period = crate::metrics::orbital_period(a, &earth);

        let after = propagate_kepler(&elements, period, &earth, &KeplerSolverConfig::default());
        prop_assert!(
            angle_diff(after.true_anomaly, true_anomaly) < 1e-6,
            "{} -> {}", true_anomaly, after.true_anomaly
        );
        prop_assert_eq!(after.a, a);
        prop_assert_eq!(after.e, e);
    }
}
