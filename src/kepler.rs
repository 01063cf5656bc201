//! Kepler equation solver and anomaly conversions.
//!
//! Elliptical and hyperbolic orbits are solved with Newton's method; the
//! parabolic case has a closed-form cubic solution. The solver is best
//! effort: hitting the iteration cap returns the last iterate instead of
//! failing, with the outcome reported in [`AnomalySolution::converged`].

use std::f64::consts::TAU;

use bevy::log::debug;
use bevy::prelude::Resource;

use crate::types::{BodyConstants, OrbitalElements, DEG_TO_RAD, RAD_TO_DEG};

/// Default convergence tolerance on the Newton step (radians).
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default cap on Newton refinements.
pub const MAX_ITERATIONS: usize = 50;

/// Solver tuning.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct KeplerSolverConfig {
    /// Stop once the Newton step is smaller than this. Default: 1e-12.
    pub tolerance: f64,
    /// Maximum refinements before giving up. Default: 50.
    pub max_iterations: usize,
}

impl Default for KeplerSolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl KeplerSolverConfig {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }
}

/// Result of solving Kepler's equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnomalySolution {
    /// Eccentric (e < 1), hyperbolic (e > 1) or parabolic (e == 1) anomaly in radians
    pub anomaly: f64,
    /// Newton refinements performed (0 for the closed-form parabolic case)
    pub iterations: usize,
    /// False when the iteration cap was reached before the step fell below tolerance
    pub converged: bool,
}

/// Solve Kepler's equation for the anomaly matching `mean_anomaly`.
///
/// The mean anomaly is first reduced modulo 2π (keeping its sign). Then:
/// - `e < 1`: Newton on `E - e sin E - M`, seeded at `M ± e/2`
/// - `e > 1`: Newton on `e sinh H - H - M`, seeded at `ln(2M/e + 1.8)`
/// - `e == 1`: `B - 1/B` with `B = cbrt(3M + sqrt(9M² + 1))`
pub fn solve_kepler(
    mean_anomaly: f64,
    eccentricity: f64,
    config: &KeplerSolverConfig,
) -> AnomalySolution {
    let m = mean_anomaly % TAU;
    let e = eccentricity;

    if e < 1.0 {
        let seed = if m < std::f64::consts::PI { m + e / 2.0 } else { m - e / 2.0 };
        newton(seed, config, |ea| {
            (ea - e * ea.sin() - m, 1.0 - e * ea.cos())
        })
    } else if e > 1.0 {
        let seed = (2.0 * m / e + 1.8).ln();
        newton(seed, config, |h| {
            (e * h.sinh() - h - m, e * h.cosh() - 1.0)
        })
    } else {
        let b = (3.0 * m + (9.0 * m * m + 1.0).sqrt()).cbrt();
        AnomalySolution {
            anomaly: b - 1.0 / b,
            iterations: 0,
            converged: true,
        }
    }
}

/// Solve with a custom tolerance and the default iteration cap, returning
/// only the anomaly.
pub fn solve(mean_anomaly: f64, eccentricity: f64, tolerance: f64) -> f64 {
    solve_kepler(mean_anomaly, eccentricity, &KeplerSolverConfig::with_tolerance(tolerance)).anomaly
}

/// Bounded Newton iteration; `f` returns the residual and its derivative.
fn newton<F>(seed: f64, config: &KeplerSolverConfig, f: F) -> AnomalySolution
where
    F: Fn(f64) -> (f64, f64),
{
    let mut x = seed;

    for iteration in 1..=config.max_iterations {
        let (residual, derivative) = f(x);
        let delta = residual / derivative;
        x -= delta;

        if delta.abs() < config.tolerance {
            return AnomalySolution {
                anomaly: x,
                iterations: iteration,
                converged: true,
            };
        }
    }

    debug!(
        "Kepler solver hit {} iterations without converging (last anomaly {})",
        config.max_iterations, x
    );
    AnomalySolution {
        anomaly: x,
        iterations: config.max_iterations,
        converged: false,
    }
}

/// Compute true anomaly from eccentric anomaly (radians, e < 1).
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let e = eccentricity;
    let half = eccentric_anomaly / 2.0;

    // atan2 keeps the full quadrant range
    let y = (1.0 + e).sqrt() * half.sin();
    let x = (1.0 - e).sqrt() * half.cos();
    2.0 * y.atan2(x)
}

/// Compute eccentric anomaly from true anomaly (radians, e < 1).
pub fn true_to_eccentric_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    let e = eccentricity;
    let half = true_anomaly / 2.0;

    let y = (1.0 - e).sqrt() * half.sin();
    let x = (1.0 + e).sqrt() * half.cos();
    2.0 * y.atan2(x)
}

/// Mean anomaly at a given true anomaly (radians, e < 1).
pub fn mean_from_true_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    let ea = true_to_eccentric_anomaly(true_anomaly, eccentricity);
    ea - eccentricity * ea.sin()
}

/// True anomaly at a given mean anomaly (radians, e < 1).
pub fn true_from_mean_anomaly(
    mean_anomaly: f64,
    eccentricity: f64,
    config: &KeplerSolverConfig,
) -> f64 {
    let ea = solve_kepler(mean_anomaly, eccentricity, config).anomaly;
    eccentric_to_true_anomaly(ea, eccentricity)
}

/// Advance an elliptical orbit analytically by `dt` seconds.
///
/// Only the true anomaly changes under two-body motion. The result is in
/// degrees, `[0, 360)`.
pub fn propagate_kepler(
    elements: &OrbitalElements,
    dt: f64,
    constants: &BodyConstants,
    config: &KeplerSolverConfig,
) -> OrbitalElements {
    let mean_motion = (constants.mu / elements.a.powi(3)).sqrt();
    let m0 = mean_from_true_anomaly(elements.true_anomaly * DEG_TO_RAD, elements.e);
    let m = (m0 + mean_motion * dt).rem_euclid(TAU);

    let nu = true_from_mean_anomaly(m, elements.e, config);
    elements.with_true_anomaly((nu * RAD_TO_DEG).rem_euclid(360.0))
}
