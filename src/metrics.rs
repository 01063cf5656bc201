//! Derived orbit quantities, element validation, and stability class.

use std::f64::consts::TAU;
use std::fmt;

use crate::physics::{propagate_one_period, PropagationConfig, PropagationError, Trajectory};
use crate::types::{BodyConstants, OrbitalElements};

/// Perigee altitude above which an orbit is considered stable (km).
pub const STABLE_PERIGEE_ALTITUDE: f64 = 200.0;

/// Perigee altitude above which an orbit is considered marginal (km).
pub const MARGINAL_PERIGEE_ALTITUDE: f64 = 150.0;

/// Orbital period `2π sqrt(a³/μ)` (seconds).
pub fn orbital_period(a: f64, constants: &BodyConstants) -> f64 {
    TAU * (a.powi(3) / constants.mu).sqrt()
}

/// Mean motion `sqrt(μ/a³)` (rad/s).
pub fn mean_motion(a: f64, constants: &BodyConstants) -> f64 {
    (constants.mu / a.powi(3)).sqrt()
}

/// Circular orbit speed at radius `r` (km/s).
pub fn circular_velocity(r: f64, constants: &BodyConstants) -> f64 {
    (constants.mu / r).sqrt()
}

/// Escape speed at radius `r` (km/s).
pub fn escape_velocity(r: f64, constants: &BodyConstants) -> f64 {
    (2.0 * constants.mu / r).sqrt()
}

/// Vis-viva speed at radius `r` on an orbit with semi-major axis `a` (km/s).
pub fn vis_viva(r: f64, a: f64, constants: &BodyConstants) -> f64 {
    (constants.mu * (2.0 / r - 1.0 / a)).sqrt()
}

/// Apogee and perigee altitudes above the body surface (km).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApsisAltitudes {
    pub apogee: f64,
    pub perigee: f64,
}

/// Speeds at apogee and perigee (km/s).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApsisVelocities {
    pub apogee: f64,
    pub perigee: f64,
}

pub fn apogee_perigee(a: f64, e: f64, constants: &BodyConstants) -> ApsisAltitudes {
    ApsisAltitudes {
        apogee: a * (1.0 + e) - constants.radius,
        perigee: a * (1.0 - e) - constants.radius,
    }
}

pub fn velocities(a: f64, e: f64, constants: &BodyConstants) -> ApsisVelocities {
    ApsisVelocities {
        apogee: vis_viva(a * (1.0 + e), a, constants),
        perigee: vis_viva(a * (1.0 - e), a, constants),
    }
}

/// Outcome of [`validate`]: every violated constraint, in check order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check elements against the closed-orbit constraints.
///
/// Never short-circuits: all applicable messages are collected, in this
/// order: semi-major axis, eccentricity, perigee, inclination. Each check
/// accepts only values inside its range, so NaN fields are rejected.
pub fn validate(elements: &OrbitalElements, constants: &BodyConstants) -> ValidationResult {
    let mut errors = Vec::new();
    let (name, radius) = (constants.name, constants.radius);

    if elements.a.is_nan() || elements.a <= radius {
        errors.push(format!(
            "Semi-major axis must be greater than {name}'s radius ({radius} km)"
        ));
    }

    if !(0.0..1.0).contains(&elements.e) {
        errors.push(
            "Eccentricity must be between 0 (inclusive) and 1 (exclusive) for closed orbits"
                .to_string(),
        );
    }

    let perigee = elements.periapsis_radius();
    if perigee.is_nan() || perigee < radius {
        errors.push(format!(
            "Perigee altitude ({:.1} km) is below {name}'s surface",
            perigee - radius
        ));
    }

    if !(0.0..=180.0).contains(&elements.i) {
        errors.push("Inclination must be between 0° and 180°".to_string());
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

/// Lifetime class from perigee altitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrbitStability {
    Stable,
    Marginal,
    Decay,
}

impl OrbitStability {
    /// Rough lifetime expectation for display next to the class.
    pub fn lifespan_hint(&self) -> &'static str {
        match self {
            OrbitStability::Stable => "indefinite",
            OrbitStability::Marginal => "~months",
            OrbitStability::Decay => "~days to reentry",
        }
    }
}

impl fmt::Display for OrbitStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrbitStability::Stable => "stable",
            OrbitStability::Marginal => "marginal",
            OrbitStability::Decay => "decay",
        };
        f.write_str(label)
    }
}

/// Classify by perigee altitude (km): `> 200` stable, `> 150` marginal,
/// otherwise decay.
pub fn stability(perigee_altitude: f64) -> OrbitStability {
    if perigee_altitude > STABLE_PERIGEE_ALTITUDE {
        OrbitStability::Stable
    } else if perigee_altitude > MARGINAL_PERIGEE_ALTITUDE {
        OrbitStability::Marginal
    } else {
        OrbitStability::Decay
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitReportError {
    #[error("invalid orbital elements: {}", .0.errors.join("; "))]
    Invalid(ValidationResult),

    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

/// Everything derived for one set of elements.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitReport {
    /// Orbital period (seconds)
    pub period: f64,
    pub altitudes: ApsisAltitudes,
    pub velocities: ApsisVelocities,
    pub stability: OrbitStability,
    /// One period sampled at `samples_per_period` steps
    pub trajectory: Trajectory,
}

/// Validate, then derive period, apsides, stability and one period of
/// trajectory. Invalid elements are rejected with their validation messages.
pub fn analyze_orbit(
    elements: &OrbitalElements,
    constants: &BodyConstants,
    config: &PropagationConfig,
) -> Result<OrbitReport, OrbitReportError> {
    let validation = validate(elements, constants);
    if !validation.valid {
        return Err(OrbitReportError::Invalid(validation));
    }

    let altitudes = apogee_perigee(elements.a, elements.e, constants);

    Ok(OrbitReport {
        period: orbital_period(elements.a, constants),
        altitudes,
        velocities: velocities(elements.a, elements.e, constants),
        stability: stability(altitudes.perigee),
        trajectory: propagate_one_period(elements, constants, config)?,
    })
}
