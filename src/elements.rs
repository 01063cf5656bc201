//! Conversion between Keplerian elements and Cartesian state vectors.
//!
//! Both directions are total: degenerate input (for example `a <= 0`)
//! yields NaN or otherwise meaningless numbers instead of an error, so
//! callers should run [`crate::metrics::validate`] first.

use crate::types::{BodyConstants, OrbitalElements, StateVector, Vector3, DEG_TO_RAD, RAD_TO_DEG};
use crate::vector;

/// Below this magnitude the node or eccentricity vector is treated as
/// vanishing (equatorial or circular orbit).
pub const DEGENERACY_EPSILON: f64 = 1e-12;

/// Convert Keplerian elements to an inertial position and velocity.
///
/// Position and velocity are first built in the perifocal frame from the
/// conic equation and the two-body speed relations, then rotated by the
/// 3-1-3 sequence (RAAN, inclination, argument of periapsis).
pub fn to_cartesian(elements: &OrbitalElements, constants: &BodyConstants) -> StateVector {
    let OrbitalElements { a, e, .. } = *elements;

    let i = elements.i * DEG_TO_RAD;
    let raan = elements.raan * DEG_TO_RAD;
    let arg_pe = elements.arg_pe * DEG_TO_RAD;
    let nu = elements.true_anomaly * DEG_TO_RAD;

    let p = a * (1.0 - e * e);
    let (sin_nu, cos_nu) = nu.sin_cos();
    let r = p / (1.0 + e * cos_nu);

    // Perifocal frame: x toward periapsis, z along angular momentum
    let x_pf = r * cos_nu;
    let y_pf = r * sin_nu;
    let speed_scale = (constants.mu / p).sqrt();
    let vx_pf = -speed_scale * sin_nu;
    let vy_pf = speed_scale * (e + cos_nu);

    let (sin_raan, cos_raan) = raan.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();
    let (sin_w, cos_w) = arg_pe.sin_cos();

    // First two columns of R3(-Ω) R1(-i) R3(-ω); perifocal z is always zero
    let col_p = Vector3::new(
        cos_raan * cos_w - sin_raan * sin_w * cos_i,
        sin_raan * cos_w + cos_raan * sin_w * cos_i,
        sin_w * sin_i,
    );
    let col_q = Vector3::new(
        -cos_raan * sin_w - sin_raan * cos_w * cos_i,
        -sin_raan * sin_w + cos_raan * cos_w * cos_i,
        cos_w * sin_i,
    );

    StateVector {
        position: col_p * x_pf + col_q * y_pf,
        velocity: col_p * vx_pf + col_q * vy_pf,
    }
}

/// Convert an inertial position (km) and velocity (km/s) to Keplerian elements.
///
/// When the node vector vanishes (equatorial orbit) RAAN and argument of
/// periapsis are reported as zero; when the eccentricity vector vanishes
/// (circular orbit) argument of periapsis and true anomaly are zero. These
/// angles are undefined in those cases and zero is a convention.
pub fn to_keplerian(
    position: Vector3,
    velocity: Vector3,
    constants: &BodyConstants,
) -> OrbitalElements {
    let mu = constants.mu;
    let r = vector::magnitude(position);
    let v = vector::magnitude(velocity);

    let h = vector::cross(position, velocity);
    let h_mag = vector::magnitude(h);

    let n = vector::cross(Vector3::Z, h);
    let n_mag = vector::magnitude(n);

    let e_vec = vector::subtract(
        vector::scale(vector::cross(velocity, h), 1.0 / mu),
        vector::normalize(position),
    );
    let e = vector::magnitude(e_vec);

    let energy = v * v / 2.0 - mu / r;
    let a = -mu / (2.0 * energy);

    let i = clamped_acos(h.z / h_mag) * RAD_TO_DEG;

    let mut raan = 0.0;
    if n_mag > DEGENERACY_EPSILON {
        raan = clamped_acos(n.x / n_mag) * RAD_TO_DEG;
        if n.y < 0.0 {
            raan = 360.0 - raan;
        }
    }

    let mut arg_pe = 0.0;
    if n_mag > DEGENERACY_EPSILON && e > DEGENERACY_EPSILON {
        arg_pe = clamped_acos(vector::dot(n, e_vec) / (n_mag * e)) * RAD_TO_DEG;
        if e_vec.z < 0.0 {
            arg_pe = 360.0 - arg_pe;
        }
    }

    let mut true_anomaly = 0.0;
    if e > DEGENERACY_EPSILON {
        true_anomaly = clamped_acos(vector::dot(e_vec, position) / (e * r)) * RAD_TO_DEG;
        // Moving toward periapsis: second half of the orbit
        if vector::dot(position, velocity) < 0.0 {
            true_anomaly = 360.0 - true_anomaly;
        }
    }

    OrbitalElements {
        a,
        e,
        i,
        raan,
        arg_pe,
        true_anomaly,
    }
}

/// Convenience wrapper over [`to_keplerian`] for a [`StateVector`].
pub fn state_to_keplerian(state: &StateVector, constants: &BodyConstants) -> OrbitalElements {
    to_keplerian(state.position, state.velocity, constants)
}

/// `acos` with its argument clamped to [-1, 1]; roundoff in the ratios
/// above can land a hair outside the domain.
fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
