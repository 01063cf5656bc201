//! Sub-satellite ground track.
//!
//! Latitude here is geocentric (`asin(z/r)`), not geodetic, and longitude
//! uses a single GMST evaluated at the reference instant for every sample.
//! That ignores Earth rotation during the pass; the track is the orbit's
//! footprint against a frozen Earth at `epoch`. Both are accepted
//! approximations of this model.

use crate::metrics::orbital_period;
use crate::physics::{propagate_steps, PropagationError};
use crate::time::gmst;
use crate::types::{BodyConstants, OrbitalElements, RAD_TO_DEG};

/// One sample of a ground track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundTrackPoint {
    /// Geocentric latitude (degrees)
    pub latitude: f64,
    /// Longitude east of Greenwich (degrees, -180..=180)
    pub longitude: f64,
    /// Height above the body's mean radius (km)
    pub altitude: f64,
}

/// Propagate one full period in `num_points` steps and project each sample
/// onto the body, using the sidereal angle at `epoch` (J2000 seconds).
///
/// Returns `num_points + 1` samples (the first and last coincide in
/// inertial space).
pub fn ground_track(
    elements: &OrbitalElements,
    num_points: usize,
    epoch: f64,
    constants: &BodyConstants,
) -> Result<Vec<GroundTrackPoint>, PropagationError> {
    let period = orbital_period(elements.a, constants);
    let trajectory = propagate_steps(elements, period, num_points, constants)?;
    let theta = gmst(epoch);

    Ok(trajectory
        .iter()
        .map(|point| {
            let pos = point.position;
            let r = pos.length();
            let latitude = (pos.z / r).asin() * RAD_TO_DEG;
            let longitude = wrap_longitude((pos.y.atan2(pos.x) * RAD_TO_DEG - theta) % 360.0);

            GroundTrackPoint {
                latitude,
                longitude,
                altitude: r - constants.radius,
            }
        })
        .collect())
}

/// Fold a longitude in (-360, 360) into [-180, 180].
fn wrap_longitude(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else if lon < -180.0 {
        lon + 360.0
    } else {
        lon
    }
}
