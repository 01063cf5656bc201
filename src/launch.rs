//! Launch window search for a target orbital plane.
//!
//! Candidate instants are spaced one nominal orbit (5400 s) apart starting
//! at a caller-supplied instant. A candidate is a window when the site's
//! local sidereal time is within 1° of the target RAAN.

use std::fmt;

use bevy::log::{debug, warn};

use crate::time::{j2000_seconds_to_iso8601, local_sidereal_time};
use crate::types::{DEG_TO_RAD, RAD_TO_DEG};

/// Spacing between candidate launch instants (seconds).
pub const WINDOW_SCAN_INTERVAL: f64 = 5400.0;

/// Maximum offset between local sidereal time and target RAAN (degrees).
pub const RAAN_TOLERANCE: f64 = 1.0;

/// Geographic launch site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchSite {
    /// Latitude (degrees, north positive)
    pub latitude: f64,
    /// Longitude (degrees, east positive)
    pub longitude: f64,
}

impl LaunchSite {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Direction of the pass through the target plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassType {
    Ascending,
    Descending,
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassType::Ascending => f.write_str("Ascending"),
            PassType::Descending => f.write_str("Descending"),
        }
    }
}

/// A launch opportunity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchWindow {
    /// Launch instant (seconds since J2000)
    pub time: f64,
    /// Launch azimuth (degrees from north)
    pub azimuth: f64,
    pub pass: PassType,
}

impl LaunchWindow {
    pub fn time_iso8601(&self) -> String {
        j2000_seconds_to_iso8601(self.time)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum LaunchWindowError {
    #[error(
        "Launch site latitude exceeds target inclination. Orbit not achievable. \
         (latitude {latitude}°, inclination {inclination}°)"
    )]
    UnreachableInclination { latitude: f64, inclination: f64 },
}

/// Launch azimuths (ascending, descending) in degrees for a target
/// inclination from a site latitude: `asin(cos i / cos φ)` and its
/// supplement.
///
/// Retrograde targets with `i > 180° - |φ|` are out of reach too: the
/// ratio drops below -1 and both azimuths come out NaN. Prograde targets
/// with `i < |φ|` give NaN the same way; [`launch_windows`] rejects those
/// before calling this.
pub fn launch_azimuths(latitude: f64, inclination: f64) -> (f64, f64) {
    let beta = ((inclination * DEG_TO_RAD).cos() / (latitude * DEG_TO_RAD).cos()).asin();
    let ascending = beta * RAD_TO_DEG;
    (ascending, 180.0 - ascending)
}

/// Search up to `2 * count` candidates from `start` (J2000 seconds) for
/// launch windows into the plane (`target_inclination`, `target_raan`).
///
/// Even-numbered candidates are ascending passes, odd ones descending. The
/// scan stops early once `count` windows are found, so fewer may be
/// returned. Fails when the site latitude exceeds the target inclination,
/// which no launch azimuth can reach.
pub fn launch_windows(
    site: LaunchSite,
    target_inclination: f64,
    target_raan: f64,
    count: usize,
    start: f64,
) -> Result<Vec<LaunchWindow>, LaunchWindowError> {
    if site.latitude.abs() > target_inclination {
        warn!(
            "Launch site at {:.2}° cannot reach a {:.2}° inclination",
            site.latitude, target_inclination
        );
        return Err(LaunchWindowError::UnreachableInclination {
            latitude: site.latitude,
            inclination: target_inclination,
        });
    }

    let (azimuth_ascending, azimuth_descending) =
        launch_azimuths(site.latitude, target_inclination);
    let mut windows = Vec::with_capacity(count);

    for i in 0..count.saturating_mul(2) {
        if windows.len() >= count {
            break;
        }

        let time = start + i as f64 * WINDOW_SCAN_INTERVAL;
        let lst = local_sidereal_time(time, site.longitude);
        let raan_offset = (target_raan - lst).rem_euclid(360.0);

        if raan_offset < RAAN_TOLERANCE || raan_offset > 360.0 - RAAN_TOLERANCE {
            let (azimuth, pass) = if i % 2 == 0 {
                (azimuth_ascending, PassType::Ascending)
            } else {
                (azimuth_descending, PassType::Descending)
            };
            debug!(
                "Launch window {} at {:.0} s ({pass}, azimuth {azimuth:.2}°)",
                windows.len(),
                time
            );
            windows.push(LaunchWindow { time, azimuth, pass });
        }
    }

    Ok(windows)
}
