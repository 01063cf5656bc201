//! Time systems: J2000 instants and sidereal time.
//!
//! An instant is an `f64` count of seconds since the J2000 epoch
//! (2000-01-01T12:00:00 UTC). Nothing in this module reads the system
//! clock, so every result is reproducible from its arguments.

use crate::types::SECONDS_PER_DAY;

/// J2000.0 epoch as Unix timestamp (January 1, 2000, 12:00 UTC)
pub const J2000_UNIX: i64 = 946728000;

/// GMST at the J2000 epoch (degrees)
pub const GMST_AT_J2000: f64 = 280.46061837;

/// Sidereal advance per solar day (degrees/day)
pub const GMST_RATE: f64 = 360.98564736629;

/// Convert Unix timestamp to seconds since J2000 epoch
pub fn unix_to_j2000_seconds(unix_timestamp: i64) -> f64 {
    (unix_timestamp - J2000_UNIX) as f64
}

/// Convert J2000 seconds to Unix timestamp (whole seconds, truncated)
pub fn j2000_seconds_to_unix(j2000_seconds: f64) -> i64 {
    J2000_UNIX + j2000_seconds as i64
}

/// Days elapsed since the J2000 epoch.
pub fn days_since_j2000(j2000_seconds: f64) -> f64 {
    j2000_seconds / SECONDS_PER_DAY
}

/// Greenwich Mean Sidereal Time in degrees, `[0, 360)`.
///
/// Linear J2000 model: `280.46061837 + 360.98564736629 * D`, where D is
/// days since J2000. Higher-order terms are ignored.
pub fn gmst(j2000_seconds: f64) -> f64 {
    (GMST_AT_J2000 + GMST_RATE * days_since_j2000(j2000_seconds)).rem_euclid(360.0)
}

/// Local sidereal time (degrees, not wrapped) at an east longitude.
pub fn local_sidereal_time(j2000_seconds: f64, longitude_deg: f64) -> f64 {
    gmst(j2000_seconds) + longitude_deg
}

/// Format J2000 seconds as an ISO-8601 UTC timestamp with milliseconds,
/// e.g. `2000-01-01T12:00:00.000Z`.
///
/// Leap seconds are ignored, as in Unix time.
pub fn j2000_seconds_to_iso8601(j2000_seconds: f64) -> String {
    let unix_ms = (J2000_UNIX as f64 * 1000.0 + j2000_seconds * 1000.0).round() as i64;

    let days_since_epoch = unix_ms.div_euclid(86_400_000);
    let ms_of_day = unix_ms.rem_euclid(86_400_000);

    let hours = ms_of_day / 3_600_000;
    let minutes = (ms_of_day % 3_600_000) / 60_000;
    let seconds = (ms_of_day % 60_000) / 1000;
    let millis = ms_of_day % 1000;

    let (year, month, day) = days_to_ymd(days_since_epoch);

    format!("{year:04}-{month:02}-{day:02}T{hours:02}:{minutes:02}:{seconds:02}.{millis:03}Z")
}

/// Convert days since Unix epoch to year, month, day (proleptic Gregorian)
fn days_to_ymd(days: i64) -> (i64, u32, u32) {
    let shifted = days + 719468; // days from 0000-03-01 to 1970-01-01
    let era = shifted.div_euclid(146097);
    let day_of_era = shifted.rem_euclid(146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era as i64 + era * 400 + i64::from(month <= 2);

    (year, month, day)
}
