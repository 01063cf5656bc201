//! Orbitcalc - Orbital Mechanics Core
//!
//! Headless demo: prints an ISS orbit report, a LEO to GEO Hohmann plan
//! and the next launch windows from Cape Canaveral into the ISS plane.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use orbitcalc::launch::{launch_windows, LaunchSite};
use orbitcalc::maneuver::hohmann_transfer_altitudes;
use orbitcalc::metrics::analyze_orbit;
use orbitcalc::physics::{propagate_with_config, OrbitPlugin, PropagationConfig};
use orbitcalc::time::{unix_to_j2000_seconds, GMST_AT_J2000};
use orbitcalc::types::{BodyConstants, OrbitalElements};

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(OrbitPlugin)
        .add_systems(Startup, (report_iss_orbit, plan_geo_transfer, list_launch_windows).chain());

    // Startup systems run on the first update; nothing needs to tick after that
    app.update();
}

fn iss_elements() -> OrbitalElements {
    OrbitalElements::new(6778.0, 0.0001, 51.6, 0.0, 0.0, 0.0)
}

fn report_iss_orbit(constants: Res<BodyConstants>, config: Res<PropagationConfig>) {
    match analyze_orbit(&iss_elements(), &constants, &config) {
        Ok(report) => {
            info!(
                "ISS: period {:.1} min, apogee {:.1} km, perigee {:.1} km, {} ({})",
                report.period / 60.0,
                report.altitudes.apogee,
                report.altitudes.perigee,
                report.stability,
                report.stability.lifespan_hint()
            );
            info!(
                "ISS: {} trajectory samples, apogee speed {:.3} km/s, perigee speed {:.3} km/s",
                report.trajectory.len(),
                report.velocities.apogee,
                report.velocities.perigee
            );
        }
        Err(err) => error!("ISS orbit rejected: {err}"),
    }

    // One hour at the configured step
    match propagate_with_config(&iss_elements(), 3600.0, &constants, &config) {
        Ok(trajectory) => info!(
            "ISS: {} samples over {:.0} s, final radius {:.1} km",
            trajectory.len(),
            trajectory.duration(),
            trajectory.last().map_or(0.0, |p| p.position.length())
        ),
        Err(err) => error!("ISS propagation failed: {err}"),
    }
}

fn plan_geo_transfer(constants: Res<BodyConstants>) {
    let plan = hohmann_transfer_altitudes(407.0, 35793.0, &constants);
    info!(
        "LEO -> GEO: dv1 {:.3} km/s, dv2 {:.3} km/s, total {:.3} km/s, coast {:.2} h",
        plan.delta_v1,
        plan.delta_v2,
        plan.total_delta_v,
        plan.transfer_time / 3600.0
    );
}

fn list_launch_windows() {
    let cape = LaunchSite::new(28.5, -80.6);
    let start = unix_to_j2000_seconds(1_767_225_600);
    let target_raan = GMST_AT_J2000 + cape.longitude;

    match launch_windows(cape, 51.6, target_raan, 5, start) {
        Ok(windows) if windows.is_empty() => info!("No launch windows in the scan range"),
        Ok(windows) => {
            for window in windows {
                info!(
                    "Launch window {} ({}, azimuth {:.2}°)",
                    window.time_iso8601(),
                    window.pass,
                    window.azimuth
                );
            }
        }
        Err(err) => warn!("{err}"),
    }
}
