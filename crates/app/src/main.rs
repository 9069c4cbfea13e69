use std::env;

use geofencing::{platform::simulated::ScriptedLocationProvider, GeofencingConfig, Session};
use model::{Coordinate, Geofence, Notification, Role};
use schemars::schema_for;

mod console;

use console::{ConsoleNotifier, JsonRenderer};

const SIMULATED_LOCATION_VAR: &str = "SIMULATED_LOCATION";
const DEFAULT_LOCATION: (f64, f64) = (28.48125, 77.10206);

fn simulated_location() -> Result<Coordinate, String> {
    let Ok(raw) = env::var(SIMULATED_LOCATION_VAR) else {
        return Ok(Coordinate::new_unchecked(DEFAULT_LOCATION.0, DEFAULT_LOCATION.1));
    };
    let (latitude, longitude) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected 'lat,lon', got '{}'", raw))?;
    let latitude: f64 = latitude.trim().parse().map_err(|why| format!("{}", why))?;
    let longitude: f64 = longitude.trim().parse().map_err(|why| format!("{}", why))?;
    Coordinate::new(latitude, longitude).map_err(|why| why.to_string())
}

/// Prints the JSON schemas of what the renderer and notifier receive.
fn print_schemas() {
    let schemas = [
        ("geofence", serde_json::to_string_pretty(&schema_for!(Geofence))),
        ("notification", serde_json::to_string_pretty(&schema_for!(Notification))),
    ];
    for (name, schema) in schemas {
        match schema {
            Ok(schema) => println!("{}: {}", name, schema),
            Err(why) => log::error!("could not serialize {} schema: {}", name, why),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    if env::args().any(|arg| arg == "--schema") {
        print_schemas();
        return;
    }

    let config = GeofencingConfig::from_env().expect("invalid geofencing configuration.");
    let location = simulated_location()
        .unwrap_or_else(|why| panic!("invalid {}: {}", SIMULATED_LOCATION_VAR, why));

    let mut session = Session::new(
        config,
        ScriptedLocationProvider::new([Ok(location), Ok(location)]),
        JsonRenderer::default(),
        ConsoleNotifier::default(),
    );

    // startup
    if let Err(why) = session.start().await {
        log::warn!("startup check failed: {}", why);
    }

    // only admins may add geofences
    if let Err(why) = session.add_geofence() {
        log::warn!("{}", why);
    }
    session.set_role(Role::Admin);
    match session.add_geofence() {
        Ok(fence) => log::info!("created {}", fence.id),
        Err(why) => log::warn!("{}", why),
    }

    // "Get Current Location" again, now with the new geofence
    match session.refresh_location().await {
        Ok(results) => log::info!("evaluated {} geofences", results.len()),
        Err(why) => log::warn!("refresh failed: {}", why),
    }

    // the script is drained, so this reports an unavailable location
    if let Err(why) = session.refresh_location().await {
        log::warn!("refresh failed: {}", why);
    }

    println!("alerts shown: {}", session.notifier().shown);
}
