use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// A location reading from the platform, kept as the last known position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationFix {
    pub coordinate: Coordinate,
    pub recorded_at: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(coordinate: Coordinate, recorded_at: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            recorded_at,
        }
    }

    pub fn now(coordinate: Coordinate) -> Self {
        Self::new(coordinate, Utc::now())
    }
}

/// Visible map region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Viewport {
    pub const LATITUDE_DELTA: f64 = 0.0022;
    pub const LONGITUDE_DELTA: f64 = 0.0021;

    /// Centered on the last fix, or on (0, 0) while no fix is known.
    pub fn around(fix: Option<&LocationFix>) -> Self {
        let center = fix
            .map(|fix| fix.coordinate)
            .unwrap_or(Coordinate::new_unchecked(0.0, 0.0));
        Self {
            center,
            latitude_delta: Self::LATITUDE_DELTA,
            longitude_delta: Self::LONGITUDE_DELTA,
        }
    }
}
