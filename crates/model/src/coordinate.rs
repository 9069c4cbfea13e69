use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo;

use crate::GeometryError;

/// A position in degrees. Treated as a planar point by membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Validated constructor. Both fields must be finite, latitude within
    /// [-90, 90] and longitude within [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeometryError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(GeometryError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self::new_unchecked(latitude, longitude))
    }

    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn offset(self, d_latitude: f64, d_longitude: f64) -> Self {
        Self::new_unchecked(self.latitude + d_latitude, self.longitude + d_longitude)
    }

    /// Clamps latitude to [-90, 90] and longitude to [-180, 180].
    pub fn clamped(self) -> Self {
        Self::new_unchecked(
            self.latitude.clamp(-90.0, 90.0),
            self.longitude.clamp(-180.0, 180.0),
        )
    }

    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    pub(crate) fn as_xy(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
