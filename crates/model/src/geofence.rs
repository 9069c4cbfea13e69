use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{Coordinate, Polygon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum GeofenceOrigin {
    /// Compiled into the application, immutable at runtime.
    Predefined,
    /// Created at runtime by an admin.
    Dynamic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Geofence {
    pub id: Id<Geofence>,
    pub polygon: Polygon,
    pub origin: GeofenceOrigin,
}

impl HasId for Geofence {
    type IdType = String;
}

impl Geofence {
    pub fn predefined(id: Id<Geofence>, polygon: Polygon) -> Self {
        Self {
            id,
            polygon,
            origin: GeofenceOrigin::Predefined,
        }
    }

    pub fn dynamic_square(id: Id<Geofence>, center: Coordinate, half_width: f64) -> Self {
        Self {
            id,
            polygon: Polygon::square(center, half_width),
            origin: GeofenceOrigin::Dynamic,
        }
    }

    pub fn is_predefined(&self) -> bool {
        self.origin == GeofenceOrigin::Predefined
    }
}
