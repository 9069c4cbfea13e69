use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::Id;

use crate::Geofence;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResult {
    pub geofence_id: Id<Geofence>,
    pub inside: bool,
}

impl MembershipResult {
    pub fn new(geofence_id: Id<Geofence>, inside: bool) -> Self {
        Self {
            geofence_id,
            inside,
        }
    }
}
