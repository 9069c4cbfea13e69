use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::Id;

use crate::Geofence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    /// Inside a geofence, acknowledged with a single button.
    Inside,
    /// Inside a geofence, admins confirm their presence with "Yes" or "No".
    InsideAdminConfirm,
    Outside,
    /// A user attempted an admin-only action.
    AccessDenied,
    /// An action needed a location before any was known.
    NoLocation,
    LocationPermissionDenied,
    LocationServiceDisabled,
    LocationUnavailable,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Inside | Self::InsideAdminConfirm | Self::Outside | Self::NoLocation => {
                "Geofence"
            }
            Self::AccessDenied => "Access Denied",
            Self::LocationPermissionDenied => "Location",
            Self::LocationServiceDisabled | Self::LocationUnavailable => "Error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Inside => "You are inside a geofence region.",
            Self::InsideAdminConfirm => "You are inside a geofence region. Are you present?",
            Self::Outside => "You are outside the geofence region.",
            Self::AccessDenied => "Only admins can add new geofences.",
            Self::NoLocation => "Current location is not set yet.",
            Self::LocationPermissionDenied => "Location permission denied",
            Self::LocationServiceDisabled => {
                "Location services are disabled. Please enable them."
            }
            Self::LocationUnavailable => "Could not get location",
        }
    }

    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::InsideAdminConfirm => &["Yes", "No"],
            _ => &["OK"],
        }
    }

    /// The presence confirmation must be answered, it can not be dismissed.
    pub fn cancelable(&self) -> bool {
        !matches!(self, Self::InsideAdminConfirm)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub geofence_id: Option<Id<Geofence>>,
}

impl Notification {
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            kind,
            geofence_id: None,
        }
    }

    pub fn for_geofence(kind: NotificationKind, geofence_id: Id<Geofence>) -> Self {
        Self {
            kind,
            geofence_id: Some(geofence_id),
        }
    }
}
