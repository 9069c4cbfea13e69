//! Seams to the platform: location service, map rendering and alerts.

use async_trait::async_trait;
use model::{Coordinate, Geofence, Notification, NotificationKind, Viewport};
use thiserror::Error;

pub mod simulated;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location services are disabled")]
    ServiceDisabled,

    #[error("could not get location")]
    Unavailable,
}

impl LocationError {
    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            Self::PermissionDenied => NotificationKind::LocationPermissionDenied,
            Self::ServiceDisabled => NotificationKind::LocationServiceDisabled,
            Self::Unavailable => NotificationKind::LocationUnavailable,
        }
    }
}

#[async_trait]
pub trait LocationProvider {
    async fn current_coordinate(&mut self) -> Result<Coordinate, LocationError>;
}

pub trait Renderer {
    /// Draws the geofences in the given order. `user_marker` is `None` while
    /// no location is known or the view hides the user.
    fn render(
        &mut self,
        geofences: &[&Geofence],
        user_marker: Option<Coordinate>,
        viewport: &Viewport,
    );
}

pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}
