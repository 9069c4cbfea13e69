use model::{
    Coordinate, Geofence, LocationFix, MembershipResult, Notification, NotificationKind, Role,
};

use crate::{
    config::GeofencingConfig,
    evaluator::Presence,
    platform::{LocationError, LocationProvider, Notifier, Renderer},
    policy::notifications_for,
    registry::{GeofenceRegistry, RegistryError},
    state::AppState,
    SessionError, SessionResult,
};

/// Drives the app: owns the state and the platform collaborators, and runs one
/// user action at a time.
pub struct Session<L, R, N>
where
    L: LocationProvider,
    R: Renderer,
    N: Notifier,
{
    config: GeofencingConfig,
    state: AppState,
    location: L,
    renderer: R,
    notifier: N,
}

impl<L, R, N> Session<L, R, N>
where
    L: LocationProvider,
    R: Renderer,
    N: Notifier,
{
    pub fn new(config: GeofencingConfig, location: L, renderer: R, notifier: N) -> Self {
        let state = AppState::new(GeofenceRegistry::with_predefined(), config.initial_role);
        Self::with_state(config, state, location, renderer, notifier)
    }

    pub fn with_state(
        config: GeofencingConfig,
        state: AppState,
        location: L,
        renderer: R,
        notifier: N,
    ) -> Self {
        Self {
            config,
            state,
            location,
            renderer,
            notifier,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Draws the map and checks the location once.
    pub async fn start(&mut self) -> SessionResult<Vec<MembershipResult>> {
        self.render();
        self.refresh_location().await
    }

    /// Fetches the current location and checks it against all geofences.
    /// Readings outside the valid coordinate range count as unavailable. On
    /// failure the previous fix is kept and nothing is evaluated.
    pub async fn refresh_location(&mut self) -> SessionResult<Vec<MembershipResult>> {
        let reading = self.location.current_coordinate().await.and_then(|reading| {
            Coordinate::new(reading.latitude, reading.longitude).map_err(|why| {
                log::warn!("discarding location reading: {}", why);
                LocationError::Unavailable
            })
        });
        let coordinate = match reading {
            Ok(coordinate) => coordinate,
            Err(why) => {
                log::warn!("location request failed: {}", why);
                self.notifier.notify(&Notification::new(why.notification_kind()));
                return Err(SessionError::Location(why));
            }
        };

        self.state.record_fix(LocationFix::now(coordinate));
        let results = self.state.evaluate(coordinate);

        let presence = Presence::from_results(&results);
        for id in &presence.matched {
            if let Some(fence) = self.state.registry.get(id) {
                log::debug!(
                    "inside {}, {:.3} km from its center",
                    id,
                    coordinate.distance_km(&fence.polygon.centroid())
                );
            }
        }
        log::info!(
            "({}, {}) is inside {} of {} geofences",
            coordinate.latitude,
            coordinate.longitude,
            presence.matched.len(),
            presence.evaluated
        );

        let notifications =
            notifications_for(&results, self.state.role, self.config.outside_policy);
        for notification in &notifications {
            self.notifier.notify(notification);
        }
        self.render();
        Ok(results)
    }

    /// Adds a geofence around the last known location. Admins only.
    pub fn add_geofence(&mut self) -> SessionResult<Geofence> {
        match self.state.add_geofence() {
            Ok(fence) => {
                self.render();
                Ok(fence)
            }
            Err(why) => {
                log::warn!("could not add geofence: {}", why);
                let kind = match why {
                    RegistryError::PermissionDenied => NotificationKind::AccessDenied,
                    RegistryError::NoLocation => NotificationKind::NoLocation,
                };
                self.notifier.notify(&Notification::new(kind));
                Err(why.into())
            }
        }
    }

    pub fn set_role(&mut self, role: Role) {
        log::info!("switching role from {} to {}", self.state.role, role);
        self.state.set_role(role);
        self.render();
    }

    fn render(&mut self) {
        let geofences = self.state.registry.all().collect::<Vec<_>>();
        self.renderer.render(
            &geofences,
            self.state.user_marker(),
            &self.state.viewport(),
        );
    }
}
