use model::{Coordinate, Geofence, LocationFix, MembershipResult, Role, ViewMode, Viewport};

use crate::{
    evaluator::evaluate,
    registry::{GeofenceRegistry, RegistryError},
};

/// Everything the app knows between two user actions.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub registry: GeofenceRegistry,
    pub role: Role,
    pub last_fix: Option<LocationFix>,
    pub view: ViewMode,
}

impl AppState {
    pub fn new(registry: GeofenceRegistry, role: Role) -> Self {
        Self {
            registry,
            role,
            last_fix: None,
            view: ViewMode::for_role(role),
        }
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.view = ViewMode::for_role(role);
    }

    pub fn record_fix(&mut self, fix: LocationFix) {
        self.last_fix = Some(fix);
    }

    pub fn current_location(&self) -> Option<Coordinate> {
        self.last_fix.map(|fix| fix.coordinate)
    }

    /// Adds a geofence around the last known location. Fails without touching
    /// the registry.
    pub fn add_geofence(&mut self) -> Result<Geofence, RegistryError> {
        let current = self.current_location();
        self.registry.add(current, self.role)
    }

    pub fn evaluate(&self, point: Coordinate) -> Vec<MembershipResult> {
        evaluate(point, self.registry.all())
    }

    pub fn user_marker(&self) -> Option<Coordinate> {
        self.current_location()
            .filter(|_| self.view.shows_user_marker())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::around(self.last_fix.as_ref())
    }
}
