use indexmap::IndexMap;
use model::{Coordinate, Geofence, Role};
use thiserror::Error;
use utility::id::Id;

use crate::predefined::load_predefined;

/// Half the edge length, in degrees, of geofences created by admins.
pub const DYNAMIC_HALF_WIDTH_DEG: f64 = 0.001;

const ID_PREFIX: &str = "geofence";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("only admins can add new geofences")]
    PermissionDenied,

    #[error("current location is not known yet")]
    NoLocation,
}

/// All known geofences. Predefined entries always come before dynamic ones,
/// and both keep their insertion order.
#[derive(Debug, Clone)]
pub struct GeofenceRegistry {
    predefined: IndexMap<Id<Geofence>, Geofence>,
    dynamic: IndexMap<Id<Geofence>, Geofence>,
    // Never decreases, so ids stay unique even if removal is added.
    next_dynamic: usize,
}

impl GeofenceRegistry {
    pub fn new(predefined: Vec<Geofence>) -> Self {
        let predefined = predefined
            .into_iter()
            .map(|fence| (fence.id.clone(), fence))
            .collect::<IndexMap<_, _>>();
        let next_dynamic = predefined.len() + 1;
        Self {
            predefined,
            dynamic: IndexMap::new(),
            next_dynamic,
        }
    }

    pub fn with_predefined() -> Self {
        Self::new(load_predefined())
    }

    /// Adds a square geofence centered on `current`.
    pub fn add(
        &mut self,
        current: Option<Coordinate>,
        role: Role,
    ) -> Result<Geofence, RegistryError> {
        if !role.is_admin() {
            return Err(RegistryError::PermissionDenied);
        }
        let center = current.ok_or(RegistryError::NoLocation)?;

        let id = self.allocate_id();
        let fence = Geofence::dynamic_square(id.clone(), center, DYNAMIC_HALF_WIDTH_DEG);
        self.dynamic.insert(id, fence.clone());
        log::info!(
            "added geofence {} around ({}, {})",
            fence.id,
            center.latitude,
            center.longitude
        );
        Ok(fence)
    }

    fn allocate_id(&mut self) -> Id<Geofence> {
        loop {
            let id = Id::new(format!("{}{}", ID_PREFIX, self.next_dynamic));
            self.next_dynamic += 1;
            if !self.contains(&id) {
                return id;
            }
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &Geofence> + '_ {
        self.predefined.values().chain(self.dynamic.values())
    }

    pub fn get(&self, id: &Id<Geofence>) -> Option<&Geofence> {
        self.predefined.get(id).or_else(|| self.dynamic.get(id))
    }

    pub fn contains(&self, id: &Id<Geofence>) -> bool {
        self.predefined.contains_key(id) || self.dynamic.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.predefined.len() + self.dynamic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dynamic_count(&self) -> usize {
        self.dynamic.len()
    }
}

impl Default for GeofenceRegistry {
    fn default() -> Self {
        Self::with_predefined()
    }
}
