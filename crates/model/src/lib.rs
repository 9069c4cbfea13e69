pub use serde_with;

pub mod coordinate;
pub mod error;
pub mod geofence;
pub mod location;
pub mod membership;
pub mod notification;
pub mod polygon;
pub mod role;

pub use coordinate::Coordinate;
pub use error::GeometryError;
pub use geofence::{Geofence, GeofenceOrigin};
pub use location::{LocationFix, Viewport};
pub use membership::MembershipResult;
pub use notification::{Notification, NotificationKind};
pub use polygon::{BoundingBox, Polygon};
pub use role::{Role, ViewMode};
