use thiserror::Error;

pub mod config;
pub mod evaluator;
pub mod platform;
pub mod policy;
pub mod predefined;
pub mod registry;
pub mod session;
pub mod state;

pub use config::{ConfigError, GeofencingConfig};
pub use evaluator::{evaluate, is_inside, Presence};
pub use platform::{LocationError, LocationProvider, Notifier, Renderer};
pub use policy::{notifications_for, NotificationPolicy};
pub use registry::{GeofenceRegistry, RegistryError};
pub use session::Session;
pub use state::AppState;

/// Error of a single user-triggered session operation. None of them are fatal,
/// the session state is left as it was before the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Location(#[from] LocationError),
}

pub type SessionResult<O> = Result<O, SessionError>;
