use std::env;

use model::Role;
use thiserror::Error;

use crate::policy::NotificationPolicy;

pub const OUTSIDE_POLICY_VAR: &str = "GEOFENCE_OUTSIDE_POLICY";
pub const INITIAL_ROLE_VAR: &str = "GEOFENCE_INITIAL_ROLE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeofencingConfig {
    pub outside_policy: NotificationPolicy,
    pub initial_role: Role,
}

impl GeofencingConfig {
    /// Reads the configuration from the environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(OUTSIDE_POLICY_VAR) {
            config.outside_policy = value
                .parse::<NotificationPolicy>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: OUTSIDE_POLICY_VAR,
                    value,
                })?;
        }
        if let Some(value) = lookup(INITIAL_ROLE_VAR) {
            config.initial_role = value
                .parse::<Role>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: INITIAL_ROLE_VAR,
                    value,
                })?;
        }
        Ok(config)
    }
}
