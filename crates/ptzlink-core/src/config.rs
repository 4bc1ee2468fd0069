// Connection configuration
//
// Host/port/credentials plus the two timer cadences. Validation happens
// before any login attempt: a missing field yields a bad-config status,
// not a connection error.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use ptzlink_api::CameraEndpoint;

use crate::error::CoreError;

/// Cadence of the steady-state polling timer.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Cadence of the reconnection timer.
pub const RECONNECT_INTERVAL: Duration = Duration::from_millis(5000);

/// Everything needed to own one camera connection.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    /// Steady-state poll cadence. `Duration::ZERO` disables the poll
    /// timer entirely (one-shot CLI use).
    pub poll_interval: Duration,
    /// Reconnection attempt cadence.
    pub reconnect_interval: Duration,
}

impl CameraConfig {
    /// Config with default port and timer cadences.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            host: host.into(),
            port: 80,
            username: username.into(),
            password,
            poll_interval: POLL_INTERVAL,
            reconnect_interval: RECONNECT_INTERVAL,
        }
    }

    /// Check that every field required for login is present.
    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = if self.host.trim().is_empty() {
            Some("host")
        } else if self.port == 0 {
            Some("port")
        } else if self.username.is_empty() {
            Some("username")
        } else if self.password.expose_secret().is_empty() {
            Some("password")
        } else {
            None
        };
        match missing {
            Some(field) => Err(CoreError::BadConfig {
                message: format!("{field} is missing or empty"),
            }),
            None => Ok(()),
        }
    }

    /// The wire-level connection target.
    pub fn endpoint(&self) -> CameraEndpoint {
        CameraEndpoint {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
