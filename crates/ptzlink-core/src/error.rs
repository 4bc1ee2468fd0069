// ── Core error types ──
//
// User-facing errors from ptzlink-core. These are NOT wire-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<ptzlink_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ────────────────────────────────────────────────
    /// Required connection fields missing. Never retried; surfaced as a
    /// persistent bad-config status until the configuration is corrected.
    #[error("Bad configuration: {message}")]
    BadConfig { message: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach camera at {host}:{port}: {reason}")]
    ConnectionFailed {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Not connected to a camera")]
    NotConnected,

    // ── Camera protocol ──────────────────────────────────────────────
    /// The camera rejected a command with a non-zero embedded status.
    #[error("Camera rejected {cmd} with status {status}")]
    Camera { cmd: String, status: i64 },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` for soft per-call camera rejections that leave the
    /// session intact.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::Camera { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<ptzlink_api::Error> for CoreError {
    fn from(err: ptzlink_api::Error) -> Self {
        match err {
            ptzlink_api::Error::Config { field } => CoreError::BadConfig {
                message: format!("{field} is missing or empty"),
            },
            ptzlink_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            ptzlink_api::Error::NotAuthenticated => CoreError::NotConnected,
            ptzlink_api::Error::Transport(ref e) => {
                let (host, port) = e
                    .url()
                    .map(|u| {
                        (
                            u.host_str().unwrap_or("<unknown>").to_owned(),
                            u.port_or_known_default().unwrap_or(0),
                        )
                    })
                    .unwrap_or_else(|| ("<unknown>".into(), 0));
                CoreError::ConnectionFailed {
                    host,
                    port,
                    reason: e.to_string(),
                }
            }
            ptzlink_api::Error::InvalidUrl(e) => CoreError::BadConfig {
                message: format!("invalid camera URL: {e}"),
            },
            ptzlink_api::Error::CameraStatus { cmd, status } => {
                CoreError::Camera { cmd, status }
            }
            ptzlink_api::Error::Deserialization { message, body: _ } => {
                CoreError::Api { message }
            }
            ptzlink_api::Error::Entropy(msg) => CoreError::Internal(format!(
                "secure random source unavailable: {msg}"
            )),
        }
    }
}
