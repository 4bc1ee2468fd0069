use thiserror::Error;

/// Top-level error type for the `ptzlink-api` crate.
///
/// Covers every failure mode of the camera wire protocol: configuration,
/// authentication, transport, embedded camera status codes, and payload
/// decoding. `ptzlink-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// A required connection field is missing or empty.
    #[error("Invalid camera configuration: {field} is missing or empty")]
    Config { field: &'static str },

    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected or the login response was unusable.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// An authenticated call was made without a stored session token.
    /// This is a sequencing error -- no network request is attempted.
    #[error("Not authenticated -- login required before camera requests")]
    NotAuthenticated,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, timeout, non-2xx, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Camera protocol ─────────────────────────────────────────────
    /// The camera answered with a non-zero embedded status. This is a
    /// soft per-call failure: the HTTP exchange itself succeeded and
    /// the session stays valid.
    #[error("Camera rejected {cmd} with status {status}")]
    CameraStatus { cmd: String, status: i64 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Entropy ─────────────────────────────────────────────────────
    /// The OS secure random source failed. Login signatures must never
    /// fall back to a non-cryptographic generator.
    #[error("Secure random source unavailable: {0}")]
    Entropy(String),
}

impl Error {
    /// Returns `true` for soft per-call failures that must not tear
    /// down the session (non-zero embedded camera status).
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::CameraStatus { .. })
    }

    /// Returns `true` if this error indicates the session is gone and
    /// re-authentication might resolve it.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::NotAuthenticated)
    }

    /// Returns `true` if this is a transient transport error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
