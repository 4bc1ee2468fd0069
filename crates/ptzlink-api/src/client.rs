// Camera HTTP client
//
// Wraps `reqwest::Client` with camera-specific URL construction, the
// `{Cmd, Version, Content}` envelope, and session-token handling. All
// subsystem modules (ptz, image, etc.) are implemented as inherent
// methods via separate files to keep this module focused on transport
// mechanics.

use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::sign;
use crate::transport::TransportConfig;

/// Protocol version carried on every request.
pub const PROTOCOL_VERSION: &str = "2.00.000";

/// Login endpoint, the only unauthenticated call.
pub const LOGIN_ENDPOINT: &str = "/apiv2/login";

// ── Connection target ────────────────────────────────────────────────

/// Where and as whom to connect.
#[derive(Debug, Clone)]
pub struct CameraEndpoint {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
}

impl CameraEndpoint {
    /// Check that every field required for login is present.
    ///
    /// Violations are configuration problems, not connectivity problems,
    /// and are reported before any network round-trip.
    pub fn validate(&self) -> Result<(), Error> {
        if self.host.trim().is_empty() {
            return Err(Error::Config { field: "host" });
        }
        if self.port == 0 {
            return Err(Error::Config { field: "port" });
        }
        if self.username.is_empty() {
            return Err(Error::Config { field: "username" });
        }
        if self.password.expose_secret().is_empty() {
            return Err(Error::Config { field: "password" });
        }
        Ok(())
    }

    /// Camera base URL (`http://{host}:{port}`).
    pub fn base_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&format!("http://{}:{}", self.host, self.port))?)
    }
}

// ── Wire envelope ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Cmd")]
    cmd: String,
    #[serde(rename = "Version", default)]
    version: String,
    #[serde(rename = "Content")]
    content: Value,
}

#[derive(Deserialize)]
struct TokenValue {
    #[serde(rename = "Value")]
    value: String,
}

/// A parsed camera response.
///
/// `status != 0` is a soft per-call failure: the HTTP exchange itself
/// succeeded, the session stays valid, and the payload (if any) is still
/// available. [`require_ok`](Self::require_ok) upgrades it to a hard error
/// for callers that cannot proceed without data.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub cmd: String,
    pub version: String,
    pub status: i64,
    content: Value,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 0
    }

    /// Convert a non-zero embedded status into [`Error::CameraStatus`].
    pub fn require_ok(self) -> Result<Self, Error> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(Error::CameraStatus {
                cmd: self.cmd,
                status: self.status,
            })
        }
    }

    /// The full `Content` object.
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Deserialize a named field of `Content` into a typed model.
    pub fn content_field<T: DeserializeOwned>(&self, key: &str) -> Result<T, Error> {
        let field = self
            .content
            .get(key)
            .ok_or_else(|| Error::Deserialization {
                message: format!("{} response missing Content.{key}", self.cmd),
                body: self.content.to_string(),
            })?;
        serde_json::from_value(field.clone()).map_err(|e| Error::Deserialization {
            message: format!("{} Content.{key}: {e}", self.cmd),
            body: self.content.to_string(),
        })
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Authenticated HTTP channel to one camera.
///
/// Owns the session token: [`login`](Self::login) stores it,
/// [`clear_session`](Self::clear_session) discards it, and every
/// authenticated request constructs the `Cookie: Username=..;Token=..`
/// header from it. Absence of a token means authenticated calls fail
/// fast without a network round-trip.
pub struct CameraClient {
    http: reqwest::Client,
    base_url: Url,
    endpoint: CameraEndpoint,
    token: RwLock<Option<String>>,
}

impl CameraClient {
    /// Create a new client from an endpoint and transport config.
    pub fn new(endpoint: CameraEndpoint, transport: &TransportConfig) -> Result<Self, Error> {
        let base_url = endpoint.base_url()?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            endpoint,
            token: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client` and explicit
    /// base URL (used by tests pointing at a mock server).
    pub fn with_client(http: reqwest::Client, base_url: Url, endpoint: CameraEndpoint) -> Self {
        Self {
            http,
            base_url,
            endpoint,
            token: RwLock::new(None),
        }
    }

    /// The configured username.
    pub fn username(&self) -> &str {
        &self.endpoint.username
    }

    /// The camera base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a session token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    // ── Session lifecycle ────────────────────────────────────────

    /// Authenticate with the camera.
    ///
    /// Builds the signed payload, POSTs it to the login endpoint, and on
    /// a structured success response (`Content.Status == 0` with a token)
    /// stores the token. On any rejection, non-2xx result, network error,
    /// or malformed body the stored token is cleared. Never retries --
    /// retry policy belongs to the session controller.
    pub async fn login(&self) -> Result<(), Error> {
        self.endpoint.validate()?;

        let signed = sign::login_sign(&self.endpoint.password)?;
        let url = self.base_url.join(LOGIN_ENDPOINT)?;
        let body = json!({
            "Cmd": "ReqHttpLogin",
            "Version": PROTOCOL_VERSION,
            "Content": {
                "LoginInfo": {
                    "UserName": self.endpoint.username,
                    "Salt": signed.salt,
                    "Sign": signed.sign,
                }
            }
        });

        debug!(%url, "logging in as {}", self.endpoint.username);

        match self.try_login(url, &body).await {
            Ok(token) => {
                *self.token.write().expect("token lock poisoned") = Some(token);
                debug!("login successful");
                Ok(())
            }
            Err(e) => {
                self.clear_session();
                Err(e)
            }
        }
    }

    /// The fallible middle of `login`: HTTP exchange and token extraction.
    ///
    /// Non-2xx responses and rejected/malformed login bodies become
    /// [`Error::Authentication`]; network-level failures keep their
    /// transport identity. Both classes trigger the same reconnection
    /// handling upstream.
    async fn try_login(&self, url: Url, body: &Value) -> Result<String, Error> {
        let resp = self.http.post(url).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        let text = resp.text().await?;
        let parsed = parse_envelope(&text).map_err(|e| Error::Authentication {
            message: format!("malformed login response: {e}"),
        })?;

        if !parsed.is_ok() {
            return Err(Error::Authentication {
                message: format!("login rejected with status {}", parsed.status),
            });
        }

        let token: TokenValue = parsed.content_field("Token").map_err(|e| {
            Error::Authentication {
                message: format!("login response missing token: {e}"),
            }
        })?;
        Ok(token.value)
    }

    /// End the current session on the camera, then drop the token.
    ///
    /// Best-effort: the token is cleared even if the camera is unreachable.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = self.request("/apiv2/login", "ReqHttpLogout", None).await;
        self.clear_session();
        match result {
            Ok(_) | Err(Error::NotAuthenticated) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Idempotently discard the session token.
    pub fn clear_session(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    // ── Request execution ────────────────────────────────────────

    /// Execute an authenticated command against `endpoint`.
    ///
    /// Fails immediately with [`Error::NotAuthenticated`] (no network
    /// call) when no token is stored. A non-zero embedded status is
    /// logged as a warning and the parsed response still returned; use
    /// [`ApiResponse::require_ok`] to make it a hard error.
    pub async fn request(
        &self,
        endpoint: &str,
        cmd: &str,
        content: Option<Value>,
    ) -> Result<ApiResponse, Error> {
        let token = self
            .token
            .read()
            .expect("token lock poisoned")
            .clone()
            .ok_or(Error::NotAuthenticated)?;

        let url = self.base_url.join(endpoint)?;
        let mut body = json!({ "Cmd": cmd, "Version": PROTOCOL_VERSION });
        if let Some(content) = content {
            body["Content"] = content;
        }
        let cookie = format!("Username={};Token={}", self.endpoint.username, token);

        debug!(%url, %cmd, body = %body, "camera request");

        let resp = self.post_envelope(url, &body, Some(&cookie)).await?;
        if !resp.is_ok() {
            warn!(cmd, status = resp.status, "camera returned non-zero status");
        }
        Ok(resp)
    }

    /// POST a JSON body and parse the `{Cmd, Version, Content}` envelope.
    async fn post_envelope(
        &self,
        url: Url,
        body: &Value,
        cookie: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        let mut builder = self.http.post(url).json(body);
        if let Some(cookie) = cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }

        let resp = builder.send().await?;
        if let Err(e) = resp.error_for_status_ref() {
            return Err(Error::Transport(e));
        }

        let text = resp.text().await?;
        parse_envelope(&text)
    }
}

/// Parse the `{Cmd, Version, Content:{Status, ...}}` envelope.
fn parse_envelope(text: &str) -> Result<ApiResponse, Error> {
    let envelope: Envelope = serde_json::from_str(text).map_err(|e| {
        let preview = &text[..text.len().min(200)];
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: text.to_owned(),
        }
    })?;

    let status = envelope
        .content
        .get("Status")
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::Deserialization {
            message: format!("{} response missing Content.Status", envelope.cmd),
            body: text.to_owned(),
        })?;

    Ok(ApiResponse {
        cmd: envelope.cmd,
        version: envelope.version,
        status,
        content: envelope.content,
    })
}
