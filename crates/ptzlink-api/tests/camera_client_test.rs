#![allow(clippy::unwrap_used)]
// Integration tests for `CameraClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use ptzlink_api::{CameraClient, CameraEndpoint, Error};

// ── Helpers ─────────────────────────────────────────────────────────

fn endpoint() -> CameraEndpoint {
    CameraEndpoint {
        host: "192.168.1.60".into(),
        port: 80,
        username: "admin".into(),
        password: SecretString::from("secret123".to_string()),
    }
}

async fn setup() -> (MockServer, CameraClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = CameraClient::with_client(reqwest::Client::new(), base_url, endpoint());
    (server, client)
}

fn login_ok() -> serde_json::Value {
    json!({
        "Cmd": "ReqHttpLogin",
        "Version": "2.00.000",
        "Content": { "Status": 0, "Token": { "Value": "tok-123" } }
    })
}

async fn login(server: &MockServer, client: &CameraClient) {
    Mock::given(method("POST"))
        .and(path("/apiv2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_ok()))
        .mount(server)
        .await;
    client.login().await.unwrap();
}

/// Matches a login body whose `LoginInfo` carries a well-formed salt and
/// signature (32 lowercase hex characters each).
struct SignedLoginBody;

impl wiremock::Match for SignedLoginBody {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
            return false;
        };
        let info = &body["Content"]["LoginInfo"];
        let hex32 = |v: &serde_json::Value| {
            v.as_str().is_some_and(|s| {
                s.len() == 32
                    && s.chars()
                        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
            })
        };
        info["UserName"] == "admin" && hex32(&info["Salt"]) && hex32(&info["Sign"])
    }
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_sends_signed_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/apiv2/login"))
        .and(body_partial_json(json!({ "Cmd": "ReqHttpLogin", "Version": "2.00.000" })))
        .and(SignedLoginBody)
        .respond_with(ResponseTemplate::new(200).set_body_json(login_ok()))
        .expect(1)
        .mount(&server)
        .await;

    client.login().await.unwrap();
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_login_rejected_status_clears_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/apiv2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cmd": "ReqHttpLogin",
            "Version": "2.00.000",
            "Content": { "Status": -1 }
        })))
        .mount(&server)
        .await;

    let result = client.login().await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_login_http_error_is_authentication_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/apiv2/login"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let result = client.login().await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(message.contains("403"), "expected HTTP status in: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_requires_complete_config() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let mut incomplete = endpoint();
    incomplete.username = String::new();
    let client = CameraClient::with_client(reqwest::Client::new(), base_url, incomplete);

    let result = client.login().await;

    assert!(
        matches!(result, Err(Error::Config { field: "username" })),
        "expected Config error, got: {result:?}"
    );
    // No request may reach the network for a config failure.
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ── Fail-fast without a session ─────────────────────────────────────

#[tokio::test]
async fn test_request_without_login_never_touches_network() {
    let (server, client) = setup().await;

    // Zero expected requests: the call must fail before any I/O.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.device_info().await;

    assert!(
        matches!(result, Err(Error::NotAuthenticated)),
        "expected NotAuthenticated, got: {result:?}"
    );
}

// ── Authenticated requests ──────────────────────────────────────────

#[tokio::test]
async fn test_request_carries_auth_cookie() {
    let (server, client) = setup().await;
    login(&server, &client).await;

    Mock::given(method("POST"))
        .and(path("/apiv2/system"))
        .and(wiremock::matchers::header(
            "Cookie",
            "Username=admin;Token=tok-123",
        ))
        .and(body_partial_json(json!({ "Cmd": "ReqGetDevInfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cmd": "ReqGetDevInfo",
            "Version": "2.00.000",
            "Content": {
                "Status": 0,
                "DevInfo": {
                    "DevName": "Studio Cam",
                    "Model": "PT20X",
                    "SerialNumber": "SN0001",
                    "SoftVersion": "2.1.7",
                    "HardVersion": "B"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client.device_info().await.unwrap();

    assert_eq!(info.model, "PT20X");
    assert_eq!(info.dev_name, "Studio Cam");
}

#[tokio::test]
async fn test_nonzero_status_is_soft_failure() {
    let (server, client) = setup().await;
    login(&server, &client).await;

    Mock::given(method("POST"))
        .and(path("/apiv2/image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cmd": "ReqGetDefogInfo",
            "Version": "2.00.000",
            "Content": { "Status": 7 }
        })))
        .mount(&server)
        .await;

    // The raw request succeeds and surfaces the embedded status...
    let resp = client
        .request("/apiv2/image", "ReqGetDefogInfo", None)
        .await
        .unwrap();
    assert_eq!(resp.status, 7);
    assert!(!resp.is_ok());

    // ...while the typed getter upgrades it to a CameraStatus error,
    // which callers treat as soft (session stays authenticated).
    let result = client.defog_info().await;
    match result {
        Err(e @ Error::CameraStatus { .. }) => assert!(e.is_soft()),
        other => panic!("expected CameraStatus error, got: {other:?}"),
    }
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_transport_error_on_http_failure() {
    let (server, client) = setup().await;
    login(&server, &client).await;

    Mock::given(method("POST"))
        .and(path("/apiv2/ptz"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.ptz_info().await;

    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;
    login(&server, &client).await;

    Mock::given(method("POST"))
        .and(path("/apiv2/system"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let result = client.device_info().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Session teardown ────────────────────────────────────────────────

#[tokio::test]
async fn test_clear_session_is_idempotent() {
    let (server, client) = setup().await;
    login(&server, &client).await;
    assert!(client.is_authenticated());

    client.clear_session();
    client.clear_session();
    assert!(!client.is_authenticated());

    let result = client.ptz_info().await;
    assert!(matches!(result, Err(Error::NotAuthenticated)));
}

#[tokio::test]
async fn test_preset_catalog_roundtrip() {
    let (server, client) = setup().await;
    login(&server, &client).await;

    Mock::given(method("POST"))
        .and(path("/apiv2/ptz"))
        .and(body_partial_json(json!({ "Cmd": "ReqGetPresetInfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cmd": "ReqGetPresetInfo",
            "Version": "2.00.000",
            "Content": {
                "Status": 0,
                "PresetInfo": [
                    { "Name": "Wide shot", "Number": 1, "FixedName": false },
                    { "Name": "Podium", "Number": 2, "FixedName": true }
                ]
            }
        })))
        .mount(&server)
        .await;

    let presets = client.preset_list().await.unwrap();

    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].name, "Wide shot");
    assert_eq!(presets[1].number, 2);
    assert!(presets[1].fixed_name);
}
