#![allow(clippy::unwrap_used)]
// Integration tests for `CameraSession` against a mock camera.
//
// All timing runs on tokio's paused clock: the 1 s / 5 s timers and the
// startup backoff advance instantly, so a 63-second retry ladder costs
// no wall-clock time.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use tokio::time::{Instant, timeout};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ptzlink_core::{
    CameraConfig, CameraSession, ChannelPublisher, Command, CommandResult, DeviceStatus,
    NoopPublisher, SessionPhase, TimerKind, VariableValue,
};

// ── Mock camera ─────────────────────────────────────────────────────

fn config_for(server: &MockServer) -> CameraConfig {
    let addr = server.address();
    let mut config = CameraConfig::new(
        addr.ip().to_string(),
        "admin",
        SecretString::from("secret123".to_string()),
    );
    config.port = addr.port();
    config
}

fn login_response() -> serde_json::Value {
    json!({
        "Cmd": "ReqHttpLogin",
        "Version": "2.00.000",
        "Content": { "Status": 0, "Token": { "Value": "tok-1" } }
    })
}

fn dev_info_response(model: &str) -> serde_json::Value {
    json!({
        "Cmd": "ReqGetDevInfo",
        "Version": "2.00.000",
        "Content": {
            "Status": 0,
            "DevInfo": {
                "DevName": "Studio Cam",
                "Model": model,
                "SerialNumber": "SN0001",
                "SoftVersion": "2.1.7",
                "HardVersion": "B"
            }
        }
    })
}

/// Minimal ability document: only pan/tilt is supported, so the poll
/// cycle fetches device, network, and position.
fn ability_response() -> serde_json::Value {
    json!({
        "Cmd": "ReqGetAbility",
        "Version": "2.00.000",
        "Content": {
            "Status": 0,
            "Ability": {
                "PtzAbility": {
                    "PanSpeed": {
                        "Type": "range",
                        "Description": "PanSpeed",
                        "Data": { "Min": 1, "Max": 24 }
                    }
                }
            }
        }
    })
}

fn network_response() -> serde_json::Value {
    json!({
        "Cmd": "ReqGetNetworkInfo",
        "Version": "2.00.000",
        "Content": {
            "Status": 0,
            "NetworkInfo": {
                "IpAddress": "192.168.1.60",
                "Netmask": "255.255.255.0",
                "Gateway": "192.168.1.1",
                "MacAddress": "AA:BB:CC:00:11:22",
                "Dhcp": false
            }
        }
    })
}

fn ptz_response(pan: i64) -> serde_json::Value {
    json!({
        "Cmd": "ReqGetPtzInfo",
        "Version": "2.00.000",
        "Content": {
            "Status": 0,
            "PtzInfo": { "PanPosition": pan, "TiltPosition": -40, "ZoomPosition": 3 }
        }
    })
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/apiv2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_response()))
        .mount(server)
        .await;
}

/// Mount everything a healthy camera answers, with `pan` as the fixed
/// reported position.
async fn mount_healthy_camera(server: &MockServer, pan: i64) {
    mount_login(server).await;
    Mock::given(method("POST"))
        .and(path("/apiv2/system"))
        .and(body_partial_json(json!({ "Cmd": "ReqGetDevInfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(dev_info_response("PT20X")))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/apiv2/system"))
        .and(body_partial_json(json!({ "Cmd": "ReqGetAbility" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ability_response()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/apiv2/device"))
        .and(body_partial_json(json!({ "Cmd": "ReqGetNetworkInfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(network_response()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/apiv2/ptz"))
        .and(body_partial_json(json!({ "Cmd": "ReqGetPtzInfo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ptz_response(pan)))
        .mount(server)
        .await;
    // Logout during shutdown.
    Mock::given(method("POST"))
        .and(path("/apiv2/login"))
        .and(body_partial_json(json!({ "Cmd": "ReqHttpLogout" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cmd": "ReqHttpLogout",
            "Version": "2.00.000",
            "Content": { "Status": 0 }
        })))
        .with_priority(1)
        .mount(server)
        .await;
}

async fn count_requests(server: &MockServer, url_path: &str, cmd: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| {
            r.url.path() == url_path
                && serde_json::from_slice::<serde_json::Value>(&r.body)
                    .is_ok_and(|b| b["Cmd"] == cmd)
        })
        .count()
}

async fn wait_for_phase(session: &CameraSession, want: SessionPhase) {
    let mut rx = session.phase();
    timeout(Duration::from_secs(600), rx.wait_for(|p| *p == want))
        .await
        .expect("phase transition timed out")
        .expect("phase channel closed");
}

// ── Startup backoff ─────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn startup_retries_seven_times_then_reconnects() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    // Device info always fails: every startup attempt dies on the fetch.
    Mock::given(method("POST"))
        .and(path("/apiv2/system"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = CameraSession::new(config_for(&server), Arc::new(NoopPublisher));
    let started = Instant::now();
    let result = session.start().await;
    let elapsed = started.elapsed();

    assert!(result.is_err(), "startup must fail when fetches never succeed");
    // Six backoff gaps between seven attempts: 1+2+4+8+16+32 = 63 s.
    assert!(
        elapsed >= Duration::from_secs(63) && elapsed < Duration::from_secs(65),
        "expected ~63s of backoff, got {elapsed:?}"
    );
    assert_eq!(*session.phase().borrow(), SessionPhase::Reconnecting);
    assert_eq!(*session.status().borrow(), DeviceStatus::ConnectionFailure);
    assert_eq!(session.active_timer().await, Some(TimerKind::Reconnect));

    session.shutdown().await;

    assert_eq!(count_requests(&server, "/apiv2/system", "ReqGetDevInfo").await, 7);
    assert_eq!(count_requests(&server, "/apiv2/login", "ReqHttpLogin").await, 1);
}

#[tokio::test(start_paused = true)]
async fn reconnect_attempts_login_on_five_second_cadence() {
    let server = MockServer::start().await;
    // Login itself fails: startup burns its seven attempts, then the
    // reconnect timer retries a login every 5 s.
    Mock::given(method("POST"))
        .and(path("/apiv2/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cmd": "ReqHttpLogin",
            "Version": "2.00.000",
            "Content": { "Status": -1 }
        })))
        .mount(&server)
        .await;

    let session = CameraSession::new(config_for(&server), Arc::new(NoopPublisher));
    assert!(session.start().await.is_err());
    assert_eq!(*session.phase().borrow(), SessionPhase::Reconnecting);
    assert_eq!(session.active_timer().await, Some(TimerKind::Reconnect));

    // Reconnect ticks land every 5 s; give the loop 30 s of paused time,
    // then stop it before counting so the tally is stable.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(*session.phase().borrow(), SessionPhase::Reconnecting);
    session.shutdown().await;

    // 7 startup attempts plus one login per 5 s tick in the 30 s window
    // (the final tick may race the shutdown).
    let logins = count_requests(&server, "/apiv2/login", "ReqHttpLogin").await;
    assert!(
        (12..=14).contains(&logins),
        "expected ~5 s login cadence, got {logins} logins"
    );
}

#[tokio::test(start_paused = true)]
async fn reconnect_succeeds_and_polling_resumes() {
    let server = MockServer::start().await;
    mount_healthy_camera(&server, 0).await;
    // The first seven device-info fetches fail; the eighth (first
    // reconnect tick) succeeds via the healthy fallback mocks.
    Mock::given(method("POST"))
        .and(path("/apiv2/system"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(7)
        .with_priority(1)
        .mount(&server)
        .await;

    let session = CameraSession::new(config_for(&server), Arc::new(NoopPublisher));
    assert!(session.start().await.is_err());
    assert_eq!(*session.phase().borrow(), SessionPhase::Reconnecting);

    wait_for_phase(&session, SessionPhase::Polling).await;

    assert_eq!(*session.status().borrow(), DeviceStatus::Ok);
    assert_eq!(session.active_timer().await, Some(TimerKind::Poll));
    // Initial login plus the reconnect-cycle login.
    assert!(count_requests(&server, "/apiv2/login", "ReqHttpLogin").await >= 2);

    session.shutdown().await;
}

// ── Steady-state polling ────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn poll_failure_switches_to_reconnect_then_resumes() {
    let server = MockServer::start().await;
    mount_healthy_camera(&server, 0).await;
    // Two good position fetches, then one transport failure. The
    // healthy fallback serves everything after that.
    Mock::given(method("POST"))
        .and(path("/apiv2/ptz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ptz_response(0)))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/apiv2/ptz"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .with_priority(2)
        .mount(&server)
        .await;

    let session = CameraSession::new(config_for(&server), Arc::new(NoopPublisher));
    session.start().await.expect("startup succeeds");
    assert_eq!(session.active_timer().await, Some(TimerKind::Poll));

    wait_for_phase(&session, SessionPhase::Reconnecting).await;
    assert_eq!(*session.status().borrow(), DeviceStatus::ConnectionFailure);
    assert_eq!(session.active_timer().await, Some(TimerKind::Reconnect));

    wait_for_phase(&session, SessionPhase::Polling).await;
    assert_eq!(*session.status().borrow(), DeviceStatus::Ok);
    assert_eq!(session.active_timer().await, Some(TimerKind::Poll));

    session.shutdown().await;
    assert_eq!(session.active_timer().await, None);
}

#[tokio::test(start_paused = true)]
async fn publishes_full_snapshot_then_only_deltas() {
    let server = MockServer::start().await;
    mount_healthy_camera(&server, 100).await;
    // First position fetch reports pan=0, everything after pan=100.
    Mock::given(method("POST"))
        .and(path("/apiv2/ptz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ptz_response(0)))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;

    let (publisher, mut deltas) = ChannelPublisher::new();
    let session = CameraSession::new(config_for(&server), Arc::new(publisher));
    session.start().await.expect("startup succeeds");

    // First poll tick: everything is new.
    let first = timeout(Duration::from_secs(60), deltas.recv())
        .await
        .expect("first publish")
        .unwrap();
    assert_eq!(first.get("model"), Some(&VariableValue::Text("PT20X".into())));
    assert_eq!(first.get("pan"), Some(&VariableValue::Int(0)));
    assert_eq!(first.get("ip_address"), Some(&VariableValue::Text("192.168.1.60".into())));

    // Second poll tick: only the pan position moved.
    let second = timeout(Duration::from_secs(60), deltas.recv())
        .await
        .expect("second publish")
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second.get("pan"), Some(&VariableValue::Int(100)));

    // Further identical snapshots publish nothing at all.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(deltas.try_recv().is_err(), "no publish for unchanged state");

    session.shutdown().await;
}

// ── Commands ────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn commands_route_to_the_camera() {
    let server = MockServer::start().await;
    mount_healthy_camera(&server, 0).await;
    Mock::given(method("POST"))
        .and(path("/apiv2/ptz"))
        .and(body_partial_json(json!({
            "Cmd": "ReqCtrlPreset",
            "Content": { "PresetCtrl": { "Operation": "call", "Number": 3 } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cmd": "ReqCtrlPreset",
            "Version": "2.00.000",
            "Content": { "Status": 0 }
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    let session = CameraSession::new(config_for(&server), Arc::new(NoopPublisher));
    session.start().await.expect("startup succeeds");

    let result = session.execute(Command::CallPreset { number: 3 }).await;
    assert_eq!(result.unwrap(), CommandResult::Ok);

    session.shutdown().await;
}

// ── Configuration ───────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn missing_config_fields_surface_bad_config_without_io() {
    let server = MockServer::start().await;
    let mut config = config_for(&server);
    config.password = SecretString::from(String::new());

    let session = CameraSession::new(config, Arc::new(NoopPublisher));
    let result = session.start().await;

    assert!(result.is_err());
    assert_eq!(*session.status().borrow(), DeviceStatus::BadConfig);
    assert_eq!(*session.phase().borrow(), SessionPhase::Idle);
    assert_eq!(session.active_timer().await, None);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn update_config_quiesces_and_reconnects_to_new_target() {
    let server_a = MockServer::start().await;
    mount_healthy_camera(&server_a, 0).await;
    let server_b = MockServer::start().await;
    mount_healthy_camera(&server_b, 0).await;

    let session = CameraSession::new(config_for(&server_a), Arc::new(NoopPublisher));
    session.start().await.expect("startup against A succeeds");
    assert_eq!(session.active_timer().await, Some(TimerKind::Poll));

    session
        .update_config(config_for(&server_b))
        .await
        .expect("startup against B succeeds");

    assert_eq!(*session.phase().borrow(), SessionPhase::Polling);
    assert_eq!(session.active_timer().await, Some(TimerKind::Poll));
    assert_eq!(
        count_requests(&server_b, "/apiv2/login", "ReqHttpLogin").await,
        1
    );

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_clears_state_and_stops_timers() {
    let server = MockServer::start().await;
    mount_healthy_camera(&server, 0).await;

    let session = CameraSession::new(config_for(&server), Arc::new(NoopPublisher));
    session.start().await.expect("startup succeeds");

    // Let at least one poll cycle populate the store.
    let mut store_rx = session.store().subscribe();
    timeout(Duration::from_secs(60), store_rx.wait_for(|s| s.position.is_some()))
        .await
        .expect("poll populates the store")
        .expect("store channel open");

    session.shutdown().await;

    assert_eq!(*session.phase().borrow(), SessionPhase::Idle);
    assert_eq!(session.active_timer().await, None);
    assert!(session.store().snapshot().is_empty());

    let result = session.execute(Command::PtzHome).await;
    assert!(result.is_err(), "commands after shutdown must fail");
}
