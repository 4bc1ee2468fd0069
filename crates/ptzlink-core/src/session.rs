// ── Camera session ──
//
// Full lifecycle management for one camera connection: authentication,
// the bounded startup fetch sequence, steady-state polling, reconnection
// with exponential backoff, and command routing.
//
// Scheduling model: a single cooperative timer slot. The 1 s poll timer
// and the 5 s reconnect timer are mutually exclusive by construction --
// the slot holds at most one of them, and swapping in one cancels the
// other. All camera I/O is logically sequential: one fetch or login
// cycle completes (success or failure) before the next is scheduled.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use ptzlink_api::camera::models::{CruiseAction, DevInfo, PanTiltMove, PresetAction};
use ptzlink_api::transport::TransportConfig;
use ptzlink_api::{AbilitySet, CameraClient};

use crate::command::{Command, CommandEnvelope, CommandResult};
use crate::config::CameraConfig;
use crate::diff::reconcile;
use crate::error::CoreError;
use crate::publish::VariablePublisher;
use crate::state::{CameraState, StateStore};

const COMMAND_CHANNEL_SIZE: usize = 64;

/// Attempts in the bounded startup fetch sequence.
const STARTUP_ATTEMPTS: u32 = 7;
/// First delay of the doubling startup backoff.
const STARTUP_BACKOFF_START: Duration = Duration::from_secs(1);
/// Cap on the doubling startup backoff.
const STARTUP_BACKOFF_CAP: Duration = Duration::from_secs(64);

// ── Observable state ─────────────────────────────────────────────────

/// Where the session's scheduling state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Polling,
    Reconnecting,
}

/// Connection status reflected to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// No connection attempted yet.
    Unknown,
    Ok,
    BadConfig,
    ConnectionFailure,
}

/// Which recurring timer occupies the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Poll,
    Reconnect,
}

struct TimerTask {
    kind: TimerKind,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

// ── Session ──────────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<SessionInner>`. Owns the session token
/// lifecycle, the two mutually exclusive timers, the state store, and
/// the command channel.
#[derive(Clone)]
pub struct CameraSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    config: Mutex<CameraConfig>,
    transport: TransportConfig,
    client: Mutex<Option<Arc<CameraClient>>>,
    ability: Mutex<AbilitySet>,
    store: StateStore,
    /// Snapshot the last publish was diffed against.
    previous: Mutex<CameraState>,
    publisher: Arc<dyn VariablePublisher>,
    phase: watch::Sender<SessionPhase>,
    status: watch::Sender<DeviceStatus>,
    /// The single timer slot -- at most one of poll/reconnect exists.
    timer: Mutex<Option<TimerTask>>,
    command_tx: Mutex<mpsc::Sender<CommandEnvelope>>,
    command_rx: Mutex<Option<mpsc::Receiver<CommandEnvelope>>>,
    command_task: Mutex<Option<JoinHandle<()>>>,
    /// Set once a failure episode has been logged; cleared on recovery.
    /// Keeps a persistent outage at one error entry instead of one per tick.
    failure_logged: AtomicBool,
}

impl CameraSession {
    /// Create a session from configuration. Does NOT connect -- call
    /// [`start()`](Self::start) to authenticate and begin polling.
    pub fn new(config: CameraConfig, publisher: Arc<dyn VariablePublisher>) -> Self {
        let (phase, _) = watch::channel(SessionPhase::Idle);
        let (status, _) = watch::channel(DeviceStatus::Unknown);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);

        Self {
            inner: Arc::new(SessionInner {
                config: Mutex::new(config),
                transport: TransportConfig::default(),
                client: Mutex::new(None),
                ability: Mutex::new(AbilitySet::empty()),
                store: StateStore::new(),
                previous: Mutex::new(CameraState::default()),
                publisher,
                phase,
                status,
                timer: Mutex::new(None),
                command_tx: Mutex::new(command_tx),
                command_rx: Mutex::new(Some(command_rx)),
                command_task: Mutex::new(None),
                failure_logged: AtomicBool::new(false),
            }),
        }
    }

    /// Access the state store.
    pub fn store(&self) -> &StateStore {
        &self.inner.store
    }

    /// The capability set reported by the connected camera.
    pub async fn abilities(&self) -> AbilitySet {
        self.inner.ability.lock().await.clone()
    }

    /// Subscribe to scheduling phase changes.
    pub fn phase(&self) -> watch::Receiver<SessionPhase> {
        self.inner.phase.subscribe()
    }

    /// Subscribe to connection status changes.
    pub fn status(&self) -> watch::Receiver<DeviceStatus> {
        self.inner.status.subscribe()
    }

    /// Which recurring timer is currently active, if any.
    ///
    /// The session owns a single timer slot, so the poll and reconnect
    /// timers can never coexist; this accessor makes that invariant
    /// observable.
    pub async fn active_timer(&self) -> Option<TimerKind> {
        self.inner.timer.lock().await.as_ref().map(|t| t.kind)
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Validate configuration, authenticate, run the bounded startup
    /// fetch sequence, and begin polling.
    ///
    /// A configuration violation sets the `BadConfig` status and returns
    /// without touching the network. A startup failure (all retry
    /// attempts exhausted) sets `ConnectionFailure` and leaves the
    /// session in the reconnecting phase, where login is re-attempted on
    /// the reconnect cadence until the camera answers.
    pub async fn start(&self) -> Result<(), CoreError> {
        let config = self.inner.config.lock().await.clone();
        if let Err(e) = config.validate() {
            let _ = self.inner.status.send(DeviceStatus::BadConfig);
            return Err(e);
        }

        self.spawn_command_processor().await;

        match self.startup(&config).await {
            Ok(()) => {
                self.enter_polling(&config, None).await;
                Ok(())
            }
            Err(e) => {
                self.log_failure_once(&e);
                let _ = self.inner.status.send(DeviceStatus::ConnectionFailure);
                self.enter_reconnecting(&config, None).await;
                Err(e)
            }
        }
    }

    /// Tear down the connection: stop whichever timer is active, stop
    /// the command processor, log out, and clear all cached state.
    pub async fn shutdown(&self) {
        // Take the timer out under the lock, then cancel and await it
        // with the lock released -- the task may itself be waiting to
        // swap the slot.
        let timer = self.inner.timer.lock().await.take();
        if let Some(timer) = timer {
            timer.cancel.cancel();
            let _ = timer.handle.await;
        }

        // Recreate the command channel; dropping the old sender ends the
        // processor task, and a later start() gets a fresh receiver.
        let command_task = {
            let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
            *self.inner.command_tx.lock().await = tx;
            *self.inner.command_rx.lock().await = Some(rx);
            self.inner.command_task.lock().await.take()
        };
        if let Some(handle) = command_task {
            let _ = handle.await;
        }

        if let Some(client) = self.inner.client.lock().await.take() {
            if let Err(e) = client.logout().await {
                debug!(error = %e, "logout failed (non-fatal)");
            }
        }

        *self.inner.ability.lock().await = AbilitySet::empty();
        self.inner.store.clear();
        *self.inner.previous.lock().await = CameraState::default();
        let _ = self.inner.phase.send(SessionPhase::Idle);
        debug!("session shut down");
    }

    /// Apply a new configuration: quiesce any active poll/reconnect
    /// cycle, clear the session, and re-run the full startup sequence
    /// against the new target.
    pub async fn update_config(&self, config: CameraConfig) -> Result<(), CoreError> {
        self.shutdown().await;
        *self.inner.config.lock().await = config;
        self.start().await
    }

    /// One-shot: start, run closure, shut down. Polling is disabled --
    /// single request-response cycles don't need the timer.
    pub async fn oneshot<F, Fut, T>(
        mut config: CameraConfig,
        publisher: Arc<dyn VariablePublisher>,
        f: F,
    ) -> Result<T, CoreError>
    where
        F: FnOnce(CameraSession) -> Fut,
        Fut: std::future::Future<Output = Result<T, CoreError>>,
    {
        config.poll_interval = Duration::ZERO;
        let session = CameraSession::new(config, publisher);
        if let Err(e) = session.start().await {
            // A failed start leaves the reconnect timer running; a
            // one-shot caller wants a clean exit instead.
            session.shutdown().await;
            return Err(e);
        }
        let result = f(session.clone()).await;
        session.shutdown().await;
        result
    }

    // ── Refresh ──────────────────────────────────────────────────

    /// Perform one full capability-gated state fetch, store the new
    /// snapshot, and publish changed variables.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        self.run_refresh(None).await
    }

    async fn run_refresh(&self, guard: Option<&CancellationToken>) -> Result<(), CoreError> {
        let client = self
            .inner
            .client
            .lock()
            .await
            .as_ref()
            .cloned()
            .ok_or(CoreError::NotConnected)?;
        let ability = self.inner.ability.lock().await.clone();
        let previous = self.inner.previous.lock().await.clone();

        let state = fetch_full_state(&client, &ability, &previous).await?;

        // A fetch that completes after teardown must not resurrect state.
        if guard.is_some_and(CancellationToken::is_cancelled) {
            return Ok(());
        }

        let changes = reconcile(&state, &previous);
        self.inner.store.replace(state.clone());
        *self.inner.previous.lock().await = state;
        if !changes.is_empty() {
            self.inner.publisher.publish(changes);
        }
        Ok(())
    }

    // ── Command execution ────────────────────────────────────────

    /// Execute a control command against the camera.
    ///
    /// Routed through the command channel to the processor task; the
    /// result comes back when the camera has answered. Failures do not
    /// tear down polling by themselves -- a broken connection surfaces
    /// through the next poll tick.
    pub async fn execute(&self, command: Command) -> Result<CommandResult, CoreError> {
        if *self.inner.phase.borrow() == SessionPhase::Idle {
            return Err(CoreError::NotConnected);
        }

        let (tx, rx) = oneshot::channel();
        let command_tx = self.inner.command_tx.lock().await.clone();
        command_tx
            .send(CommandEnvelope {
                command,
                response_tx: tx,
            })
            .await
            .map_err(|_| CoreError::NotConnected)?;
        rx.await.map_err(|_| CoreError::NotConnected)?
    }

    async fn spawn_command_processor(&self) {
        let mut task_guard = self.inner.command_task.lock().await;
        if task_guard.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }
        let Some(rx) = self.inner.command_rx.lock().await.take() else {
            return;
        };
        let session = self.clone();
        *task_guard = Some(tokio::spawn(command_processor_task(session, rx)));
    }

    // ── Startup sequence ─────────────────────────────────────────

    /// Build a client and run the bounded startup sequence against it.
    async fn startup(&self, config: &CameraConfig) -> Result<(), CoreError> {
        let client = Arc::new(CameraClient::new(config.endpoint(), &self.inner.transport)?);
        self.run_startup_sequence(client).await
    }

    /// The bounded retry sequence: up to [`STARTUP_ATTEMPTS`] tries of
    /// login (when needed) plus device-info and capability fetch, with
    /// delays doubling from 1 s. On success the client and ability set
    /// are committed and network info is fetched once -- some models
    /// omit that endpoint, so failure there is logged but does not block
    /// startup.
    async fn run_startup_sequence(&self, client: Arc<CameraClient>) -> Result<(), CoreError> {
        let mut delay = STARTUP_BACKOFF_START;
        let mut last_error = CoreError::NotConnected;

        for attempt in 1..=STARTUP_ATTEMPTS {
            match startup_fetch(&client).await {
                Ok((device, ability)) => {
                    *self.inner.client.lock().await = Some(Arc::clone(&client));
                    *self.inner.ability.lock().await = ability;
                    self.inner.store.set_device(device);

                    match client.network_info().await {
                        Ok(network) => self.inner.store.set_network(network),
                        Err(e) => {
                            warn!(error = %e, "network info unavailable during startup");
                        }
                    }

                    self.inner.failure_logged.store(false, Ordering::Relaxed);
                    return Ok(());
                }
                Err(e) => {
                    debug!(attempt, error = %e, "startup attempt failed");
                    last_error = e.into();
                    if attempt < STARTUP_ATTEMPTS {
                        tokio::time::sleep(delay).await;
                        delay = (delay * 2).min(STARTUP_BACKOFF_CAP);
                    }
                }
            }
        }

        Err(last_error)
    }

    // ── Timer slot management ────────────────────────────────────

    /// Swap the poll timer into the slot and mark the session healthy.
    ///
    /// `guard` is the calling task's own cancellation token: when the
    /// session was torn down while this call was in flight, the swap is
    /// abandoned so no timer outlives a shutdown.
    // Returns a boxed future with an explicit `Send` type rather than an
    // `async fn`: the poll/reconnect timers spawn each other through this
    // call, and leaving it as an opaque `async fn` makes rustc unable to
    // resolve the `Send` auto-trait across that cycle. A concrete return
    // type breaks the inference cycle without changing behavior.
    fn enter_polling<'a>(
        &'a self,
        config: &'a CameraConfig,
        guard: Option<&'a CancellationToken>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            {
                let mut slot = self.inner.timer.lock().await;
                if guard.is_some_and(CancellationToken::is_cancelled) {
                    return;
                }
                if let Some(old) = slot.take() {
                    old.cancel.cancel();
                }
                if config.poll_interval > Duration::ZERO {
                    let cancel = CancellationToken::new();
                    let handle = tokio::spawn(poll_task(
                        self.clone(),
                        config.poll_interval,
                        cancel.clone(),
                    ));
                    *slot = Some(TimerTask {
                        kind: TimerKind::Poll,
                        cancel,
                        handle,
                    });
                }
            }
            self.inner.failure_logged.store(false, Ordering::Relaxed);
            let _ = self.inner.phase.send(SessionPhase::Polling);
            let _ = self.inner.status.send(DeviceStatus::Ok);
            info!("camera connected, polling started");
        })
    }

    /// Swap the reconnect timer into the slot. Idempotent: starting the
    /// reconnect cycle while it is already running is a no-op.
    async fn enter_reconnecting(&self, config: &CameraConfig, guard: Option<&CancellationToken>) {
        {
            let mut slot = self.inner.timer.lock().await;
            if guard.is_some_and(CancellationToken::is_cancelled) {
                return;
            }
            if slot.as_ref().is_some_and(|t| t.kind == TimerKind::Reconnect) {
                return;
            }
            if let Some(old) = slot.take() {
                old.cancel.cancel();
            }
            let cancel = CancellationToken::new();
            let handle = tokio::spawn(reconnect_task(
                self.clone(),
                config.reconnect_interval,
                cancel.clone(),
            ));
            *slot = Some(TimerTask {
                kind: TimerKind::Reconnect,
                cancel,
                handle,
            });
        }
        let _ = self.inner.phase.send(SessionPhase::Reconnecting);
    }

    /// React to a failed poll fetch: stop polling, drop the session
    /// token and cached state, and begin reconnecting.
    async fn handle_poll_failure(&self, error: CoreError, cancel: &CancellationToken) {
        self.log_failure_once(&error);
        let _ = self.inner.status.send(DeviceStatus::ConnectionFailure);

        if let Some(client) = self.inner.client.lock().await.as_ref() {
            client.clear_session();
        }
        self.inner.store.clear();
        *self.inner.previous.lock().await = CameraState::default();

        let config = self.inner.config.lock().await.clone();
        self.enter_reconnecting(&config, Some(cancel)).await;
    }

    /// Log a connection failure once per outage episode.
    fn log_failure_once(&self, error: &CoreError) {
        if self.inner.failure_logged.swap(true, Ordering::Relaxed) {
            debug!(error = %error, "camera still unreachable");
        } else {
            error!(error = %error, "camera connection lost");
        }
    }
}

// ── Startup fetch ────────────────────────────────────────────────────

/// One startup attempt: login when the token is absent, then fetch the
/// device identity and capability document.
async fn startup_fetch(
    client: &CameraClient,
) -> Result<(DevInfo, AbilitySet), ptzlink_api::Error> {
    if !client.is_authenticated() {
        client.login().await?;
    }
    let device = client.device_info().await?;
    let ability = client.ability().await?;
    Ok((device, ability))
}

// ── Full state fetch ─────────────────────────────────────────────────

/// Fetch every subsystem the camera reports a capability for, strictly
/// sequentially. Soft camera-status rejections skip that subsystem and
/// carry the previous value forward; transport and auth failures abort
/// the whole fetch.
async fn fetch_full_state(
    client: &CameraClient,
    ability: &AbilitySet,
    previous: &CameraState,
) -> Result<CameraState, CoreError> {
    let mut state = CameraState {
        device: soften(client.device_info().await, previous.device.clone(), "device")?,
        network: soften(
            client.network_info().await,
            previous.network.clone(),
            "network",
        )?,
        ..CameraState::default()
    };

    if ability.has("PanSpeed") {
        state.position = soften(client.ptz_info().await, previous.position.clone(), "position")?;
    }
    if ability.has("FocusMode") {
        state.lens = soften(client.lens_info().await, previous.lens.clone(), "lens")?;
    }
    if ability.has("Brightness") {
        state.picture = soften(
            client.picture_info().await,
            previous.picture.clone(),
            "picture",
        )?;
    }
    if ability.has("Gamma") {
        state.gamma = soften(client.gamma_info().await, previous.gamma.clone(), "gamma")?;
    }
    if ability.has("WhiteBalance") {
        state.white_balance = soften(
            client.awb_info().await,
            previous.white_balance.clone(),
            "white_balance",
        )?;
    }
    if ability.has("ExposureMode") {
        state.exposure = soften(
            client.exposure_info().await,
            previous.exposure.clone(),
            "exposure",
        )?;
    }
    if ability.has("IcrMode") {
        state.day_night = soften(
            client.icr_info().await,
            previous.day_night.clone(),
            "day_night",
        )?;
    }
    if ability.has("NoiseReduction") {
        state.noise_reduction = soften(
            client.nr_info().await,
            previous.noise_reduction.clone(),
            "noise_reduction",
        )?;
    }
    if ability.has("Defog") {
        state.defog = soften(client.defog_info().await, previous.defog.clone(), "defog")?;
    }
    if ability.has("Osd") {
        state.osd = soften(client.osd_info().await, previous.osd.clone(), "osd")?;
    }
    if ability.has("Audio") {
        state.audio = soften(client.audio_info().await, previous.audio.clone(), "audio")?;
    }
    if ability.has("VideoFormat") {
        state.video = soften(client.video_info().await, previous.video.clone(), "video")?;
    }
    if ability.has("Standby") {
        state.power = soften(client.power_info().await, previous.power.clone(), "power")?;
    }
    if ability.has("PresetNumber") {
        state.presets = soften(
            client.preset_list().await,
            previous.presets.clone(),
            "presets",
        )?;
    }
    if ability.has("CruiseNumber") {
        state.cruises = soften(
            client.cruise_list().await,
            previous.cruises.clone(),
            "cruises",
        )?;
    }

    Ok(state)
}

/// Downgrade a soft camera rejection to "keep the previous value";
/// everything else propagates and aborts the fetch.
fn soften<T>(
    result: Result<T, ptzlink_api::Error>,
    fallback: Option<T>,
    subsystem: &str,
) -> Result<Option<T>, CoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_soft() => {
            warn!(subsystem, error = %e, "state fetch skipped");
            Ok(fallback)
        }
        Err(e) => Err(e.into()),
    }
}

// ── Background tasks ─────────────────────────────────────────────────

/// Steady-state poll loop. One fetch per tick, never overlapping: a
/// fetch that outlives its tick delays the next tick instead of running
/// concurrently with itself. The first failure stops this timer and
/// hands the slot to the reconnect timer.
async fn poll_task(session: CameraSession, period: Duration, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                match session.run_refresh(Some(&cancel)).await {
                    Ok(()) => {}
                    Err(e) => {
                        if !cancel.is_cancelled() {
                            session.handle_poll_failure(e, &cancel).await;
                        }
                        break;
                    }
                }
            }
        }
    }
}

/// Reconnect loop. Each tick attempts a full login; once login succeeds
/// the startup sequence is replayed (including the retried capability
/// fetch) and, on success, polling resumes.
async fn reconnect_task(session: CameraSession, period: Duration, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.tick().await; // first attempt after one full period

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                let config = session.inner.config.lock().await.clone();
                let client = match CameraClient::new(config.endpoint(), &session.inner.transport) {
                    Ok(client) => Arc::new(client),
                    Err(e) => {
                        session.log_failure_once(&e.into());
                        continue;
                    }
                };

                if let Err(e) = client.login().await {
                    if cancel.is_cancelled() {
                        break;
                    }
                    session.log_failure_once(&e.into());
                    continue;
                }

                match session.run_startup_sequence(Arc::clone(&client)).await {
                    Ok(()) => {
                        if cancel.is_cancelled() {
                            break;
                        }
                        session.enter_polling(&config, Some(&cancel)).await;
                        break;
                    }
                    Err(e) => {
                        if cancel.is_cancelled() {
                            break;
                        }
                        session.log_failure_once(&e);
                    }
                }
            }
        }
    }
}

/// Process commands from the mpsc channel, routing each to the
/// appropriate camera request.
async fn command_processor_task(session: CameraSession, mut rx: mpsc::Receiver<CommandEnvelope>) {
    while let Some(envelope) = rx.recv().await {
        let result = route_command(&session, envelope.command).await;
        let _ = envelope.response_tx.send(result);
    }
}

// ── Command routing ──────────────────────────────────────────────────

async fn route_command(
    session: &CameraSession,
    command: Command,
) -> Result<CommandResult, CoreError> {
    let client = session
        .inner
        .client
        .lock()
        .await
        .as_ref()
        .cloned()
        .ok_or(CoreError::NotConnected)?;

    match command {
        Command::PtzMove {
            direction,
            pan_speed,
            tilt_speed,
        } => client.ptz_move(direction, pan_speed, tilt_speed).await?,
        Command::PtzStop => client.ptz_move(PanTiltMove::Stop, 0, 0).await?,
        Command::PtzHome => client.ptz_move(PanTiltMove::Home, 0, 0).await?,

        Command::Zoom { direction, speed } => client.zoom(direction, speed).await?,
        Command::Focus { direction, speed } => client.focus(direction, speed).await?,
        Command::SetFocusMode { mode } => client.set_focus_mode(mode).await?,

        Command::CallPreset { number } => client.preset_ctrl(PresetAction::Call, number).await?,
        Command::SavePreset { number } => client.preset_ctrl(PresetAction::Set, number).await?,
        Command::DeletePreset { number } => client.preset_ctrl(PresetAction::Del, number).await?,
        Command::StartCruise { number } => client.cruise_ctrl(CruiseAction::Start, number).await?,
        Command::StopCruise { number } => client.cruise_ctrl(CruiseAction::Stop, number).await?,

        Command::SetFlip { enable } => client.set_flip(enable).await?,
        Command::SetMirror { enable } => client.set_mirror(enable).await?,

        Command::SetStandby { enable } => client.set_standby(enable).await?,
        Command::Reboot => client.reboot().await?,
    }

    Ok(CommandResult::Ok)
}
