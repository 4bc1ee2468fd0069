// ── Camera state aggregate and store ──
//
// One record holding the last-known snapshot of every camera subsystem.
// Each sub-record is independently optional: `None` means "not yet
// fetched" or "not supported by this model". The whole aggregate is
// replaced on every successful poll cycle and cleared on auth loss.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use ptzlink_api::camera::models::{
    AudioInfo, AwbInfo, CruiseInfo, DefogInfo, DevInfo, ExposureInfo, GammaInfo, IcrInfo,
    LensInfo, NetworkInfo, NrInfo, OsdInfo, PictureInfo, PowerInfo, PresetInfo, PtzInfo,
    VideoInfo,
};

/// Aggregate snapshot of every camera subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CameraState {
    pub device: Option<DevInfo>,
    pub network: Option<NetworkInfo>,
    pub position: Option<PtzInfo>,
    pub lens: Option<LensInfo>,
    pub picture: Option<PictureInfo>,
    pub gamma: Option<GammaInfo>,
    pub white_balance: Option<AwbInfo>,
    pub exposure: Option<ExposureInfo>,
    pub day_night: Option<IcrInfo>,
    pub noise_reduction: Option<NrInfo>,
    pub defog: Option<DefogInfo>,
    pub osd: Option<OsdInfo>,
    pub audio: Option<AudioInfo>,
    pub video: Option<VideoInfo>,
    pub power: Option<PowerInfo>,
    pub presets: Option<Vec<PresetInfo>>,
    pub cruises: Option<Vec<CruiseInfo>>,
}

impl CameraState {
    /// Whether no subsystem has been populated yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Holds the current [`CameraState`] behind a `watch` channel.
///
/// Mutated only by the owning session's call chain -- consumers read
/// snapshots or subscribe for change notification.
pub struct StateStore {
    snapshot: watch::Sender<Arc<CameraState>>,
}

impl StateStore {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(CameraState::default()));
        Self { snapshot }
    }

    /// The current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<CameraState> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<CameraState>> {
        self.snapshot.subscribe()
    }

    /// Replace the whole aggregate (one poll cycle's result).
    pub(crate) fn replace(&self, state: CameraState) {
        let _ = self.snapshot.send(Arc::new(state));
    }

    /// Merge the startup-time device identity into the snapshot.
    pub(crate) fn set_device(&self, device: DevInfo) {
        self.snapshot.send_modify(|s| {
            let mut next = (**s).clone();
            next.device = Some(device);
            *s = Arc::new(next);
        });
    }

    /// Merge the startup-time network info into the snapshot.
    pub(crate) fn set_network(&self, network: NetworkInfo) {
        self.snapshot.send_modify(|s| {
            let mut next = (**s).clone();
            next.network = Some(network);
            *s = Arc::new(next);
        });
    }

    /// Drop everything (auth loss, shutdown).
    pub(crate) fn clear(&self) {
        let _ = self.snapshot.send(Arc::new(CameraState::default()));
    }

    // ── Per-subsystem accessors ──────────────────────────────────
    //
    // All return `None` until the subsystem is first populated.

    pub fn current_device_info(&self) -> Option<DevInfo> {
        self.snapshot.borrow().device.clone()
    }

    pub fn current_network_info(&self) -> Option<NetworkInfo> {
        self.snapshot.borrow().network.clone()
    }

    pub fn current_position(&self) -> Option<PtzInfo> {
        self.snapshot.borrow().position.clone()
    }

    pub fn current_lens_info(&self) -> Option<LensInfo> {
        self.snapshot.borrow().lens.clone()
    }

    pub fn current_picture_info(&self) -> Option<PictureInfo> {
        self.snapshot.borrow().picture.clone()
    }

    pub fn current_gamma_info(&self) -> Option<GammaInfo> {
        self.snapshot.borrow().gamma.clone()
    }

    pub fn current_white_balance(&self) -> Option<AwbInfo> {
        self.snapshot.borrow().white_balance.clone()
    }

    pub fn current_exposure_info(&self) -> Option<ExposureInfo> {
        self.snapshot.borrow().exposure.clone()
    }

    pub fn current_day_night(&self) -> Option<IcrInfo> {
        self.snapshot.borrow().day_night.clone()
    }

    pub fn current_noise_reduction(&self) -> Option<NrInfo> {
        self.snapshot.borrow().noise_reduction.clone()
    }

    pub fn current_defog(&self) -> Option<DefogInfo> {
        self.snapshot.borrow().defog.clone()
    }

    pub fn current_osd_info(&self) -> Option<OsdInfo> {
        self.snapshot.borrow().osd.clone()
    }

    pub fn current_audio_info(&self) -> Option<AudioInfo> {
        self.snapshot.borrow().audio.clone()
    }

    pub fn current_video_info(&self) -> Option<VideoInfo> {
        self.snapshot.borrow().video.clone()
    }

    pub fn current_power_info(&self) -> Option<PowerInfo> {
        self.snapshot.borrow().power.clone()
    }

    pub fn current_presets(&self) -> Option<Vec<PresetInfo>> {
        self.snapshot.borrow().presets.clone()
    }

    pub fn current_cruises(&self) -> Option<Vec<CruiseInfo>> {
        self.snapshot.borrow().cruises.clone()
    }
}
