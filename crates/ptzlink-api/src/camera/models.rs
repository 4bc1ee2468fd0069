// Camera wire models
//
// Response payload types for the camera's JSON API. Fields use
// `#[serde(default)]` liberally because firmware revisions are
// inconsistent about field presence; every type derives `PartialEq`
// because the state-reconciliation engine compares snapshots by value.

use serde::{Deserialize, Serialize};

// ── System ───────────────────────────────────────────────────────────

/// Device identity from `ReqGetDevInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DevInfo {
    #[serde(default)]
    pub dev_name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub soft_version: String,
    #[serde(default)]
    pub hard_version: String,
}

/// Network configuration from `ReqGetNetworkInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkInfo {
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub dhcp: bool,
}

// ── Position & lens ──────────────────────────────────────────────────

/// Head position from `ReqGetPtzInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PtzInfo {
    #[serde(default)]
    pub pan_position: i64,
    #[serde(default)]
    pub tilt_position: i64,
    #[serde(default)]
    pub zoom_position: i64,
}

/// Lens state from `ReqGetLensInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LensInfo {
    #[serde(default)]
    pub focus_position: i64,
    #[serde(default)]
    pub focus_mode: String,
    #[serde(default)]
    pub digital_zoom: bool,
}

// ── Imaging ──────────────────────────────────────────────────────────

/// Picture adjustments from `ReqGetPictureInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PictureInfo {
    #[serde(default)]
    pub flip: bool,
    #[serde(default)]
    pub mirror: bool,
    #[serde(default)]
    pub brightness: i64,
    #[serde(default)]
    pub contrast: i64,
    #[serde(default)]
    pub saturation: i64,
    #[serde(default)]
    pub sharpness: i64,
    #[serde(default)]
    pub hue: i64,
}

/// Gamma curve from `ReqGetGammaInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GammaInfo {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub level: i64,
}

/// White balance from `ReqGetAwbInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwbInfo {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub red_gain: i64,
    #[serde(default)]
    pub blue_gain: i64,
    #[serde(default)]
    pub color_temperature: i64,
}

/// Exposure from `ReqGetExposureInfo`. `iris` is the numeric wire value;
/// the capability document maps it to an f-stop label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExposureInfo {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub shutter: i64,
    #[serde(default)]
    pub iris: i64,
    #[serde(default)]
    pub gain: i64,
    #[serde(default)]
    pub compensation: i64,
    #[serde(default)]
    pub backlight: bool,
}

/// Day/night (IR cut filter) from `ReqGetIcrInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IcrInfo {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub sensitivity: i64,
}

/// Noise reduction from `ReqGetNrInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NrInfo {
    #[serde(default)]
    pub nr_2d: i64,
    #[serde(default)]
    pub nr_3d: i64,
}

/// Defog from `ReqGetDefogInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefogInfo {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub level: i64,
}

// ── Device ───────────────────────────────────────────────────────────

/// On-screen display from `ReqGetOsdInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OsdInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_enable: bool,
    #[serde(default)]
    pub time_enable: bool,
}

/// Audio from `ReqGetAudioInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AudioInfo {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub volume: i64,
    #[serde(default)]
    pub encoding: String,
}

/// Video output format from `ReqGetVideoInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoInfo {
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub codec: String,
    #[serde(default)]
    pub bitrate: i64,
}

/// Power state from `ReqGetPowerInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PowerInfo {
    #[serde(default)]
    pub standby: bool,
}

// ── Presets & cruises ────────────────────────────────────────────────

/// One preset slot from `ReqGetPresetInfo`. `fixed_name` marks slots
/// whose label is firmware-reserved and cannot be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PresetInfo {
    #[serde(default)]
    pub name: String,
    pub number: i64,
    #[serde(default)]
    pub fixed_name: bool,
}

/// One cruise (patrol) track from `ReqGetCruiseInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CruiseInfo {
    #[serde(default)]
    pub name: String,
    pub number: i64,
    #[serde(default)]
    pub running: bool,
}

// ── Control operations ───────────────────────────────────────────────

/// Pan/tilt operations for `ReqCtrlPtz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PanTiltMove {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Home,
    Stop,
}

/// Zoom operations for `ReqCtrlZoom` (tele = in, wide = out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ZoomMove {
    Tele,
    Wide,
    Stop,
}

/// Focus operations for `ReqCtrlFocus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FocusMove {
    Near,
    Far,
    Stop,
}

/// Focus mode for `ReqSetLensInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FocusMode {
    Auto,
    Manual,
}

/// Preset slot operations for `ReqCtrlPreset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PresetAction {
    Call,
    Set,
    Del,
}

/// Cruise operations for `ReqCtrlCruise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CruiseAction {
    Start,
    Stop,
}
