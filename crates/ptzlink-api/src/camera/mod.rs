// Camera subsystem client modules
//
// Hand-written wrappers for the camera's `Req{Get,Set,Ctrl}*` commands,
// grouped by endpoint. Every call goes through `CameraClient::request`
// and shares the `{Cmd, Version, Content:{Status, ...}}` envelope.

pub mod device;
pub mod image;
pub mod models;
pub mod ptz;
pub mod system;

/// System endpoint: device identity, capability document, reboot.
pub const SYSTEM_ENDPOINT: &str = "/apiv2/system";
/// Pan/tilt/zoom endpoint: position state, motion control, presets, cruises.
pub const PTZ_ENDPOINT: &str = "/apiv2/ptz";
/// Imaging endpoint: picture, gamma, white balance, exposure, day/night.
pub const IMAGE_ENDPOINT: &str = "/apiv2/image";
/// Device endpoint: network, OSD, audio, video format, power.
pub const DEVICE_ENDPOINT: &str = "/apiv2/device";
