// Device endpoint: network, OSD, audio, video format, power.

use serde_json::json;

use crate::camera::DEVICE_ENDPOINT;
use crate::camera::models::{AudioInfo, NetworkInfo, OsdInfo, PowerInfo, VideoInfo};
use crate::client::CameraClient;
use crate::error::Error;

impl CameraClient {
    pub async fn network_info(&self) -> Result<NetworkInfo, Error> {
        let resp = self.request(DEVICE_ENDPOINT, "ReqGetNetworkInfo", None).await?;
        resp.require_ok()?.content_field("NetworkInfo")
    }

    pub async fn osd_info(&self) -> Result<OsdInfo, Error> {
        let resp = self.request(DEVICE_ENDPOINT, "ReqGetOsdInfo", None).await?;
        resp.require_ok()?.content_field("OsdInfo")
    }

    pub async fn audio_info(&self) -> Result<AudioInfo, Error> {
        let resp = self.request(DEVICE_ENDPOINT, "ReqGetAudioInfo", None).await?;
        resp.require_ok()?.content_field("AudioInfo")
    }

    pub async fn video_info(&self) -> Result<VideoInfo, Error> {
        let resp = self.request(DEVICE_ENDPOINT, "ReqGetVideoInfo", None).await?;
        resp.require_ok()?.content_field("VideoInfo")
    }

    pub async fn power_info(&self) -> Result<PowerInfo, Error> {
        let resp = self.request(DEVICE_ENDPOINT, "ReqGetPowerInfo", None).await?;
        resp.require_ok()?.content_field("PowerInfo")
    }

    /// Enter or leave standby (`ReqSetPowerInfo`).
    pub async fn set_standby(&self, enable: bool) -> Result<(), Error> {
        let content = json!({ "PowerInfo": { "Standby": enable } });
        self.request(DEVICE_ENDPOINT, "ReqSetPowerInfo", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }
}
