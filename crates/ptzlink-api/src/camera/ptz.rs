// PTZ endpoint: position state, motion control, presets, cruises.

use serde_json::json;

use crate::camera::PTZ_ENDPOINT;
use crate::camera::models::{
    CruiseAction, CruiseInfo, FocusMode, FocusMove, LensInfo, PanTiltMove, PresetAction,
    PresetInfo, PtzInfo, ZoomMove,
};
use crate::client::CameraClient;
use crate::error::Error;

impl CameraClient {
    /// Fetch the current head position (`ReqGetPtzInfo`).
    pub async fn ptz_info(&self) -> Result<PtzInfo, Error> {
        let resp = self.request(PTZ_ENDPOINT, "ReqGetPtzInfo", None).await?;
        resp.require_ok()?.content_field("PtzInfo")
    }

    /// Fetch lens state (`ReqGetLensInfo`).
    pub async fn lens_info(&self) -> Result<LensInfo, Error> {
        let resp = self.request(PTZ_ENDPOINT, "ReqGetLensInfo", None).await?;
        resp.require_ok()?.content_field("LensInfo")
    }

    /// Start or stop a pan/tilt motion (`ReqCtrlPtz`).
    ///
    /// Speeds are the camera's native 1..=24 scale; `Stop` and `Home`
    /// ignore them.
    pub async fn ptz_move(
        &self,
        operation: PanTiltMove,
        pan_speed: u8,
        tilt_speed: u8,
    ) -> Result<(), Error> {
        let content = json!({
            "PtzCtrl": {
                "Operation": operation.to_string(),
                "PanSpeed": pan_speed,
                "TiltSpeed": tilt_speed,
            }
        });
        self.request(PTZ_ENDPOINT, "ReqCtrlPtz", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }

    /// Drive the zoom motor (`ReqCtrlZoom`).
    pub async fn zoom(&self, operation: ZoomMove, speed: u8) -> Result<(), Error> {
        let content = json!({
            "ZoomCtrl": { "Operation": operation.to_string(), "Speed": speed }
        });
        self.request(PTZ_ENDPOINT, "ReqCtrlZoom", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }

    /// Drive the focus motor (`ReqCtrlFocus`). Only meaningful in manual
    /// focus mode; the camera answers a soft non-zero status otherwise.
    pub async fn focus(&self, operation: FocusMove, speed: u8) -> Result<(), Error> {
        let content = json!({
            "FocusCtrl": { "Operation": operation.to_string(), "Speed": speed }
        });
        self.request(PTZ_ENDPOINT, "ReqCtrlFocus", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }

    /// Switch between auto and manual focus (`ReqSetLensInfo`).
    pub async fn set_focus_mode(&self, mode: FocusMode) -> Result<(), Error> {
        let content = json!({ "LensInfo": { "FocusMode": mode.to_string() } });
        self.request(PTZ_ENDPOINT, "ReqSetLensInfo", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }

    /// Fetch the preset catalog (`ReqGetPresetInfo`).
    pub async fn preset_list(&self) -> Result<Vec<PresetInfo>, Error> {
        let resp = self.request(PTZ_ENDPOINT, "ReqGetPresetInfo", None).await?;
        resp.require_ok()?.content_field("PresetInfo")
    }

    /// Call, store, or delete a preset slot (`ReqCtrlPreset`).
    pub async fn preset_ctrl(&self, action: PresetAction, number: i64) -> Result<(), Error> {
        let content = json!({
            "PresetCtrl": { "Operation": action.to_string(), "Number": number }
        });
        self.request(PTZ_ENDPOINT, "ReqCtrlPreset", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }

    /// Fetch the cruise catalog (`ReqGetCruiseInfo`).
    pub async fn cruise_list(&self) -> Result<Vec<CruiseInfo>, Error> {
        let resp = self.request(PTZ_ENDPOINT, "ReqGetCruiseInfo", None).await?;
        resp.require_ok()?.content_field("CruiseInfo")
    }

    /// Start or stop a cruise track (`ReqCtrlCruise`).
    pub async fn cruise_ctrl(&self, action: CruiseAction, number: i64) -> Result<(), Error> {
        let content = json!({
            "CruiseCtrl": { "Operation": action.to_string(), "Number": number }
        });
        self.request(PTZ_ENDPOINT, "ReqCtrlCruise", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }
}
