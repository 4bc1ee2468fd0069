// Imaging endpoint: picture, gamma, white balance, exposure, day/night,
// noise reduction, defog.

use serde_json::json;

use crate::camera::IMAGE_ENDPOINT;
use crate::camera::models::{
    AwbInfo, DefogInfo, ExposureInfo, GammaInfo, IcrInfo, NrInfo, PictureInfo,
};
use crate::client::CameraClient;
use crate::error::Error;

impl CameraClient {
    pub async fn picture_info(&self) -> Result<PictureInfo, Error> {
        let resp = self.request(IMAGE_ENDPOINT, "ReqGetPictureInfo", None).await?;
        resp.require_ok()?.content_field("PictureInfo")
    }

    /// Set vertical flip (`ReqSetPictureInfo` with a partial payload --
    /// the camera merges unspecified fields).
    pub async fn set_flip(&self, enable: bool) -> Result<(), Error> {
        let content = json!({ "PictureInfo": { "Flip": enable } });
        self.request(IMAGE_ENDPOINT, "ReqSetPictureInfo", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }

    /// Set horizontal mirror (`ReqSetPictureInfo`).
    pub async fn set_mirror(&self, enable: bool) -> Result<(), Error> {
        let content = json!({ "PictureInfo": { "Mirror": enable } });
        self.request(IMAGE_ENDPOINT, "ReqSetPictureInfo", Some(content))
            .await?
            .require_ok()?;
        Ok(())
    }

    pub async fn gamma_info(&self) -> Result<GammaInfo, Error> {
        let resp = self.request(IMAGE_ENDPOINT, "ReqGetGammaInfo", None).await?;
        resp.require_ok()?.content_field("GammaInfo")
    }

    pub async fn awb_info(&self) -> Result<AwbInfo, Error> {
        let resp = self.request(IMAGE_ENDPOINT, "ReqGetAwbInfo", None).await?;
        resp.require_ok()?.content_field("AwbInfo")
    }

    pub async fn exposure_info(&self) -> Result<ExposureInfo, Error> {
        let resp = self.request(IMAGE_ENDPOINT, "ReqGetExposureInfo", None).await?;
        resp.require_ok()?.content_field("ExposureInfo")
    }

    pub async fn icr_info(&self) -> Result<IcrInfo, Error> {
        let resp = self.request(IMAGE_ENDPOINT, "ReqGetIcrInfo", None).await?;
        resp.require_ok()?.content_field("IcrInfo")
    }

    pub async fn nr_info(&self) -> Result<NrInfo, Error> {
        let resp = self.request(IMAGE_ENDPOINT, "ReqGetNrInfo", None).await?;
        resp.require_ok()?.content_field("NrInfo")
    }

    pub async fn defog_info(&self) -> Result<DefogInfo, Error> {
        let resp = self.request(IMAGE_ENDPOINT, "ReqGetDefogInfo", None).await?;
        resp.require_ok()?.content_field("DefogInfo")
    }
}
