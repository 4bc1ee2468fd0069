// System endpoint: device identity, capability document, reboot.

use crate::camera::SYSTEM_ENDPOINT;
use crate::camera::models::DevInfo;
use crate::capability::AbilitySet;
use crate::client::CameraClient;
use crate::error::Error;

impl CameraClient {
    /// Fetch device identity (`ReqGetDevInfo`).
    pub async fn device_info(&self) -> Result<DevInfo, Error> {
        let resp = self.request(SYSTEM_ENDPOINT, "ReqGetDevInfo", None).await?;
        resp.require_ok()?.content_field("DevInfo")
    }

    /// Fetch and convert the capability document (`ReqGetAbility`).
    ///
    /// The document describes which optional subsystems and controls the
    /// connected model exposes; it is fetched once per session.
    pub async fn ability(&self) -> Result<AbilitySet, Error> {
        let resp = self.request(SYSTEM_ENDPOINT, "ReqGetAbility", None).await?;
        let resp = resp.require_ok()?;
        let doc = resp
            .content()
            .get("Ability")
            .ok_or_else(|| Error::Deserialization {
                message: "ReqGetAbility response missing Content.Ability".into(),
                body: resp.content().to_string(),
            })?;
        Ok(AbilitySet::from_value(doc))
    }

    /// Reboot the camera (`ReqReboot`). The session token becomes invalid
    /// once the camera restarts; callers should expect a reconnect cycle.
    pub async fn reboot(&self) -> Result<(), Error> {
        self.request(SYSTEM_ENDPOINT, "ReqReboot", None)
            .await?
            .require_ok()?;
        Ok(())
    }
}
