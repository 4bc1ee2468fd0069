//! `ptzlink preset` -- one-shot preset slot operations.

use std::sync::Arc;

use ptzlink_core::{CameraConfig, CameraSession, Command, NoopPublisher};

use crate::cli::PresetAction;
use crate::error::CliError;

pub async fn run(camera: CameraConfig, action: PresetAction) -> Result<(), CliError> {
    let command = match action {
        PresetAction::Call { number } => Command::CallPreset { number },
        PresetAction::Save { number } => Command::SavePreset { number },
        PresetAction::Delete { number } => Command::DeletePreset { number },
    };

    CameraSession::oneshot(camera, Arc::new(NoopPublisher), |session| async move {
        session.execute(command).await.map(|_| ())
    })
    .await?;
    Ok(())
}
