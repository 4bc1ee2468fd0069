//! `ptzlink ptz` -- one-shot head and zoom control.

use std::sync::Arc;

use ptzlink_core::{CameraConfig, CameraSession, Command, NoopPublisher};

use crate::cli::PtzAction;
use crate::error::CliError;

pub async fn run(camera: CameraConfig, action: PtzAction) -> Result<(), CliError> {
    let command = match action {
        PtzAction::Move {
            direction,
            pan_speed,
            tilt_speed,
        } => Command::PtzMove {
            direction: direction.into(),
            pan_speed,
            tilt_speed,
        },
        PtzAction::Stop => Command::PtzStop,
        PtzAction::Home => Command::PtzHome,
        PtzAction::Zoom { direction, speed } => Command::Zoom {
            direction: direction.into(),
            speed,
        },
    };

    CameraSession::oneshot(camera, Arc::new(NoopPublisher), |session| async move {
        session.execute(command).await.map(|_| ())
    })
    .await?;
    Ok(())
}
