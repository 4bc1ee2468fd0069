//! `ptzlink info` -- one-shot full state snapshot.

use std::sync::Arc;

use owo_colors::OwoColorize;

use ptzlink_core::diff::reconcile;
use ptzlink_core::{CameraConfig, CameraSession, CameraState, NoopPublisher};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

pub async fn run(camera: CameraConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = CameraSession::oneshot(camera, Arc::new(NoopPublisher), |session| async move {
        session.refresh().await?;
        Ok(session.store().snapshot())
    })
    .await?;

    // Flatten through the diff engine: same stable names the watch
    // stream publishes, so output is greppable either way.
    let flat = reconcile(&snapshot, &CameraState::default());

    match global.output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&flat)
                    .unwrap_or_else(|_| "{}".to_owned())
            );
        }
        OutputFormat::Text => {
            for (name, value) in &flat {
                println!("{} = {value}", name.dimmed());
            }
        }
    }
    Ok(())
}
