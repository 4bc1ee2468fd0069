//! `ptzlink watch` -- stream status transitions and variable deltas.

use std::sync::Arc;

use owo_colors::OwoColorize;

use ptzlink_core::{CameraConfig, CameraSession, ChannelPublisher, DeviceStatus};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub async fn run(camera: CameraConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let (publisher, mut deltas) = ChannelPublisher::new();
    let session = CameraSession::new(camera, Arc::new(publisher));
    let mut status_rx = session.status();

    // Start in the background: a camera that is down keeps the watch
    // alive in the reconnecting phase instead of exiting.
    let starter = {
        let session = session.clone();
        tokio::spawn(async move {
            let _ = session.start().await;
        })
    };

    // Bad config never recovers on its own; bail out immediately.
    let quiet = global.quiet;
    let result = loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break Ok(()),
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                let status = *status_rx.borrow_and_update();
                if !quiet {
                    print_status(status);
                }
                if status == DeviceStatus::BadConfig {
                    break Err(CliError::Core(ptzlink_core::CoreError::BadConfig {
                        message: "host, port, username, and password are required".into(),
                    }));
                }
            }
            delta = deltas.recv() => {
                let Some(changes) = delta else { break Ok(()) };
                for (name, value) in &changes {
                    println!("{} = {value}", name.dimmed());
                }
            }
        }
    };

    starter.abort();
    let _ = starter.await;
    session.shutdown().await;
    result
}

fn print_status(status: DeviceStatus) {
    match status {
        DeviceStatus::Ok => eprintln!("{}", "● connected".green().bold()),
        DeviceStatus::ConnectionFailure => {
            eprintln!("{}", "● connection lost, retrying".red().bold());
        }
        DeviceStatus::BadConfig => eprintln!("{}", "● bad configuration".yellow().bold()),
        DeviceStatus::Unknown => {}
    }
}
