use thiserror::Error;

use ptzlink_core::CoreError;

/// CLI-level errors: everything the binary can print and exit on.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("Timed out waiting for camera state")]
    StateTimeout,
}
