// ── Command API ──
//
// All control-surface writes flow through a unified `Command` enum. The
// session routes each variant to the appropriate authenticated camera
// request; failures surface to the caller without tearing down polling.

use ptzlink_api::camera::models::{FocusMode, FocusMove, PanTiltMove, ZoomMove};

use crate::error::CoreError;

/// A command envelope sent through the command channel.
/// Contains the command and a oneshot response channel.
pub(crate) struct CommandEnvelope {
    pub command: Command,
    pub response_tx: tokio::sync::oneshot::Sender<Result<CommandResult, CoreError>>,
}

/// All control operations against a camera.
#[derive(Debug, Clone)]
pub enum Command {
    // ── Head motion ──────────────────────────────────────────────────
    PtzMove {
        direction: PanTiltMove,
        pan_speed: u8,
        tilt_speed: u8,
    },
    PtzStop,
    PtzHome,

    // ── Lens ─────────────────────────────────────────────────────────
    Zoom {
        direction: ZoomMove,
        speed: u8,
    },
    Focus {
        direction: FocusMove,
        speed: u8,
    },
    SetFocusMode {
        mode: FocusMode,
    },

    // ── Presets & cruises ────────────────────────────────────────────
    CallPreset {
        number: i64,
    },
    SavePreset {
        number: i64,
    },
    DeletePreset {
        number: i64,
    },
    StartCruise {
        number: i64,
    },
    StopCruise {
        number: i64,
    },

    // ── Picture ──────────────────────────────────────────────────────
    SetFlip {
        enable: bool,
    },
    SetMirror {
        enable: bool,
    },

    // ── Power ────────────────────────────────────────────────────────
    SetStandby {
        enable: bool,
    },
    Reboot,
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Ok,
}
