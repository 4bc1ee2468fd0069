//! Clap derive structures for the `ptzlink` CLI.
//!
//! Defines the command tree, global flags, and shared argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ptzlink_api::camera::models::{PanTiltMove, ZoomMove};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ptzlink -- bridge a control surface to a network PTZ camera
#[derive(Debug, Parser)]
#[command(
    name = "ptzlink",
    version,
    about = "Control and monitor network PTZ cameras from the command line",
    long_about = "Bridges a button/feedback control surface to a PTZ camera's \
        HTTP/JSON API: polls camera state into named variables and routes \
        typed commands back to the camera.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Camera hostname or IP address (overrides profile)
    #[arg(long, short = 'H', env = "PTZLINK_HOST", global = true)]
    pub host: Option<String>,

    /// Camera HTTP port
    #[arg(long, env = "PTZLINK_PORT", global = true)]
    pub port: Option<u16>,

    /// Camera username
    #[arg(long, short = 'u', env = "PTZLINK_USERNAME", global = true)]
    pub username: Option<String>,

    /// Camera password
    #[arg(long, env = "PTZLINK_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Profile name from the config file
    #[arg(long, short = 'p', env = "PTZLINK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Path to the config file (default: ./ptzlink.toml)
    #[arg(long, env = "PTZLINK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One `name = value` line per variable
    Text,
    /// Pretty-printed JSON
    Json,
}

// ── Subcommands ──────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Connect and stream status plus variable changes until interrupted
    Watch,
    /// Fetch one full state snapshot and print it
    Info,
    /// Drive the pan/tilt head and zoom
    Ptz {
        #[command(subcommand)]
        action: PtzAction,
    },
    /// Recall, store, or delete preset slots
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
    /// Manage the profile config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write a starter config file with a default profile
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path and its profiles
    Show,
}

#[derive(Debug, Subcommand)]
pub enum PtzAction {
    /// Start moving in a direction
    Move {
        direction: Direction,
        /// Pan speed (camera-native 1..=24 scale)
        #[arg(long, default_value = "12")]
        pan_speed: u8,
        /// Tilt speed (camera-native 1..=24 scale)
        #[arg(long, default_value = "12")]
        tilt_speed: u8,
    },
    /// Stop all motion
    Stop,
    /// Return to the home position
    Home,
    /// Drive the zoom motor
    Zoom {
        direction: ZoomDirection,
        #[arg(long, default_value = "6")]
        speed: u8,
    },
}

#[derive(Debug, Subcommand)]
pub enum PresetAction {
    /// Recall a stored preset
    Call { number: i64 },
    /// Store the current position into a slot
    Save { number: i64 },
    /// Delete a slot
    Delete { number: i64 },
}

// ── Argument enums ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl From<Direction> for PanTiltMove {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
            Direction::UpLeft => Self::UpLeft,
            Direction::UpRight => Self::UpRight,
            Direction::DownLeft => Self::DownLeft,
            Direction::DownRight => Self::DownRight,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ZoomDirection {
    /// Zoom in (telephoto)
    In,
    /// Zoom out (wide)
    Out,
}

impl From<ZoomDirection> for ZoomMove {
    fn from(direction: ZoomDirection) -> Self {
        match direction {
            ZoomDirection::In => Self::Tele,
            ZoomDirection::Out => Self::Wide,
        }
    }
}
