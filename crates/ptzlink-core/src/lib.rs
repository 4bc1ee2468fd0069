//! Session lifecycle, polling, and state reconciliation between
//! `ptzlink-api` and presentation-layer consumers (CLI / control surfaces).
//!
//! This crate owns the business logic of the camera bridge:
//!
//! - **[`CameraSession`]** — Central facade managing the full lifecycle:
//!   [`start()`](CameraSession::start) validates configuration,
//!   authenticates, runs the bounded startup fetch sequence, then drives a
//!   1 s polling loop. Connectivity failures swap the poll timer for a 5 s
//!   reconnection timer until the camera answers again; the two timers
//!   share a single slot and can never coexist.
//!
//! - **[`StateStore`]** — Holds the last-known snapshot of every camera
//!   subsystem as one aggregate record behind a `watch` channel, with
//!   per-subsystem read accessors that return `None` until first populated.
//!
//! - **Diff engine** ([`diff::reconcile`]) — Pure comparison of two state
//!   snapshots producing the minimal set of changed observable variables,
//!   published through a [`VariablePublisher`] sink.
//!
//! - **[`Command`]** — Typed control requests (PTZ motion, presets,
//!   picture toggles, power) routed through an mpsc channel to the
//!   session's command processor.

pub mod command;
pub mod config;
pub mod diff;
pub mod error;
pub mod publish;
pub mod session;
pub mod state;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{Command, CommandResult};
pub use config::CameraConfig;
pub use error::CoreError;
pub use publish::{ChannelPublisher, NoopPublisher, VariableChanges, VariablePublisher, VariableValue};
pub use session::{CameraSession, DeviceStatus, SessionPhase, TimerKind};
pub use state::{CameraState, StateStore};
