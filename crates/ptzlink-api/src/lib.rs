// ptzlink-api: Async Rust client for network PTZ camera HTTP/JSON control APIs

pub mod camera;
pub mod capability;
pub mod client;
pub mod error;
pub mod sign;
pub mod transport;

pub use capability::{AbilitySet, CapabilityNode};
pub use client::{ApiResponse, CameraClient, CameraEndpoint};
pub use error::Error;
