pub mod config_cmd;
pub mod info;
pub mod preset;
pub mod ptz;
pub mod watch;
