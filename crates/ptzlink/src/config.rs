//! CLI configuration resolution.
//!
//! Connection parameters come from three layers, highest priority first:
//! CLI flags (with `PTZLINK_*` env fallbacks, handled by clap), the
//! selected profile in the TOML config file, and built-in defaults.
//! Presence validation is NOT done here -- the session surfaces missing
//! fields as a bad-config status.

use std::collections::BTreeMap;
use std::path::Path;

use figment::Figment;
use figment::providers::{Format, Toml};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use ptzlink_core::CameraConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Config file searched next to the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "ptzlink.toml";

/// The TOML config file: named camera profiles plus a default selection.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// One camera connection profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Load the config file, tolerating its absence.
pub fn load_file_config(path: Option<&Path>) -> Result<FileConfig, CliError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    Figment::new()
        .merge(Toml::file(path))
        .extract()
        .map_err(|e| CliError::ConfigFile(e.to_string()))
}

/// Resolve global flags + profile into a `CameraConfig`.
pub fn resolve(global: &GlobalOpts) -> Result<CameraConfig, CliError> {
    let file = load_file_config(global.config.as_deref())?;

    let profile_name = global
        .profile
        .clone()
        .or_else(|| file.default_profile.clone())
        .unwrap_or_else(|| "default".into());
    tracing::debug!(profile = %profile_name, "resolving camera configuration");
    let profile = file
        .profiles
        .get(&profile_name)
        .cloned()
        .unwrap_or_default();

    let host = global.host.clone().or(profile.host).unwrap_or_default();
    let username = global
        .username
        .clone()
        .or(profile.username)
        .unwrap_or_default();
    let password = global
        .password
        .clone()
        .or(profile.password)
        .unwrap_or_default();

    let mut config = CameraConfig::new(host, username, SecretString::from(password));
    if let Some(port) = global.port.or(profile.port) {
        config.port = port;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> GlobalOpts {
        GlobalOpts {
            host: None,
            port: None,
            username: None,
            password: None,
            profile: None,
            config: None,
            output: crate::cli::OutputFormat::Text,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn flags_override_profile_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ptzlink.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "studio"

[profiles.studio]
host = "192.168.1.60"
port = 8080
username = "admin"
password = "pw"
"#,
        )
        .expect("write config");

        let mut global = opts();
        global.config = Some(path);
        global.host = Some("10.0.0.9".into());

        let config = resolve(&global).expect("resolve");
        assert_eq!(config.host, "10.0.0.9");
        assert_eq!(config.port, 8080);
        assert_eq!(config.username, "admin");
    }

    #[test]
    fn missing_file_resolves_to_empty_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut global = opts();
        global.config = Some(dir.path().join("absent.toml"));

        let config = resolve(&global).expect("resolve");
        assert!(config.host.is_empty());
        assert_eq!(config.port, 80);
    }
}
