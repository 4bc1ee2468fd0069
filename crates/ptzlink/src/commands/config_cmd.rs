//! `ptzlink config` -- manage the profile config file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::{ConfigAction, GlobalOpts};
use crate::config::{DEFAULT_CONFIG_FILE, FileConfig, Profile, load_file_config};
use crate::error::CliError;

pub fn run(global: &GlobalOpts, action: ConfigAction) -> Result<(), CliError> {
    let path = global
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    match action {
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigFile(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            let template = FileConfig {
                default_profile: Some("default".into()),
                profiles: BTreeMap::from([(
                    "default".to_owned(),
                    Profile {
                        host: Some("192.168.1.60".into()),
                        port: Some(80),
                        username: Some("admin".into()),
                        // Prefer PTZLINK_PASSWORD over storing it here.
                        password: None,
                    },
                )]),
            };
            let body = toml::to_string_pretty(&template)
                .map_err(|e| CliError::ConfigFile(e.to_string()))?;
            std::fs::write(&path, body).map_err(|e| CliError::ConfigFile(e.to_string()))?;
            println!("wrote {}", path.display());
        }
        ConfigAction::Show => {
            let file = load_file_config(global.config.as_deref())?;
            println!("config file: {}", path.display());
            match &file.default_profile {
                Some(name) => println!("default profile: {name}"),
                None => println!("default profile: (none)"),
            }
            for (name, profile) in &file.profiles {
                println!(
                    "  [{name}] host={} port={} username={}",
                    profile.host.as_deref().unwrap_or("-"),
                    profile.port.unwrap_or(80),
                    profile.username.as_deref().unwrap_or("-"),
                );
            }
        }
    }
    Ok(())
}
