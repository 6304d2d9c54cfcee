use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths::is_nonempty_absolute};

pub const DEFAULT_SHELL: &str = "/bin/bash";
pub const DEFAULT_SPAWNER_COMMAND: &str = "jupyterhub-singleuser";
pub const DEFAULT_SPAWNER_CLASS: &str = "jupyterhub.spawner.LocalProcessSpawner";

/// Settings for the command rendered into each spawner profile.
#[derive(Debug, Clone)]
pub struct SpawnerSection {
    /// Shell placed at `cmd[0]` of every rendered profile.
    pub shell: PathBuf,
    /// Single-user server executable launched by the activation script.
    pub command: String,
    /// Spawner class substituted when a profile carries no `cls` field.
    pub default_class: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawSpawnerSection {
    pub shell: Option<PathBuf>,
    pub command: Option<String>,
    pub default_class: Option<String>,
}

pub fn parse_spawner_section(
    raw: Option<RawSpawnerSection>,
    path: &Path,
) -> Result<SpawnerSection, ConfigError> {
    let spawner_raw = raw.unwrap_or_default();

    let shell = spawner_raw
        .shell
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SHELL));
    if !is_nonempty_absolute(&shell) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "spawner.shell",
            message: format!("Provide an absolute shell path: {}", shell.display()),
        });
    }

    let command = spawner_raw
        .command
        .unwrap_or_else(|| DEFAULT_SPAWNER_COMMAND.to_string());
    if command.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "spawner.command",
            message: "Provide a non-empty single-user server command".into(),
        });
    }

    let default_class = spawner_raw
        .default_class
        .unwrap_or_else(|| DEFAULT_SPAWNER_CLASS.to_string());
    if default_class.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "spawner.default_class",
            message: "Provide a non-empty spawner class identifier".into(),
        });
    }

    Ok(SpawnerSection {
        shell,
        command,
        default_class,
    })
}
