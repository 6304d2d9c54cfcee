//! Load and validate tool configuration.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod service;
pub mod spawner;
pub mod store;
pub mod telemetry;

pub use service::{
    parse_service_section, RawServiceSection, ServiceSection, DEFAULT_SYSTEMCTL_PATH,
    DEFAULT_UNIT_DIR, DEFAULT_UNIT_NAME,
};
pub use spawner::{
    parse_spawner_section, RawSpawnerSection, SpawnerSection, DEFAULT_SHELL,
    DEFAULT_SPAWNER_CLASS, DEFAULT_SPAWNER_COMMAND,
};
pub use store::{parse_store_section, RawStoreSection, StoreSection, DEFAULT_PROFILES_PATH};

const CONFIG_ENV_KEY: &str = "JHUB_PROFILES_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct ProfilesConfig {
    pub store: StoreSection,
    pub spawner: SpawnerSection,
    pub service: ServiceSection,
    /// `None` when no file was read and built-in defaults apply.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawProfilesConfig {
    store: Option<RawStoreSection>,
    spawner: Option<RawSpawnerSection>,
    service: Option<RawServiceSection>,
}

impl ProfilesConfig {
    /// Resolve and load configuration.
    ///
    /// Resolution order: CLI `--config` override → `JHUB_PROFILES_CONFIG` →
    /// `config.toml` in the working directory. An explicitly named file must
    /// load; a missing file at the default path falls back to built-in
    /// defaults so the tool works with zero setup.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            return Self::load_from_path(path);
        }

        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_env_source(&path, true);
                Self::load_from_path(path)
            }
            _ => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                telemetry::log_env_source(&path, false);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    telemetry::log_defaults();
                    Self::builtin_defaults()
                }
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "jhub_profiles::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawProfilesConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "jhub_profiles::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "jhub_profiles::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawProfilesConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let store = parse_store_section(raw.store, &path)?;
        let spawner = parse_spawner_section(raw.spawner, &path)?;
        let service = parse_service_section(raw.service, &path)?;

        Ok(Self {
            store,
            spawner,
            service,
            source_path: Some(path),
        })
    }

    fn builtin_defaults() -> Result<Self, ConfigError> {
        let default_source = PathBuf::from(DEFAULT_CONFIG_PATH);
        let store = parse_store_section(None, &default_source)?;
        let spawner = parse_spawner_section(None, &default_source)?;
        let service = parse_service_section(None, &default_source)?;
        Ok(Self {
            store,
            spawner,
            service,
            source_path: None,
        })
    }
}
