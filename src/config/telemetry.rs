use tracing::{debug, info};

use super::{ProfilesConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "jhub_profiles::config",
            path = %path.display(),
            "Loading configuration using JHUB_PROFILES_CONFIG environment variable"
        );
    } else {
        debug!(
            target: "jhub_profiles::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "JHUB_PROFILES_CONFIG not set; using default config.toml"
        );
    }
}

pub fn log_defaults() {
    debug!(
        target: "jhub_profiles::config",
        "No configuration file present; using built-in defaults"
    );
}

pub fn log_loaded(config: &ProfilesConfig) {
    info!(
        target: "jhub_profiles::config",
        source = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string()),
        profiles_path = %config.store.path.display(),
        shell = %config.spawner.shell.display(),
        command = %config.spawner.command,
        unit_name = %config.service.unit_name,
        unit_dir = %config.service.unit_dir.display(),
        "Configuration loaded successfully"
    );
}
