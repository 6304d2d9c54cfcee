use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while reading or rewriting the profiles JSON file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profiles file {path} does not exist")]
    NotFound { path: PathBuf },
    #[error("Profiles file {path} is not a valid JSON profile array: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O failed for profiles file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("A profile with shortname `{shortname}` already exists")]
    DuplicateShortname { shortname: String },
}

/// Failures while exporting rendered profiles to a spawner config file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to write spawner configuration {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures while installing or starting the systemd service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Could not determine the current username")]
    CurrentUserUnavailable,
    #[error("Could not determine the current working directory: {source}")]
    WorkingDirUnavailable {
        #[source]
        source: io::Error,
    },
    #[error("Failed to write service unit {path}: {source}")]
    UnitWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program} {}` exited abnormally (exit={exit_code:?}): {stderr}", .args.join(" "))]
    CommandFailed {
        program: String,
        args: Vec<String>,
        exit_code: Option<i32>,
        stderr: String,
    },
}
