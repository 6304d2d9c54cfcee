use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_PROFILES_PATH: &str = "profiles.json";

/// Profiles store settings.
#[derive(Debug, Clone)]
pub struct StoreSection {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawStoreSection {
    pub path: Option<PathBuf>,
}

pub fn parse_store_section(
    raw: Option<RawStoreSection>,
    path: &Path,
) -> Result<StoreSection, ConfigError> {
    let store_raw = raw.unwrap_or_default();
    let profiles_path = store_raw
        .path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILES_PATH));
    if profiles_path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "store.path",
            message: "Provide a non-empty path to the profiles JSON file".into(),
        });
    }
    Ok(StoreSection {
        path: profiles_path,
    })
}
