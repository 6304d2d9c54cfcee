use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths::is_nonempty_absolute};

pub const DEFAULT_UNIT_NAME: &str = "jupyterhub";
pub const DEFAULT_UNIT_DIR: &str = "/etc/systemd/system";
pub const DEFAULT_SYSTEMCTL_PATH: &str = "/usr/bin/systemctl";

/// Settings for installing the JupyterHub service unit.
#[derive(Debug, Clone)]
pub struct ServiceSection {
    /// Unit name without the `.service` suffix.
    pub unit_name: String,
    pub unit_dir: PathBuf,
    pub systemctl_path: PathBuf,
}

impl ServiceSection {
    /// Full path of the unit file this section describes.
    pub fn unit_path(&self) -> PathBuf {
        self.unit_dir.join(format!("{}.service", self.unit_name))
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServiceSection {
    pub unit_name: Option<String>,
    pub unit_dir: Option<PathBuf>,
    pub systemctl_path: Option<PathBuf>,
}

pub fn parse_service_section(
    raw: Option<RawServiceSection>,
    path: &Path,
) -> Result<ServiceSection, ConfigError> {
    let service_raw = raw.unwrap_or_default();

    let unit_name = service_raw
        .unit_name
        .unwrap_or_else(|| DEFAULT_UNIT_NAME.to_string());
    validate_unit_name(path, &unit_name)?;

    let unit_dir = service_raw
        .unit_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_UNIT_DIR));
    if !is_nonempty_absolute(&unit_dir) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "service.unit_dir",
            message: format!("Provide an absolute unit directory: {}", unit_dir.display()),
        });
    }

    let systemctl_path = service_raw
        .systemctl_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEMCTL_PATH));
    if !is_nonempty_absolute(&systemctl_path) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "service.systemctl_path",
            message: format!(
                "Provide an absolute path to the systemctl executable: {}",
                systemctl_path.display()
            ),
        });
    }

    Ok(ServiceSection {
        unit_name,
        unit_dir,
        systemctl_path,
    })
}

fn validate_unit_name(path: &Path, unit_name: &str) -> Result<(), ConfigError> {
    if unit_name.trim().is_empty() || unit_name.len() > 64 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "service.unit_name",
            message: "Provide a 1-64 character unit name".into(),
        });
    }
    if unit_name.contains('/') {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "service.unit_name",
            message: format!("Unit names cannot contain `/`: {unit_name}"),
        });
    }
    if unit_name.ends_with(".service") {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "service.unit_name",
            message: "Leave off the `.service` suffix; it is appended automatically".into(),
        });
    }
    Ok(())
}
