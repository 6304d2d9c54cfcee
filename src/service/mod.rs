//! Install JupyterHub as a systemd service and start it.

pub mod systemctl;
pub mod unit;

use std::{env, path::PathBuf};

use tracing::info;

use crate::{
    config::{ServiceSection, SpawnerSection},
    lib::{errors::ServiceError, fs as file_io},
};

pub use systemctl::{build_systemctl_command, run_checked, SystemctlInvocation};
pub use unit::{render_unit, UnitSpec};

const UNIT_DESCRIPTION: &str = "JupyterHub";

/// What `setup-service` did, for the CLI confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub unit_name: String,
    pub unit_path: PathBuf,
}

/// Write the service unit and run `daemon-reload`, `enable`, `start`.
///
/// The three service-manager calls run in sequence; the first failure aborts
/// the remaining steps and there is no rollback of the written unit file.
pub async fn setup_service(
    service: &ServiceSection,
    spawner: &SpawnerSection,
    exec_start: Option<String>,
) -> Result<SetupReport, ServiceError> {
    let working_dir = env::current_dir()
        .map_err(|source| ServiceError::WorkingDirUnavailable { source })?
        .display()
        .to_string();
    let env_path = format!("{working_dir}/.venv");
    let exec_start = exec_start.unwrap_or_else(|| format!("{env_path}/bin/jupyterhub"));
    let user = current_username()?;

    let unit_path = service.unit_path();
    let unit = render_unit(&UnitSpec {
        description: UNIT_DESCRIPTION,
        user: &user,
        working_dir: &working_dir,
        env_path: &env_path,
        exec_start: &exec_start,
        shell: spawner.shell.to_str().unwrap_or_default(),
    });

    file_io::ensure_parent_dir(&unit_path).map_err(|source| ServiceError::UnitWrite {
        path: unit_path.clone(),
        source,
    })?;
    file_io::write_atomic(&unit_path, unit.as_bytes()).map_err(|source| {
        ServiceError::UnitWrite {
            path: unit_path.clone(),
            source,
        }
    })?;
    info!(
        target: "jhub_profiles::service",
        unit = %service.unit_name,
        path = %unit_path.display(),
        user = %user,
        "Wrote service unit"
    );

    for (action, unit_arg) in [
        ("daemon-reload", None),
        ("enable", Some(service.unit_name.as_str())),
        ("start", Some(service.unit_name.as_str())),
    ] {
        run_checked(&SystemctlInvocation {
            systemctl_path: &service.systemctl_path,
            action,
            unit: unit_arg,
        })
        .await?;
    }

    Ok(SetupReport {
        unit_name: service.unit_name.clone(),
        unit_path,
    })
}

fn current_username() -> Result<String, ServiceError> {
    users::get_current_username()
        .and_then(|name| name.into_string().ok())
        .ok_or(ServiceError::CurrentUserUnavailable)
}
