use std::{
    fs,
    path::{Path, PathBuf},
    process::Stdio,
};

use anyhow::{Context, Result};
use tokio::process::Command;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_jhub-profiles");

pub struct CliRun {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Run the compiled binary inside `workdir` against its `config.toml`.
pub async fn run_cli(workdir: &Path, args: &[&str]) -> Result<CliRun> {
    let output = Command::new(BINARY_PATH)
        .args(args)
        .current_dir(workdir)
        .env("JHUB_PROFILES_CONFIG", workdir.join("config.toml"))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .context("failed to run jhub-profiles binary")?;

    Ok(CliRun {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    })
}

/// Write a config.toml pointing the store, unit dir, and systemctl stub at
/// paths inside the test's tempdir.
pub fn write_config(workdir: &Path, systemctl_path: &Path) -> Result<()> {
    let contents = format!(
        "[store]\n\
         path = \"{profiles}\"\n\
         \n\
         [service]\n\
         unit_name = \"jupyterhub\"\n\
         unit_dir = \"{unit_dir}\"\n\
         systemctl_path = \"{systemctl}\"\n",
        profiles = workdir.join("profiles.json").display(),
        unit_dir = workdir.join("units").display(),
        systemctl = systemctl_path.display(),
    );
    fs::write(workdir.join("config.toml"), contents).context("failed to write config.toml")
}

/// Install a stub systemctl that records every invocation in `calls.log`
/// and fails when its first argument equals `fail_action`.
pub fn write_stub_systemctl(workdir: &Path, fail_action: Option<&str>) -> Result<PathBuf> {
    let script_path = workdir.join("systemctl");
    let fail_check = match fail_action {
        Some(action) => format!(
            "if [ \"$1\" = \"{action}\" ]; then\n  echo \"stub systemctl failure\" >&2\n  exit 1\nfi\n"
        ),
        None => String::new(),
    };
    let script = format!(
        "#!/bin/sh\n\
         echo \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n\
         {fail_check}exit 0\n"
    );
    fs::write(&script_path, script).context("failed to write systemctl stub")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
            .context("failed to mark systemctl stub executable")?;
    }

    Ok(script_path)
}

/// Recorded invocations of the stub, one line per call.
pub fn recorded_calls(workdir: &Path) -> Vec<String> {
    fs::read_to_string(workdir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
