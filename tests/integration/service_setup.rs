use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{recorded_calls, run_cli, write_config, write_stub_systemctl};

#[tokio::test]
async fn setup_writes_the_unit_and_runs_systemctl_in_order() -> Result<()> {
    let temp = tempdir()?;
    let stub = write_stub_systemctl(temp.path(), None)?;
    write_config(temp.path(), &stub)?;

    let run = run_cli(temp.path(), &["setup-service"]).await?;

    assert!(run.success, "stderr: {}", run.stderr);
    assert!(
        run.stdout
            .contains("JupyterHub service installed and started successfully."),
        "stdout: {}",
        run.stdout
    );

    let unit_path = temp.path().join("units").join("jupyterhub.service");
    let unit = fs::read_to_string(&unit_path)?;
    assert!(unit.contains("Description=JupyterHub\n"), "unit: {unit}");
    assert!(unit.contains("User="), "unit: {unit}");
    assert!(
        unit.contains("WorkingDirectory="),
        "unit: {unit}"
    );
    assert!(
        unit.contains("/.venv/bin/activate && "),
        "unit: {unit}"
    );
    assert!(unit.contains("/.venv/bin/jupyterhub'"), "unit: {unit}");

    assert_eq!(
        recorded_calls(temp.path()),
        vec![
            "daemon-reload".to_string(),
            "enable jupyterhub".to_string(),
            "start jupyterhub".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn explicit_exec_start_lands_in_the_unit() -> Result<()> {
    let temp = tempdir()?;
    let stub = write_stub_systemctl(temp.path(), None)?;
    write_config(temp.path(), &stub)?;

    let run = run_cli(
        temp.path(),
        &["setup-service", "--exec_start", "/opt/hub/bin/jupyterhub"],
    )
    .await?;

    assert!(run.success, "stderr: {}", run.stderr);
    let unit = fs::read_to_string(temp.path().join("units").join("jupyterhub.service"))?;
    assert!(
        unit.contains("&& /opt/hub/bin/jupyterhub'"),
        "unit: {unit}"
    );
    Ok(())
}

#[tokio::test]
async fn failing_daemon_reload_aborts_before_enable_and_start() -> Result<()> {
    let temp = tempdir()?;
    let stub = write_stub_systemctl(temp.path(), Some("daemon-reload"))?;
    write_config(temp.path(), &stub)?;

    let run = run_cli(temp.path(), &["setup-service"]).await?;

    assert!(!run.success, "failing systemctl must fail the command");
    assert!(
        run.stderr.contains("exited abnormally"),
        "stderr: {}",
        run.stderr
    );
    assert_eq!(
        recorded_calls(temp.path()),
        vec!["daemon-reload".to_string()],
        "enable and start must not run after the failure"
    );
    assert!(
        temp.path().join("units").join("jupyterhub.service").exists(),
        "fail-fast leaves the written unit in place (no rollback)"
    );
    Ok(())
}

#[tokio::test]
async fn failing_enable_stops_before_start() -> Result<()> {
    let temp = tempdir()?;
    let stub = write_stub_systemctl(temp.path(), Some("enable"))?;
    write_config(temp.path(), &stub)?;

    let run = run_cli(temp.path(), &["setup-service"]).await?;

    assert!(!run.success);
    assert_eq!(
        recorded_calls(temp.path()),
        vec!["daemon-reload".to_string(), "enable jupyterhub".to_string()]
    );
    Ok(())
}
