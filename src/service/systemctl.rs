//! Shared helpers for building and running checked `systemctl` commands.

use std::path::Path;

use tokio::process::Command;
use tracing::info;

use crate::lib::{errors::ServiceError, telemetry::ServiceStepSpan};

const STDERR_EXCERPT_LIMIT: usize = 2_000;

/// One service-manager call: `<systemctl_path> <action> [unit]`.
pub struct SystemctlInvocation<'a> {
    pub systemctl_path: &'a Path,
    pub action: &'a str,
    pub unit: Option<&'a str>,
}

/// Build the command without running it.
pub fn build_systemctl_command(invocation: &SystemctlInvocation<'_>) -> Command {
    let mut command = Command::new(invocation.systemctl_path);
    command.kill_on_drop(true);
    command.arg(invocation.action);
    if let Some(unit) = invocation.unit {
        command.arg(unit);
    }
    command
}

/// Run the invocation, blocking until it exits, and fail on a non-zero
/// status. Stderr is captured into the error, truncated to a fixed excerpt.
pub async fn run_checked(invocation: &SystemctlInvocation<'_>) -> Result<(), ServiceError> {
    let program = invocation.systemctl_path.display().to_string();
    let mut args = vec![invocation.action.to_string()];
    if let Some(unit) = invocation.unit {
        args.push(unit.to_string());
    }

    info!(
        target: "jhub_profiles::service",
        program = %program,
        args = ?args,
        "Invoking service manager"
    );
    let span = ServiceStepSpan::start(invocation.unit.unwrap_or("-"), "systemctl");

    let output = build_systemctl_command(invocation)
        .output()
        .await
        .map_err(|source| ServiceError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        span.finish("failed", output.status.code());
        let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        stderr.truncate(STDERR_EXCERPT_LIMIT);
        return Err(ServiceError::CommandFailed {
            program,
            args,
            exit_code: output.status.code(),
            stderr,
        });
    }

    span.finish("succeeded", output.status.code());
    Ok(())
}
