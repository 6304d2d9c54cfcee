//! Telemetry initialization and service-setup span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one systemctl step.
pub struct ServiceStepSpan {
    span: Span,
    started_at: Instant,
    action: &'static str,
}

impl ServiceStepSpan {
    /// Start a span for a single service-manager invocation.
    pub fn start(unit: &str, action: &'static str) -> Self {
        let span = info_span!(
            target: "jhub_profiles::service",
            "service_step",
            unit,
            action
        );
        Self {
            span,
            started_at: Instant::now(),
            action,
        }
    }

    /// Close the span while recording status and exit code.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "jhub_profiles::service",
            action = self.action,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed service-manager step"
        );
    }
}
