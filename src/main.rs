//! Entry point for jhub-profiles.
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use jhub_profiles::{
    cli::{execute_cli_command, validate_command, Cli, CliExit},
    config::ProfilesConfig,
    lib::telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let help = Cli::command().render_long_help();
        println!("{help}");
        return Ok(());
    };
    validate_command(&command).map_err(CliExit::from_error)?;

    let config = ProfilesConfig::load(cli.config_override).map_err(CliExit::from_error)?;
    let message = execute_cli_command(command, &config)
        .await
        .map_err(CliExit::from_error)?;
    println!("{message}");
    Ok(())
}
