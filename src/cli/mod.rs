//! CLI entrypoint module structure.
use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    config::ProfilesConfig,
    profiles::{
        export_profiles, Profile, ProfilePatch, ProfileStore, RemoveStatus, UpdateStatus,
    },
    service::setup_service,
};

pub mod args;
pub mod exit;

pub use args::{
    validate_command, AddArgs, ChangeArgs, Cli, ExportArgs, ProfileCommand, RemoveArgs,
    SetupServiceArgs,
};
pub use exit::CliExit;

/// Default target of `export` when `--config_path` is not given.
pub const DEFAULT_EXPORT_CONFIG_PATH: &str = "jupyterhub_config.py";

/// Execute one subcommand and return a user-facing confirmation.
pub async fn execute_cli_command(
    command: ProfileCommand,
    config: &ProfilesConfig,
) -> Result<String> {
    let store = ProfileStore::new(config.store.path.clone());

    match command {
        ProfileCommand::Add(args) => add_profile(&store, args),
        ProfileCommand::Change(args) => change_profile(&store, args),
        ProfileCommand::Remove(args) => remove_profile(&store, args),
        ProfileCommand::Display => display_profiles(&store),
        ProfileCommand::SetupService(args) => {
            let report = setup_service(&config.service, &config.spawner, args.exec_start)
                .await
                .context("failed to set up the JupyterHub service")?;
            Ok(format!(
                "JupyterHub service installed and started successfully. Unit written to {}.",
                report.unit_path.display()
            ))
        }
        ProfileCommand::Export(args) => {
            let store = match args.json_path {
                Some(path) => ProfileStore::new(path),
                None => store,
            };
            let config_path = args
                .config_path
                .unwrap_or_else(|| Path::new(DEFAULT_EXPORT_CONFIG_PATH).to_path_buf());
            let rendered = export_profiles(&store, &config.spawner, &config_path)
                .context("failed to export profiles")?;
            Ok(format!(
                "Exported {count} profile(s) to {path}.",
                count = rendered.len(),
                path = config_path.display()
            ))
        }
    }
}

fn add_profile(store: &ProfileStore, args: AddArgs) -> Result<String> {
    let profile = Profile {
        name: args.name.clone(),
        shortname: args.shortname,
        dir: args.dir,
        env_path: args.env_path,
        args: args.args,
        cls: None,
    };
    store
        .add(profile)
        .with_context(|| format!("failed to add profile '{}'", args.name))?;
    Ok(format!("Profile '{}' added successfully.", args.name))
}

fn change_profile(store: &ProfileStore, args: ChangeArgs) -> Result<String> {
    let patch = ProfilePatch {
        name: args.name,
        dir: args.dir,
        env_path: args.env_path,
        args: args.args,
    };
    if patch.is_empty() {
        return Ok(format!(
            "No changes requested for profile '{}'.",
            args.shortname
        ));
    }

    let status = store
        .update(&args.shortname, &patch)
        .with_context(|| format!("failed to change profile '{}'", args.shortname))?;
    Ok(match status {
        UpdateStatus::Updated => {
            format!("Profile '{}' updated successfully.", args.shortname)
        }
        UpdateStatus::NotFound => {
            format!("Profile with shortname '{}' not found.", args.shortname)
        }
    })
}

fn remove_profile(store: &ProfileStore, args: RemoveArgs) -> Result<String> {
    let status = store
        .remove(&args.shortname)
        .with_context(|| format!("failed to remove profile '{}'", args.shortname))?;
    Ok(match status {
        RemoveStatus::Removed => {
            format!("Profile '{}' removed successfully.", args.shortname)
        }
        RemoveStatus::NotFound => format!(
            "Profile with shortname '{}' not found; nothing removed.",
            args.shortname
        ),
    })
}

fn display_profiles(store: &ProfileStore) -> Result<String> {
    let profiles = store.load().context("failed to load profiles")?;
    if profiles.is_empty() {
        return Ok(format!("No profiles stored in {}.", store.path().display()));
    }

    let mut lines = Vec::with_capacity(profiles.len());
    for profile in &profiles {
        lines.push(serde_json::to_string_pretty(profile)?);
    }
    Ok(lines.join("\n"))
}
