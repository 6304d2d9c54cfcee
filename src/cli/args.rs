//! CLI argument definitions.
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Manage JupyterHub spawner profiles and service setup",
    long_about = None
)]
pub struct Cli {
    /// Path to config.toml (overrides JHUB_PROFILES_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<ProfileCommand>,
}

/// Profile management subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProfileCommand {
    /// Add a new profile.
    Add(AddArgs),
    /// Change an existing profile.
    Change(ChangeArgs),
    /// Remove a profile.
    Remove(RemoveArgs),
    /// Display all profiles.
    Display,
    /// Set up the JupyterHub systemd service.
    SetupService(SetupServiceArgs),
    /// Export profiles to JupyterHub configuration.
    Export(ExportArgs),
}

/// Arguments for `add`.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Name of the profile.
    pub name: String,
    /// Shortname of the profile.
    pub shortname: String,
    /// Working directory of the profile.
    pub dir: String,
    /// Path to the virtual environment.
    #[arg(long = "env_path")]
    pub env_path: Option<String>,
    /// Additional arguments for the server.
    #[arg(long = "args", num_args = 0.., allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for `change`.
#[derive(Debug, Clone, Args)]
pub struct ChangeArgs {
    /// Shortname of the profile to change.
    pub shortname: String,
    /// New name of the profile.
    #[arg(long)]
    pub name: Option<String>,
    /// New working directory of the profile.
    #[arg(long)]
    pub dir: Option<String>,
    /// New path to the virtual environment.
    #[arg(long = "env_path")]
    pub env_path: Option<String>,
    /// New additional arguments for the server.
    #[arg(long = "args", num_args = 0.., allow_hyphen_values = true)]
    pub args: Option<Vec<String>>,
}

/// Arguments for `remove`.
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Shortname of the profile to remove.
    pub shortname: String,
}

/// Arguments for `setup-service`.
#[derive(Debug, Clone, Args)]
pub struct SetupServiceArgs {
    /// Custom ExecStart command.
    #[arg(long = "exec_start")]
    pub exec_start: Option<String>,
}

/// Arguments for `export`.
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to the JSON file with profiles (defaults to the configured store).
    #[arg(long = "json_path")]
    pub json_path: Option<PathBuf>,
    /// Path to the JupyterHub configuration file to write.
    #[arg(long = "config_path")]
    pub config_path: Option<PathBuf>,
}

/// Reject shortnames that cannot act as a store key.
pub fn validate_command(command: &ProfileCommand) -> Result<()> {
    let shortname = match command {
        ProfileCommand::Add(args) => Some(&args.shortname),
        ProfileCommand::Change(args) => Some(&args.shortname),
        ProfileCommand::Remove(args) => Some(&args.shortname),
        _ => None,
    };

    if let Some(shortname) = shortname {
        if shortname.trim().is_empty() || shortname.chars().any(char::is_whitespace) {
            return Err(anyhow!(
                "invalid shortname `{shortname}`: must be non-empty without whitespace"
            ));
        }
    }

    Ok(())
}
