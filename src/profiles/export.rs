//! Render the whole store and write the JupyterHub configuration fragment.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::{config::SpawnerSection, lib::errors::ExportError};

use super::{
    render::{render, RenderedProfile, SpawnerCommandConfig},
    store::ProfileStore,
};

/// Render every stored profile in order.
pub fn render_all(
    store: &ProfileStore,
    spawner: &SpawnerSection,
) -> Result<Vec<RenderedProfile>, ExportError> {
    let command_config = SpawnerCommandConfig::from(spawner);
    let profiles = store.load()?;
    Ok(profiles
        .iter()
        .map(|profile| render(profile, &command_config))
        .collect())
}

/// Render every stored profile and write the generated `jupyterhub_config.py`
/// fragment to `config_path`, returning the rendered sequence.
pub fn export_profiles(
    store: &ProfileStore,
    spawner: &SpawnerSection,
    config_path: &Path,
) -> Result<Vec<RenderedProfile>, ExportError> {
    let rendered = render_all(store, spawner)?;
    let contents = generated_config(&rendered, Utc::now());

    crate::lib::fs::write_atomic(config_path, contents.as_bytes()).map_err(|source| {
        ExportError::Write {
            path: config_path.to_path_buf(),
            source,
        }
    })?;

    info!(
        target: "jhub_profiles::store",
        config_path = %config_path.display(),
        profiles = rendered.len(),
        "Exported spawner configuration"
    );
    Ok(rendered)
}

/// Build the configuration fragment. The profiles literal is pretty JSON,
/// which for this structure is also valid Python literal syntax.
fn generated_config(rendered: &[RenderedProfile], generated_at: DateTime<Utc>) -> String {
    let profiles_literal =
        serde_json::to_string_pretty(rendered).expect("rendered profiles serialize to JSON");
    format!(
        "# Generated by jhub-profiles at {timestamp}.\n\
         # Regenerate with `jhub-profiles export`; manual edits will be overwritten.\n\
         from wrapspawner import ProfilesSpawner\n\
         \n\
         c.JupyterHub.spawner_class = ProfilesSpawner\n\
         c.ProfilesSpawner.profiles = {profiles_literal}\n",
        timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}
