//! Pure transformation from a profile record to the ProfilesSpawner tuple.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::config::SpawnerSection;

use super::record::Profile;

/// Borrowed inputs shared by every render in one invocation.
pub struct SpawnerCommandConfig<'a> {
    /// Shell placed at `cmd[0]`.
    pub shell: &'a str,
    /// Single-user server executable exec'd by the activation script.
    pub command: &'a str,
    /// Class substituted when the profile carries no `cls`.
    pub default_class: &'a str,
}

impl<'a> From<&'a SpawnerSection> for SpawnerCommandConfig<'a> {
    fn from(section: &'a SpawnerSection) -> Self {
        Self {
            shell: section.shell.to_str().unwrap_or_default(),
            command: &section.command,
            default_class: &section.default_class,
        }
    }
}

/// `{cmd: [shell, "-c", script]}` mapping consumed by the spawner.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SpawnerConfig {
    pub cmd: Vec<String>,
}

/// One rendered profile. Serializes as the 4-element tuple
/// `(name, shortname, spawner_class, spawner_config)` the ProfilesSpawner
/// extension expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProfile {
    pub name: String,
    pub shortname: String,
    pub spawner_class: String,
    pub spawner_config: SpawnerConfig,
}

impl Serialize for RenderedProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.shortname)?;
        tuple.serialize_element(&self.spawner_class)?;
        tuple.serialize_element(&self.spawner_config)?;
        tuple.end()
    }
}

/// Map one profile to its spawner tuple. Deterministic and side-effect-free.
///
/// Arguments and paths are interpolated into the shell script verbatim, with
/// no escaping or quoting; that is the documented contract with the spawner
/// extension, and it makes the script only as trustworthy as the store.
pub fn render(profile: &Profile, config: &SpawnerCommandConfig<'_>) -> RenderedProfile {
    let script = activation_script(
        &profile.env_path_or_default(),
        &profile.dir,
        config.command,
        &profile.args,
    );

    RenderedProfile {
        name: profile.name.clone(),
        shortname: profile.shortname.clone(),
        spawner_class: profile
            .cls
            .clone()
            .unwrap_or_else(|| config.default_class.to_string()),
        spawner_config: SpawnerConfig {
            cmd: vec![config.shell.to_string(), "-c".to_string(), script],
        },
    }
}

/// `source <env>/bin/activate && cd <dir> && exec <command> <args...>`.
fn activation_script(env_path: &str, dir: &str, command: &str, args: &[String]) -> String {
    let mut script = format!("source {env_path}/bin/activate && cd {dir} && exec {command}");
    if !args.is_empty() {
        script.push(' ');
        script.push_str(&args.join(" "));
    }
    script
}
