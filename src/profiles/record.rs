use serde::{Deserialize, Serialize};

/// One named launch configuration for a single-user notebook server.
///
/// `shortname` is the unique key within a store; `add` rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display label shown to the user; not required to be unique.
    pub name: String,
    /// Unique key across the store.
    pub shortname: String,
    /// Working directory the server starts in.
    pub dir: String,
    /// Virtual-environment path; `<dir>/.venv` is substituted at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_path: Option<String>,
    /// Extra arguments passed to the single-user server.
    #[serde(default)]
    pub args: Vec<String>,
    /// Spawner class override; the configured default is substituted at
    /// render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cls: Option<String>,
}

impl Profile {
    /// Virtual-environment path with the `<dir>/.venv` default applied.
    pub fn env_path_or_default(&self) -> String {
        self.env_path
            .clone()
            .unwrap_or_else(|| format!("{}/.venv", self.dir))
    }
}

/// Field-wise update applied by `change`; unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub dir: Option<String>,
    pub env_path: Option<String>,
    pub args: Option<Vec<String>>,
}

impl ProfilePatch {
    /// Shallow-merge the set fields over `profile`.
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(dir) = &self.dir {
            profile.dir = dir.clone();
        }
        if let Some(env_path) = &self.env_path {
            profile.env_path = Some(env_path.clone());
        }
        if let Some(args) = &self.args {
            profile.args = args.clone();
        }
    }

    /// True when no field is set; `change` without flags is a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.dir.is_none() && self.env_path.is_none() && self.args.is_none()
    }
}
