//! Whole-file JSON persistence for profiles.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::lib::{errors::StoreError, fs as file_io};

use super::record::{Profile, ProfilePatch};

/// Update outcome for [`ProfileStore::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    Updated,
    NotFound,
}

/// Removal outcome for [`ProfileStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveStatus {
    Removed,
    NotFound,
}

/// Owns the backing JSON file holding the ordered profile sequence.
///
/// Every operation is a full load→save cycle; no state is cached between
/// invocations. Saves replace the file atomically, which prevents torn
/// writes but not lost updates: concurrent processes mutating the same file
/// still race with last-write-wins semantics.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the whole backing file into an ordered profile sequence.
    pub fn load(&self) -> Result<Vec<Profile>, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                StoreError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Serialize the full sequence back, replacing the file atomically.
    pub fn save(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        let serialized = serde_json::to_string_pretty(profiles).map_err(|source| {
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        file_io::write_atomic(&self.path, serialized.as_bytes()).map_err(|source| {
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Append a profile. A missing backing file counts as an empty store and
    /// is created by the save; a duplicate shortname is rejected.
    pub fn add(&self, profile: Profile) -> Result<(), StoreError> {
        let mut profiles = match self.load() {
            Ok(profiles) => profiles,
            Err(StoreError::NotFound { .. }) => Vec::new(),
            Err(other) => return Err(other),
        };

        if profiles
            .iter()
            .any(|existing| existing.shortname == profile.shortname)
        {
            return Err(StoreError::DuplicateShortname {
                shortname: profile.shortname,
            });
        }

        info!(
            target: "jhub_profiles::store",
            path = %self.path.display(),
            shortname = %profile.shortname,
            "Adding profile"
        );
        profiles.push(profile);
        self.save(&profiles)
    }

    /// Shallow-merge `patch` over the first profile matching `shortname`.
    /// No write happens when nothing matches.
    pub fn update(
        &self,
        shortname: &str,
        patch: &ProfilePatch,
    ) -> Result<UpdateStatus, StoreError> {
        let mut profiles = self.load()?;
        let Some(profile) = profiles
            .iter_mut()
            .find(|profile| profile.shortname == shortname)
        else {
            return Ok(UpdateStatus::NotFound);
        };

        patch.apply(profile);
        info!(
            target: "jhub_profiles::store",
            path = %self.path.display(),
            shortname = shortname,
            "Updating profile"
        );
        self.save(&profiles)?;
        Ok(UpdateStatus::Updated)
    }

    /// Drop every profile matching `shortname`. No write happens when
    /// nothing matches.
    pub fn remove(&self, shortname: &str) -> Result<RemoveStatus, StoreError> {
        let profiles = self.load()?;
        let original_len = profiles.len();
        let kept: Vec<Profile> = profiles
            .into_iter()
            .filter(|profile| profile.shortname != shortname)
            .collect();
        if kept.len() == original_len {
            return Ok(RemoveStatus::NotFound);
        }

        info!(
            target: "jhub_profiles::store",
            path = %self.path.display(),
            shortname = shortname,
            "Removing profile"
        );
        self.save(&kept)?;
        Ok(RemoveStatus::Removed)
    }
}
