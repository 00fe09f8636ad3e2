//! The per-user hydra configuration and its on-disk store.
//!
//! The configuration is a single JSON file under the user's home
//! directory, holding exactly four string fields. It is always read and
//! rewritten as a whole record, never patched in place.

use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    error::HydraError,
    utils::{self, constants, constants::error_messages},
};

/// The field names accepted by [`ConfigStore::get`]
pub mod field {
    pub const FULL_NAME: &str = "fullName";
    pub const GITHUB_USERNAME: &str = "githubUsername";
    pub const DEFAULT_LANG: &str = "defaultLang";
    pub const DEFAULT_LICENSE: &str = "defaultLicense";
}

/// The persistent user configuration record.
///
/// The serialized field names are PascalCase to keep the file format
/// byte-compatible with the historical `hydra_config.json` layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserConfig {
    pub full_name: String,
    pub github_username: String,
    pub default_lang: String,
    pub default_license: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            github_username: String::new(),
            default_lang: String::new(),
            default_license: constants::DEFAULT_LICENSE.to_owned(),
        }
    }
}

/// Owner of the configuration file. All of its operations touch exactly
/// one path, fixed at construction time.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole configuration record. An absent file is not an
    /// error: the default record is written out first and then returned,
    /// so two consecutive fresh loads observe the same data and the file
    /// exists afterwards. A present but malformed file surfaces
    /// [`HydraError::CorruptConfig`] instead of aborting the process.
    pub fn load(&self) -> Result<UserConfig> {
        if !self.path.exists() {
            log::debug!(
                "No configuration file found at {:?}, initializing it with the defaults",
                self.path
            );
            self.save(&UserConfig::default())?;
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("{}: {:?}", error_messages::READ_CONFIG_FILE, self.path))?;

        serde_json::from_str(&raw).map_err(|e| {
            HydraError::CorruptConfig {
                path: self.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Fully replaces the stored record with `update`. The write goes
    /// through a sibling temp file followed by a rename, so a reader can
    /// never observe a half-written or missing configuration file.
    pub fn save(&self, update: &UserConfig) -> Result<()> {
        utils::fs::serialize_object_to_file(&self.path, update)
            .with_context(|| format!("{}: {:?}", error_messages::WRITE_CONFIG_FILE, self.path))
    }

    /// Fetches a single field of the stored record by its historical
    /// camelCase name. An unrecognized field name fails the caller's
    /// operation with [`HydraError::UnknownConfigField`].
    pub fn get(&self, field_name: &str) -> Result<String> {
        let cfg = self.load()?;
        match field_name {
            field::FULL_NAME => Ok(cfg.full_name),
            field::GITHUB_USERNAME => Ok(cfg.github_username),
            field::DEFAULT_LANG => Ok(cfg.default_lang),
            field::DEFAULT_LICENSE => Ok(cfg.default_license),
            unknown => Err(HydraError::UnknownConfigField(unknown.to_owned()).into()),
        }
    }
}
