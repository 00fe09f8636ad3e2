//! The user-facing error kinds of the hydra core.
//!
//! Validation failures are ordinary, expected outcomes of an `init` or
//! `config` run, so they carry their own variant (and exit code) instead
//! of being folded into a generic I/O report.

use std::path::PathBuf;

use thiserror::Error;

use crate::utils::constants::error_messages;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HydraError {
    #[error(
        "You've not set your hydra configuration. You cannot proceed without setting the necessary configuration.\n{}",
        error_messages::NOT_CONFIGURED_HINT
    )]
    NotConfigured,

    #[error(
        "Invalid value for flag license: '{}'.\n{}",
        .0,
        error_messages::WRONG_LICENSE_HINT
    )]
    InvalidLicense(String),

    #[error(
        "Unsupported language type: '{}'. Cannot initiate the project.\n{}",
        .0,
        error_messages::WRONG_LANG_HINT
    )]
    UnsupportedLanguage(String),

    #[error(
        "Invalid project name: '{0}'. Characters like (. ? * : , ' \" | < >) are not allowed in filenames."
    )]
    InvalidProjectName(String),

    #[error(
        "The configuration file {path:?} is corrupt and could not be parsed: {reason}.\nDelete it (or rerun `hydra config`) to reset it to the defaults."
    )]
    CorruptConfig { path: PathBuf, reason: String },

    #[error("Unknown configuration field: '{0}'")]
    UnknownConfigField(String),
}

impl HydraError {
    /// Every error kind maps to its own process exit code, so scripts can
    /// tell a rejected flag apart from a missing configuration
    pub const fn exit_code(&self) -> i32 {
        match self {
            HydraError::NotConfigured => 2,
            HydraError::InvalidLicense(_) => 3,
            HydraError::UnsupportedLanguage(_) => 4,
            HydraError::InvalidProjectName(_) => 5,
            HydraError::CorruptConfig { .. } => 6,
            HydraError::UnknownConfigField(_) => 7,
        }
    }
}
