use std::{
    fs::{self, DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{
    eyre::{Context, ContextCompat},
    Result,
};
use serde::Serialize;

use crate::utils::constants::{self, error_messages};

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Serializes `object` as JSON and writes it to `path` atomically, by
/// dumping the bytes into a sibling temp file first and then renaming it
/// over the target. A crash mid-save leaves the previous file intact.
pub fn serialize_object_to_file<T: Serialize>(path: &Path, object: &T) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid target path {path:?}"))?
        .to_string_lossy();
    let tmp_path = path.with_file_name(format!(
        "{file_name}{}",
        constants::CONFIG_TMP_SUFFIX
    ));

    let serialized = serde_json::to_string_pretty(object)
        .with_context(|| format!("Could not serialize data for {path:?}"))?;

    fs::write(&tmp_path, serialized)
        .with_context(|| format!("Could not write the temp file {tmp_path:?}"))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Could not move {tmp_path:?} over {path:?}"))
}

/// Resolves the fixed, user-home-relative location of the hydra
/// configuration file
pub fn default_config_file() -> Result<PathBuf> {
    let home = dirs::home_dir().with_context(|| error_messages::HOME_DIR_NOT_FOUND)?;
    Ok(home.join(constants::CONFIG_FILE_NAME))
}
