//! Location of the config file.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

/// Per-user directory holding `config.toml`.
///
/// `~/.config/youtube-audio-merger` on Linux (honoring `XDG_CONFIG_HOME`),
/// `~/Library/Application Support/youtube-audio-merger` on macOS and
/// `%APPDATA%\youtube-audio-merger\config` on Windows.
///
/// # Errors
///
/// Returns [`Error::ConfigDirNotFound`] when no home directory is known.
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(Error::ConfigDirNotFound)?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Full path of the config file read by every run and `config init`.
///
/// # Errors
///
/// Returns [`Error::ConfigDirNotFound`] when no home directory is known.
pub fn config_file_path() -> Result<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
