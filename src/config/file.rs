//! Reading and writing the TOML config file.
//!
//! The file has three optional tables, `[defaults]` (output, format,
//! bitrate, workspace), `[tools]` (ffmpeg, yt-dlp, process timeout) and
//! `[network]` (user agent, stream timeouts). Missing tables and keys fall
//! back to built-in values, so a partial file is always enough.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// Load a config file, or the built-in defaults if `path` does not exist.
///
/// # Errors
///
/// Returns [`Error::ConfigRead`] if the file exists but cannot be read and
/// [`Error::ConfigParse`] if it is not valid TOML for this schema.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(Error::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    debug!("Loading config from {}", path.display());
    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the user's config file.
///
/// Platforms without a config directory get the built-in defaults.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    match super::config_file_path() {
        Ok(path) => load_config_file(&path),
        Err(_) => Ok(Config::default()),
    }
}

/// Write `config` as TOML to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::ConfigSerialize`] or [`Error::ConfigWrite`].
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let write_failed = |source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    let contents =
        toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, contents).map_err(write_failed)
}

/// Write `config` to the user's config file and return its path.
///
/// # Errors
///
/// Returns [`Error::ConfigDirNotFound`] if the platform has no config
/// directory, or any error from [`save_config`].
pub fn save_default_config(config: &Config) -> Result<PathBuf> {
    let path = super::config_file_path()?;
    save_config(config, &path)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let path = Path::new("/nonexistent/path/config.toml");
        let config = load_config_file(path).unwrap();
        assert_eq!(config.defaults.format, "mp3");
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[defaults]
format = "ogg"
bitrate = "96k"

[tools]
ffmpeg = "/opt/ffmpeg/bin/ffmpeg"
timeout_secs = 120

[network]
read_timeout_secs = 120
timeout_secs = 3600
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.defaults.format, "ogg");
        assert_eq!(config.defaults.bitrate, "96k");
        assert_eq!(
            config.tools.ffmpeg,
            std::path::PathBuf::from("/opt/ffmpeg/bin/ffmpeg")
        );
        assert_eq!(config.tools.timeout_secs, Some(120));
        assert_eq!(config.network.read_timeout_secs, 120);
        assert_eq!(config.network.timeout_secs, Some(3600));
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let config = load_config_file(file.path());
        assert!(matches!(config, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.bitrate = "256k".to_string();
        save_config(&config, &path).unwrap();

        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.defaults.bitrate, "256k");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[defaults]"));
        assert!(written.contains("[tools]"));
        assert!(written.contains("[network]"));
    }
}
