//! Configuration validation.

use crate::cli::validators::{parse_bitrate, parse_format};
use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    validate_timeouts(config)?;
    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    parse_format(&defaults.format).map_err(|message| Error::ConfigValidation { message })?;
    parse_bitrate(&defaults.bitrate).map_err(|message| Error::ConfigValidation { message })?;

    if defaults.output.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output must not be empty".to_string(),
        });
    }

    if defaults.workspace.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "workspace must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate network and process timeouts.
fn validate_timeouts(config: &Config) -> Result<()> {
    if config.network.connect_timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            message: "network.connect_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.network.read_timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            message: "network.read_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.network.timeout_secs == Some(0) {
        return Err(Error::ConfigValidation {
            message: "network.timeout_secs must be at least 1 when set".to_string(),
        });
    }

    if config.tools.timeout_secs == Some(0) {
        return Err(Error::ConfigValidation {
            message: "tools.timeout_secs must be at least 1 when set".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_format() {
        let mut config = Config::default();
        config.defaults.format = "mp3; rm".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_bitrate() {
        let mut config = Config::default();
        config.defaults.bitrate = "fast".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_timeouts() {
        let mut config = Config::default();
        config.network.read_timeout_secs = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.network.timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.tools.timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }
}
