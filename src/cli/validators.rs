//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing and config checks.

/// Parse and validate an output format extension (e.g. `mp3`, `m4a`).
pub fn parse_format(s: &str) -> Result<String, String> {
    let format = s.trim_start_matches('.');

    if format.is_empty() {
        return Err("format must not be empty".to_string());
    }

    if !format.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!(
            "format must contain only letters and digits, got '{s}'"
        ));
    }

    Ok(format.to_string())
}

/// Parse and validate an audio bitrate in ffmpeg notation (`128k`, `1.5M`, `96000`).
///
/// Accepts a decimal mantissa with an optional `k`/`M` suffix. The value is
/// returned unchanged so ffmpeg sees exactly what the user typed.
pub fn parse_bitrate(s: &str) -> Result<String, String> {
    let mantissa = s.strip_suffix(['k', 'K', 'm', 'M']).unwrap_or(s);
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    let has_dot = mantissa.contains('.');

    if whole.is_empty()
        || !is_digits(whole)
        || !is_digits(fraction)
        || (has_dot && fraction.is_empty())
    {
        return Err(format!(
            "'{s}' is not a valid bitrate (expected e.g. 128k, 1.5M or 96000)"
        ));
    }

    if whole.chars().chain(fraction.chars()).all(|c| c == '0') {
        return Err(format!("bitrate must be greater than zero, got '{s}'"));
    }

    Ok(s.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_valid() {
        assert_eq!(parse_format("mp3").unwrap(), "mp3");
        assert_eq!(parse_format("m4a").unwrap(), "m4a");
        assert_eq!(parse_format(".ogg").unwrap(), "ogg");
    }

    #[test]
    fn test_parse_format_invalid() {
        assert!(parse_format("").is_err());
        assert!(parse_format(".").is_err());
        assert!(parse_format("mp3/x").is_err());
        assert!(parse_format("tar.gz").is_err());
    }

    #[test]
    fn test_parse_bitrate_valid() {
        assert_eq!(parse_bitrate("128k").unwrap(), "128k");
        assert_eq!(parse_bitrate("320K").unwrap(), "320K");
        assert_eq!(parse_bitrate("1M").unwrap(), "1M");
        assert_eq!(parse_bitrate("96000").unwrap(), "96000");
        assert_eq!(parse_bitrate("1.5M").unwrap(), "1.5M");
        assert_eq!(parse_bitrate("12.5k").unwrap(), "12.5k");
    }

    #[test]
    fn test_parse_bitrate_invalid() {
        assert!(parse_bitrate("").is_err());
        assert!(parse_bitrate("k").is_err());
        assert!(parse_bitrate("fast").is_err());
        assert!(parse_bitrate("0k").is_err());
        assert!(parse_bitrate("0.0M").is_err());
        assert!(parse_bitrate("1.k").is_err());
        assert!(parse_bitrate(".5M").is_err());
        assert!(parse_bitrate("1.2.3k").is_err());
        assert!(parse_bitrate("-128k").is_err());
    }
}
