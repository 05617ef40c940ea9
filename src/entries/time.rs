//! Time token parsing.

use crate::error::{Error, Result};

/// Parse a time token into whole seconds.
///
/// Accepted shapes:
/// - `SS` (bare seconds)
/// - `MM:SS`
/// - `HH:MM:SS`
///
/// Every segment must be a non-empty run of ASCII digits. Segments are not
/// range-checked, so `1:75` is 135 seconds.
///
/// # Errors
///
/// Returns [`Error::MalformedTimeToken`] for any other shape, including
/// empty segments, signs, fractions and values that overflow `u64`.
pub fn parse_time(token: &str) -> Result<u64> {
    let malformed = || Error::MalformedTimeToken {
        token: token.to_string(),
    };

    let parts = token
        .split(':')
        .map(parse_segment)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(malformed)?;

    let seconds = match parts.as_slice() {
        [s] => Some(*s),
        [m, s] => m.checked_mul(60).and_then(|m| m.checked_add(*s)),
        [h, m, s] => h
            .checked_mul(3600)
            .and_then(|h| m.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(*s)),
        _ => None,
    };

    seconds.ok_or_else(malformed)
}

fn parse_segment(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_seconds() {
        assert_eq!(parse_time("02:30").unwrap(), 150);
        assert_eq!(parse_time("0:00").unwrap(), 0);
        assert_eq!(parse_time("1:75").unwrap(), 135);
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(parse_time("01:02:03").unwrap(), 3723);
        assert_eq!(parse_time("10:00:00").unwrap(), 36000);
    }

    #[test]
    fn test_bare_seconds() {
        assert_eq!(parse_time("45").unwrap(), 45);
        assert_eq!(parse_time("0").unwrap(), 0);
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        assert!(matches!(
            parse_time("1:2:3:4"),
            Err(Error::MalformedTimeToken { .. })
        ));
    }

    #[test]
    fn test_rejects_non_numeric() {
        for token in ["", "abc", "1:xx", ":30", "1:", "+5", "-5", "1.5", " 5"] {
            assert!(
                matches!(parse_time(token), Err(Error::MalformedTimeToken { .. })),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_time("99999999999999999999").is_err());
        assert!(parse_time("18446744073709551615:00").is_err());
    }
}
