//! Progress bar utilities for downloads and merging.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::constants::progress::COMPLETE;

/// Create a byte progress bar for an audio download.
///
/// Falls back to a spinner when the content length is unknown.
pub fn create_download_progress(total_bytes: u64, title: &str, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = if total_bytes == 0 {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        let pb = ProgressBar::new(total_bytes);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{bar:40.cyan/blue} {percent}% ({bytes}/{total_bytes})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ "),
        );
        pb
    };
    pb.set_message(format!("Downloading {title}..."));
    Some(pb)
}

/// Create a percentage progress bar for the merge.
pub fn create_merge_progress(enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = ProgressBar::new(u64::from(COMPLETE));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Merging: {bar:40.cyan/blue} {pos}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Set the absolute position of a progress bar.
pub fn set_position(pb: Option<&ProgressBar>, position: u64) {
    if let Some(pb) = pb {
        pb.set_position(position);
    }
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Finish a progress bar and remove it from the terminal.
pub fn finish_and_clear(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Format a duration in seconds as `H:MM:SS` or `M:SS`.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_progress_is_none() {
        assert!(create_download_progress(1024, "title", false).is_none());
        assert!(create_merge_progress(false).is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(150), "2:30");
        assert_eq!(format_duration(3723), "1:02:03");
    }
}
