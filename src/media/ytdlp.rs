//! yt-dlp metadata adapter.
//!
//! yt-dlp resolves the best audio-only stream and its title; the bytes
//! themselves are fetched over HTTP by [`super::download_stream`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use super::{AudioSource, TrackInfo, build_client, download_stream};
use crate::config::RunSettings;
use crate::constants::{artifacts, tools};
use crate::entries::VideoId;
use crate::error::{Error, Result};

/// Subset of yt-dlp's `--dump-single-json` output.
#[derive(Debug, Deserialize)]
struct VideoInfo {
    title: Option<String>,
    url: Option<String>,
    ext: Option<String>,
    #[serde(default)]
    http_headers: BTreeMap<String, String>,
}

/// Parse yt-dlp JSON metadata for `id`.
///
/// # Errors
///
/// Returns [`Error::DownloadFailed`] if the JSON is invalid or carries no
/// direct stream URL.
pub fn parse_track_info(id: &VideoId, json: &[u8]) -> Result<TrackInfo> {
    let info: VideoInfo = serde_json::from_slice(json).map_err(|e| Error::DownloadFailed {
        id: id.to_string(),
        source: Box::new(e),
    })?;

    let stream_url = info.url.ok_or_else(|| Error::DownloadFailed {
        id: id.to_string(),
        source: "no direct audio-only stream available".into(),
    })?;

    Ok(TrackInfo {
        id: id.clone(),
        title: info.title.unwrap_or_default(),
        stream_url,
        extension: info
            .ext
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| artifacts::FALLBACK_EXTENSION.to_string()),
        http_headers: info.http_headers,
    })
}

/// Download collaborator backed by `yt-dlp` and `reqwest`.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
    user_agent: String,
    timeout: Option<Duration>,
    client: Client,
    show_progress: bool,
}

impl YtDlp {
    /// Build the adapter from run settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_settings(settings: &RunSettings) -> Result<Self> {
        let client = build_client(settings)?;

        Ok(Self {
            program: settings.yt_dlp.clone(),
            user_agent: settings.user_agent.clone(),
            timeout: settings.process_timeout,
            client,
            show_progress: settings.show_progress,
        })
    }

    /// Return the yt-dlp version, or `None` if it cannot be run.
    pub async fn version(&self) -> Option<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .ok()?;

        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn metadata_command(&self, id: &VideoId) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "--dump-single-json",
            "--no-playlist",
            "--no-warnings",
            "-f",
            tools::BEST_AUDIO_FORMAT,
            "--user-agent",
            self.user_agent.as_str(),
        ])
        .arg(id.watch_url())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
        cmd
    }
}

impl AudioSource for YtDlp {
    async fn fetch_track(&self, id: &VideoId) -> Result<TrackInfo> {
        let failed = |reason: String| Error::DownloadFailed {
            id: id.to_string(),
            source: reason.into(),
        };

        debug!("Fetching metadata for {}", id.watch_url());
        let mut cmd = self.metadata_command(id);
        let run = cmd.output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run)
                .await
                .map_err(|_| failed(format!("yt-dlp timed out after {}s", limit.as_secs())))?,
            None => run.await,
        }
        .map_err(|e| failed(format!("could not run {}: {e}", self.program.display())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!(
                "yt-dlp exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_track_info(id, &output.stdout)
    }

    async fn download(&self, track: &TrackInfo, dest: &Path) -> Result<()> {
        download_stream(&self.client, track, dest, self.show_progress).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entries::resolve_video_id;

    fn id() -> VideoId {
        resolve_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap()
    }

    #[test]
    fn test_parse_track_info() {
        let json = br#"{
            "id": "dQw4w9WgXcQ",
            "title": "Never Gonna Give You Up",
            "url": "https://rr1.example.googlevideo.com/videoplayback?itag=251",
            "ext": "webm",
            "http_headers": {"Accept": "*/*", "User-Agent": "Mozilla/5.0"},
            "duration": 213
        }"#;

        let track = parse_track_info(&id(), json).unwrap();
        assert_eq!(track.title, "Never Gonna Give You Up");
        assert_eq!(track.extension, "webm");
        assert!(track.stream_url.contains("itag=251"));
        assert_eq!(track.http_headers.get("Accept").map(String::as_str), Some("*/*"));
    }

    #[test]
    fn test_parse_track_info_without_url_fails() {
        let json = br#"{"title": "Merged formats only", "ext": "webm"}"#;
        assert!(matches!(
            parse_track_info(&id(), json),
            Err(Error::DownloadFailed { .. })
        ));
    }

    #[test]
    fn test_parse_track_info_rejects_garbage() {
        assert!(parse_track_info(&id(), b"ERROR: Video unavailable").is_err());
    }

    #[test]
    fn test_parse_track_info_sanitizes_extension() {
        let json = br#"{"title": "t", "url": "https://x", "ext": "../etc"}"#;
        let track = parse_track_info(&id(), json).unwrap();
        assert_eq!(track.extension, "audio");
    }
}
