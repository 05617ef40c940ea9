//! External media collaborators.
//!
//! Downloading and transcoding are delegated to `yt-dlp` (plus a direct
//! HTTP stream) and `ffmpeg`. The pipeline only talks to them through the
//! [`AudioSource`] and [`Transcoder`] traits.

mod download;
mod ffmpeg;
mod ytdlp;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::entries::VideoId;
use crate::error::Result;

pub use download::{build_client, download_stream};
pub use ffmpeg::{Ffmpeg, concat_args, parse_progress_line, trim_args};
pub use ytdlp::{YtDlp, parse_track_info};

/// Metadata for the best audio-only stream of a video.
#[derive(Debug, Clone)]
pub struct TrackInfo {
    /// Canonical video identifier.
    pub id: VideoId,
    /// Video title as reported by the platform.
    pub title: String,
    /// Direct URL of the audio stream.
    pub stream_url: String,
    /// Container extension of the audio stream (e.g. `webm`, `m4a`).
    pub extension: String,
    /// Extra HTTP headers the stream host expects.
    pub http_headers: BTreeMap<String, String>,
}

/// Download collaborator.
#[allow(async_fn_in_trait)]
pub trait AudioSource {
    /// Look up the title and best audio-only stream for a video.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DownloadFailed`] if the lookup fails.
    async fn fetch_track(&self, id: &VideoId) -> Result<TrackInfo>;

    /// Stream the audio bytes of `track` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DownloadFailed`] on any stream or write error.
    /// `dest` may hold partial data afterwards.
    async fn download(&self, track: &TrackInfo, dest: &Path) -> Result<()>;
}

/// Transcode collaborator.
#[allow(async_fn_in_trait)]
pub trait Transcoder {
    /// Confirm the transcoder can run, returning its version banner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CollaboratorUnavailable`] if it cannot run.
    async fn check_available(&self) -> Result<String>;

    /// Write `duration_secs` of `input` starting at `start_secs` to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TrimFailed`] if the clip cannot be produced.
    async fn trim(&self, input: &Path, output: &Path, start_secs: u64, duration_secs: u64)
    -> Result<()>;

    /// Concatenate `inputs` in order into `output` at `bitrate`.
    ///
    /// `on_progress` receives coarse percentages (0-100) relative to
    /// `expected_secs` of output audio.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MergeFailed`] if the merge fails.
    async fn concat(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        bitrate: &str,
        expected_secs: u64,
        on_progress: &mut dyn FnMut(u8),
    ) -> Result<()>;
}
