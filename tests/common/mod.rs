//! In-process stand-ins for yt-dlp and ffmpeg.

#![allow(dead_code, clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use youtube_audio_merger::config::RunSettings;
use youtube_audio_merger::entries::VideoId;
use youtube_audio_merger::media::{AudioSource, TrackInfo, Transcoder};
use youtube_audio_merger::{Error, Result};

/// Audio source that writes the video id as the "audio" bytes.
#[derive(Default)]
pub struct FakeSource {
    /// Ids whose metadata lookup fails.
    pub unavailable: HashSet<String>,
    /// Ids whose download fails after writing partial data.
    pub broken_stream: HashSet<String>,
}

impl AudioSource for FakeSource {
    async fn fetch_track(&self, id: &VideoId) -> Result<TrackInfo> {
        if self.unavailable.contains(id.as_str()) {
            return Err(Error::DownloadFailed {
                id: id.to_string(),
                source: "Video unavailable".into(),
            });
        }
        Ok(TrackInfo {
            id: id.clone(),
            title: format!("Title: {id}!"),
            stream_url: format!("https://media.invalid/{id}"),
            extension: "webm".to_string(),
            http_headers: BTreeMap::new(),
        })
    }

    async fn download(&self, track: &TrackInfo, dest: &Path) -> Result<()> {
        std::fs::write(dest, track.id.as_str()).unwrap();
        if self.broken_stream.contains(track.id.as_str()) {
            return Err(Error::DownloadFailed {
                id: track.id.to_string(),
                source: "connection reset".into(),
            });
        }
        Ok(())
    }
}

/// Transcoder that copies bytes and records every call.
#[derive(Default)]
pub struct FakeTranscoder {
    /// `(input, start, duration)` for each trim.
    pub trims: RefCell<Vec<(PathBuf, u64, u64)>>,
    /// Inputs of each concat call.
    pub concats: RefCell<Vec<Vec<PathBuf>>>,
    /// Fail every concat.
    pub fail_concat: bool,
}

impl Transcoder for FakeTranscoder {
    async fn check_available(&self) -> Result<String> {
        Ok("fake ffmpeg".to_string())
    }

    async fn trim(
        &self,
        input: &Path,
        output: &Path,
        start_secs: u64,
        duration_secs: u64,
    ) -> Result<()> {
        self.trims
            .borrow_mut()
            .push((input.to_path_buf(), start_secs, duration_secs));
        let data = std::fs::read(input).unwrap();
        std::fs::write(output, [data.as_slice(), b"|clip"].concat()).unwrap();
        Ok(())
    }

    async fn concat(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        _bitrate: &str,
        _expected_secs: u64,
        on_progress: &mut dyn FnMut(u8),
    ) -> Result<()> {
        self.concats.borrow_mut().push(inputs.to_vec());
        if self.fail_concat {
            // Like ffmpeg, leave a truncated file behind.
            std::fs::write(output, b"partial").unwrap();
            return Err(Error::MergeFailed {
                path: output.to_path_buf(),
                source: "ffmpeg exited with 1".into(),
            });
        }

        let mut merged = Vec::new();
        for input in inputs {
            merged.extend(std::fs::read(input).unwrap());
            merged.push(b'\n');
        }
        std::fs::write(output, merged).unwrap();
        on_progress(50);
        on_progress(100);
        Ok(())
    }
}

/// Settings for a run writing to `output` with `workspace` as scratch space.
pub fn settings(output: &Path, workspace: &Path) -> RunSettings {
    RunSettings {
        input: None,
        output: output.to_path_buf(),
        format: "mp3".to_string(),
        bitrate: "128k".to_string(),
        workspace: workspace.to_path_buf(),
        ffmpeg: PathBuf::from("ffmpeg"),
        yt_dlp: PathBuf::from("yt-dlp"),
        process_timeout: None,
        user_agent: "test-agent".to_string(),
        connect_timeout: Duration::from_secs(30),
        read_timeout: Duration::from_secs(60),
        request_timeout: None,
        show_progress: false,
    }
}
