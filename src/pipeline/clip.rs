//! Per-entry clip pipeline: resolve, download, trim.

use std::path::PathBuf;

use tracing::info;

use super::Workspace;
use crate::entries::{Entry, parse_time, resolve_video_id};
use crate::error::{Error, Result};
use crate::media::{AudioSource, Transcoder};
use crate::output::progress::format_duration;

/// A successfully trimmed clip awaiting merge.
#[derive(Debug, Clone)]
pub struct ClipDescriptor {
    /// 1-based position of the entry in the input.
    pub index: usize,
    /// Trimmed audio artifact inside the workspace.
    pub path: PathBuf,
    /// Sanitized video title.
    pub title: String,
    /// Raw start token from the entry.
    pub start: String,
    /// Raw end token from the entry.
    pub end: String,
    /// Clip length in seconds.
    pub duration_secs: u64,
}

/// Parse an entry's time tokens into `(start, duration)` seconds.
///
/// # Errors
///
/// Returns [`Error::MalformedTimeToken`] for unparsable tokens and
/// [`Error::InvalidTimeRange`] when end is not after start.
pub fn clip_range(start: &str, end: &str) -> Result<(u64, u64)> {
    let start_secs = parse_time(start)?;
    let end_secs = parse_time(end)?;

    if end_secs <= start_secs {
        return Err(Error::InvalidTimeRange {
            start: start_secs,
            end: end_secs,
        });
    }

    Ok((start_secs, end_secs - start_secs))
}

/// Keep word characters and whitespace only; fall back to `fallback` when
/// nothing is left.
#[must_use]
pub fn sanitize_title(title: &str, fallback: &str) -> String {
    let clean: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    let clean = clean.trim();

    if clean.is_empty() {
        fallback.to_string()
    } else {
        clean.to_string()
    }
}

/// Turns one [`Entry`] into a [`ClipDescriptor`].
pub struct ClipPipeline<'a, S, T> {
    source: &'a S,
    transcoder: &'a T,
    workspace: &'a Workspace,
    format: &'a str,
}

impl<'a, S: AudioSource, T: Transcoder> ClipPipeline<'a, S, T> {
    /// Create a pipeline writing clips in `format` to `workspace`.
    pub const fn new(
        source: &'a S,
        transcoder: &'a T,
        workspace: &'a Workspace,
        format: &'a str,
    ) -> Self {
        Self {
            source,
            transcoder,
            workspace,
            format,
        }
    }

    /// Process entry `index` (1-based).
    ///
    /// Intermediate artifacts are removed on failure as well as on success,
    /// except for the returned clip.
    ///
    /// # Errors
    ///
    /// Returns the first failure among source resolution, time validation,
    /// download and trimming.
    pub async fn process(&self, index: usize, entry: &Entry) -> Result<ClipDescriptor> {
        let id = resolve_video_id(&entry.source).ok_or_else(|| Error::UnresolvedSource {
            source_url: entry.source.clone(),
        })?;

        let (start_secs, duration_secs) = clip_range(&entry.start, &entry.end)?;

        let track = self.source.fetch_track(&id).await?;
        let title = sanitize_title(&track.title, id.as_str());
        info!("Title: {title}");

        let full_path = self.workspace.full_artifact(index, &id, &track.extension);
        let clip_path = self.workspace.clip_artifact(index, &id, self.format);

        info!("Downloading audio...");
        if let Err(e) = self.source.download(&track, &full_path).await {
            self.workspace.discard(&full_path);
            return Err(e);
        }

        info!(
            "Extracting clip {}-{} ({})...",
            format_duration(start_secs),
            format_duration(start_secs + duration_secs),
            format_duration(duration_secs)
        );
        let trimmed = self
            .transcoder
            .trim(&full_path, &clip_path, start_secs, duration_secs)
            .await;
        self.workspace.discard(&full_path);

        if let Err(e) = trimmed {
            self.workspace.discard(&clip_path);
            return Err(e);
        }

        Ok(ClipDescriptor {
            index,
            path: clip_path,
            title,
            start: entry.start.clone(),
            end: entry.end.clone(),
            duration_secs,
        })
    }
}
