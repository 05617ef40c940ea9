//! Final merge of trimmed clips into one output file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{ClipDescriptor, Workspace};
use crate::config::RunSettings;
use crate::error::{Error, Result};
use crate::media::Transcoder;
use crate::output::progress::{
    create_merge_progress, finish_progress, format_duration, set_position,
};

/// Summary of a completed merge.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Written output file.
    pub output: PathBuf,
    /// Number of clips in the output.
    pub clip_count: usize,
    /// Total length of the output in seconds.
    pub total_secs: u64,
}

/// Remove whatever a failed merge left at `output`.
async fn discard_partial_output(output: &Path) {
    match tokio::fs::remove_file(output).await {
        Ok(()) => warn!("Removed incomplete output {}", output.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(
            "Warning: Could not remove incomplete output {}: {e}",
            output.display()
        ),
    }
}

/// Merge `clips` in order into `settings.output`.
///
/// A single clip is copied as-is. Clip artifacts are discarded after a
/// successful merge and the workspace is removed when empty. A failed
/// merge leaves the clips in place and removes any partial output.
///
/// # Errors
///
/// Returns [`Error::NothingToMerge`] for an empty clip list,
/// [`Error::OutputWrite`] if a single clip cannot be copied and
/// [`Error::MergeFailed`] if concatenation fails.
pub async fn merge_clips<T: Transcoder>(
    clips: Vec<ClipDescriptor>,
    settings: &RunSettings,
    transcoder: &T,
    workspace: &Workspace,
) -> Result<MergeReport> {
    if clips.is_empty() {
        return Err(Error::NothingToMerge);
    }

    let output = settings.output.clone();
    let total_secs: u64 = clips.iter().map(|c| c.duration_secs).sum();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::OutputWrite {
                path: output.clone(),
                source: e,
            })?;
    }

    if let [clip] = clips.as_slice() {
        info!("Only one clip, copying to {}", output.display());
        if let Err(e) = tokio::fs::copy(&clip.path, &output).await {
            discard_partial_output(&output).await;
            return Err(Error::OutputWrite {
                path: output,
                source: e,
            });
        }
    } else {
        info!(
            "Merging {} clips ({}) into {}",
            clips.len(),
            format_duration(total_secs),
            output.display()
        );

        let inputs: Vec<PathBuf> = clips.iter().map(|c| c.path.clone()).collect();
        let pb = create_merge_progress(settings.show_progress);
        let mut on_progress = |percent: u8| set_position(pb.as_ref(), u64::from(percent));

        let merged = transcoder
            .concat(
                &inputs,
                &output,
                &settings.bitrate,
                total_secs,
                &mut on_progress,
            )
            .await;

        if let Err(e) = merged {
            if let Some(pb) = pb {
                pb.abandon();
            }
            discard_partial_output(&output).await;
            warn!(
                "Keeping clips in {} after failed merge",
                workspace.dir().display()
            );
            return Err(e);
        }
        finish_progress(pb, "Merge complete");
    }

    for clip in &clips {
        workspace.discard(&clip.path);
    }
    workspace.cleanup();

    info!(
        "Merged audio saved as: {} ({})",
        output.display(),
        format_duration(total_secs)
    );

    Ok(MergeReport {
        output,
        clip_count: clips.len(),
        total_secs,
    })
}
