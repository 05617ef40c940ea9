//! Temporary workspace for intermediate audio artifacts.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::constants::artifacts;
use crate::entries::VideoId;
use crate::error::{Error, Result};

/// Directory holding full-length downloads and trimmed clips for one run.
///
/// Artifact names carry the entry index and the video identifier, so
/// entries never share a file even when they reference the same video.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    /// Open the workspace, creating the directory if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir).map_err(|e| Error::WorkspaceCreate {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Workspace directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path for the full-length download of entry `index`.
    #[must_use]
    pub fn full_artifact(&self, index: usize, id: &VideoId, extension: &str) -> PathBuf {
        self.artifact(index, id, artifacts::FULL_SUFFIX, extension)
    }

    /// Path for the trimmed clip of entry `index`.
    #[must_use]
    pub fn clip_artifact(&self, index: usize, id: &VideoId, format: &str) -> PathBuf {
        self.artifact(index, id, artifacts::CLIP_SUFFIX, format)
    }

    fn artifact(&self, index: usize, id: &VideoId, suffix: &str, extension: &str) -> PathBuf {
        self.dir.join(format!("{index:03}_{id}_{suffix}.{extension}"))
    }

    /// Delete an artifact. Failures are logged, never returned.
    pub fn discard(&self, path: &Path) {
        match std::fs::remove_file(path) {
            Ok(()) => debug!("Removed temporary file {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Warning: Could not delete temporary file {}: {e}",
                path.display()
            ),
        }
    }

    /// Remove the workspace directory if it is empty.
    ///
    /// A non-empty directory is left in place; removal failures are logged.
    pub fn cleanup(&self) {
        let is_empty = match std::fs::read_dir(&self.dir) {
            Ok(mut entries) => entries.next().is_none(),
            Err(e) => {
                warn!("Warning: Could not remove temporary directory: {e}");
                return;
            }
        };

        if !is_empty {
            debug!(
                "Temporary directory {} is not empty, leaving it in place",
                self.dir.display()
            );
            return;
        }

        if let Err(e) = std::fs::remove_dir(&self.dir) {
            warn!("Warning: Could not remove temporary directory: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entries::resolve_video_id;
    use tempfile::tempdir;

    fn id() -> VideoId {
        resolve_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap()
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let root = tempdir().unwrap();
        let dir = root.path().join("temp_audio_files");

        let workspace = Workspace::open(&dir).unwrap();
        assert!(workspace.dir().is_dir());

        // Opening an existing directory is fine.
        assert!(Workspace::open(&dir).is_ok());
    }

    #[test]
    fn test_artifact_names() {
        let root = tempdir().unwrap();
        let workspace = Workspace::open(root.path()).unwrap();

        let full = workspace.full_artifact(3, &id(), "webm");
        let clip = workspace.clip_artifact(3, &id(), "mp3");
        assert_eq!(full.file_name().unwrap(), "003_dQw4w9WgXcQ_full.webm");
        assert_eq!(clip.file_name().unwrap(), "003_dQw4w9WgXcQ_clip.mp3");
        assert_ne!(clip, workspace.clip_artifact(4, &id(), "mp3"));
    }

    #[test]
    fn test_cleanup_removes_empty_directory() {
        let root = tempdir().unwrap();
        let dir = root.path().join("ws");
        let workspace = Workspace::open(&dir).unwrap();

        let file = workspace.clip_artifact(1, &id(), "mp3");
        std::fs::write(&file, b"data").unwrap();

        workspace.cleanup();
        assert!(dir.exists(), "non-empty workspace must stay");

        workspace.discard(&file);
        assert!(!file.exists());

        workspace.cleanup();
        assert!(!dir.exists());
    }

    #[test]
    fn test_discard_missing_file_is_silent() {
        let root = tempdir().unwrap();
        let workspace = Workspace::open(root.path()).unwrap();
        workspace.discard(&root.path().join("never-created.mp3"));
    }
}
