//! Error types for youtube-audio-merger.

use std::path::PathBuf;

/// Result type alias for youtube-audio-merger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for youtube-audio-merger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read the entry input file.
    #[error("failed to read input file '{path}'")]
    InputRead {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// No video identifier could be extracted from the source locator.
    #[error("could not extract video ID from '{source_url}'")]
    UnresolvedSource {
        /// The source locator as given in the entry.
        source_url: String,
    },

    /// Time token is not `S`, `M:S` or `H:M:S` with numeric parts.
    #[error("malformed time token '{token}' (expected SS, MM:SS or HH:MM:SS)")]
    MalformedTimeToken {
        /// The offending token.
        token: String,
    },

    /// End time is not after start time.
    #[error("invalid time range: end ({end}s) must be after start ({start}s)")]
    InvalidTimeRange {
        /// Start offset in seconds.
        start: u64,
        /// End offset in seconds.
        end: u64,
    },

    /// Metadata lookup or audio download failed.
    #[error("failed to download audio for '{id}'")]
    DownloadFailed {
        /// Video identifier being downloaded.
        id: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Extracting the clip from the full-length audio failed.
    #[error("failed to extract clip from '{path}'")]
    TrimFailed {
        /// Full-length artifact being trimmed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Merging clips into the final output failed.
    #[error("failed to merge clips into '{path}'")]
    MergeFailed {
        /// Output path of the merge.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Merge stage was invoked without any clips.
    #[error("no clips to merge")]
    NothingToMerge,

    /// An external tool is not installed or not runnable.
    #[error("{tool} is not installed or not in PATH: {reason}")]
    CollaboratorUnavailable {
        /// Name or path of the tool.
        tool: String,
        /// Why the tool could not be used.
        reason: String,
    },

    /// Failed to create the temporary workspace directory.
    #[error("failed to create workspace directory '{path}'")]
    WorkspaceCreate {
        /// Path to the workspace directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the final output file.
    #[error("failed to write output file '{path}'")]
    OutputWrite {
        /// Path to the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::MalformedTimeToken {
            token: "1:2:3:4".to_string(),
        };
        assert!(err.to_string().contains("1:2:3:4"));

        let err = Error::InvalidTimeRange { start: 30, end: 10 };
        assert_eq!(
            err.to_string(),
            "invalid time range: end (10s) must be after start (30s)"
        );
    }
}
