//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "youtube-audio-merger";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "merged_audio.mp3";

/// Default output container/codec extension.
pub const DEFAULT_FORMAT: &str = "mp3";

/// Default output audio bitrate, passed verbatim to ffmpeg.
pub const DEFAULT_BITRATE: &str = "128k";

/// Default temporary workspace directory, relative to the working directory.
pub const DEFAULT_WORKSPACE_DIR: &str = "temp_audio_files";

/// Entry line format shown to users.
pub const ENTRY_FORMAT_HINT: &str = "URL START_TIME END_TIME";

/// External tool defaults.
pub mod tools {
    /// Default ffmpeg executable.
    pub const FFMPEG: &str = "ffmpeg";

    /// Default yt-dlp executable.
    pub const YT_DLP: &str = "yt-dlp";

    /// yt-dlp format selector for the best audio-only stream.
    pub const BEST_AUDIO_FORMAT: &str = "bestaudio";
}

/// Network defaults for audio stream downloads.
pub mod network {
    /// Client identity sent with metadata and stream requests.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

    /// Connection timeout in seconds.
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;

    /// Seconds a stream may go without delivering any bytes.
    ///
    /// Throttled audio streams stay slow for a long time without stalling,
    /// so only idle time is bounded by default.
    pub const READ_TIMEOUT_SECS: u64 = 60;
}

/// YouTube identifier constants.
pub mod youtube {
    /// Length of a canonical video identifier.
    pub const ID_LEN: usize = 11;

    /// Base of the canonical watch-page URL.
    pub const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
}

/// Temporary artifact file name parts.
pub mod artifacts {
    /// Suffix of the full-length downloaded audio.
    pub const FULL_SUFFIX: &str = "full";

    /// Suffix of the trimmed clip.
    pub const CLIP_SUFFIX: &str = "clip";

    /// Extension used when the collaborator reports none.
    pub const FALLBACK_EXTENSION: &str = "audio";
}

/// Merge progress percentage bounds.
pub mod progress {
    /// Completed percentage.
    pub const COMPLETE: u8 = 100;
}
