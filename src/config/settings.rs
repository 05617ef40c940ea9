//! Resolved per-run settings.
//!
//! Command-line flags take precedence over the config file, which takes
//! precedence over built-in defaults. The result is passed explicitly to
//! every stage of a run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::MergeArgs;
use crate::cli::validators::parse_format;
use crate::config::Config;

/// Explicit configuration for one merge run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Entry file; `None` selects interactive input.
    pub input: Option<PathBuf>,
    /// Final output path, already carrying the format extension.
    pub output: PathBuf,
    /// Output format extension (also used for trimmed clips).
    pub format: String,
    /// Output audio bitrate, passed verbatim to ffmpeg.
    pub bitrate: String,
    /// Temporary workspace directory.
    pub workspace: PathBuf,
    /// ffmpeg executable.
    pub ffmpeg: PathBuf,
    /// yt-dlp executable.
    pub yt_dlp: PathBuf,
    /// Timeout for external processes.
    pub process_timeout: Option<Duration>,
    /// User-Agent header for downloads.
    pub user_agent: String,
    /// HTTP connection timeout.
    pub connect_timeout: Duration,
    /// Longest a download may go without receiving bytes.
    pub read_timeout: Duration,
    /// Optional cap on a whole download.
    pub request_timeout: Option<Duration>,
    /// Whether to draw progress bars.
    pub show_progress: bool,
}

impl RunSettings {
    /// Merge command-line arguments over the loaded configuration.
    #[must_use]
    pub fn resolve(args: &MergeArgs, config: &Config) -> Self {
        // Config values skip clap's value parser; normalize them the same way.
        let raw_format = args
            .format
            .clone()
            .unwrap_or_else(|| config.defaults.format.clone());
        let format = parse_format(&raw_format).unwrap_or(raw_format);
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| config.defaults.output.clone());

        Self {
            input: args.input.clone(),
            output: output_path_for(&output, &format),
            bitrate: args
                .bitrate
                .clone()
                .unwrap_or_else(|| config.defaults.bitrate.clone()),
            format,
            workspace: args
                .workspace
                .clone()
                .unwrap_or_else(|| config.defaults.workspace.clone()),
            ffmpeg: args
                .ffmpeg
                .clone()
                .unwrap_or_else(|| config.tools.ffmpeg.clone()),
            yt_dlp: args
                .yt_dlp
                .clone()
                .unwrap_or_else(|| config.tools.yt_dlp.clone()),
            process_timeout: config.tools.timeout_secs.map(Duration::from_secs),
            user_agent: config.network.user_agent.clone(),
            connect_timeout: Duration::from_secs(config.network.connect_timeout_secs),
            read_timeout: Duration::from_secs(config.network.read_timeout_secs),
            request_timeout: config.network.timeout_secs.map(Duration::from_secs),
            show_progress: !args.quiet && !args.no_progress,
        }
    }
}

/// Append `.<format>` to `output` unless it already ends with it.
#[must_use]
pub fn output_path_for(output: &Path, format: &str) -> PathBuf {
    let suffix = format!(".{format}");
    if output.to_string_lossy().ends_with(&suffix) {
        output.to_path_buf()
    } else {
        let mut name = output.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }
}
