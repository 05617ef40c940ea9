//! Configuration type definitions.

use crate::constants::{
    DEFAULT_BITRATE, DEFAULT_FORMAT, DEFAULT_OUTPUT, DEFAULT_WORKSPACE_DIR, network, tools,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default run settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// External tool settings.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Network settings.
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Default run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Output file name.
    pub output: PathBuf,

    /// Output format extension.
    pub format: String,

    /// Output audio bitrate.
    pub bitrate: String,

    /// Temporary workspace directory.
    pub workspace: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: DEFAULT_FORMAT.to_string(),
            bitrate: DEFAULT_BITRATE.to_string(),
            workspace: PathBuf::from(DEFAULT_WORKSPACE_DIR),
        }
    }
}

/// External tool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// ffmpeg executable name or path.
    pub ffmpeg: PathBuf,

    /// yt-dlp executable name or path.
    pub yt_dlp: PathBuf,

    /// Kill external processes that run longer than this many seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from(tools::FFMPEG),
            yt_dlp: PathBuf::from(tools::YT_DLP),
            timeout_secs: None,
        }
    }
}

/// Network settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// User-Agent header for metadata and stream requests.
    pub user_agent: String,

    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Abort a stream that delivers no bytes for this many seconds.
    pub read_timeout_secs: u64,

    /// Optional cap on a whole download, body included.
    pub timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            user_agent: network::USER_AGENT.to_string(),
            connect_timeout_secs: network::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: network::READ_TIMEOUT_SECS,
            timeout_secs: None,
        }
    }
}
