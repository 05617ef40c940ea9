//! CLI argument definitions.

use crate::cli::validators::{parse_bitrate, parse_format};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Download and merge audio from YouTube videos with specific time ranges.
#[derive(Debug, Parser)]
#[command(name = "youtube-audio-merger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the merge run.
    #[command(flatten)]
    pub merge: MergeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for a merge run.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Path to input file with YouTube URLs and timestamps (interactive if omitted).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output filename [default: merged_audio.mp3].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output audio format [default: mp3].
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<String>,

    /// Output audio bitrate [default: 128k].
    #[arg(short, long, value_parser = parse_bitrate)]
    pub bitrate: Option<String>,

    /// Directory for temporary audio files [default: temp_audio_files].
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// ffmpeg executable to use.
    #[arg(long, env = "YAM_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// yt-dlp executable to use.
    #[arg(long = "yt-dlp", env = "YAM_YT_DLP")]
    pub yt_dlp: Option<PathBuf>,

    /// Disable progress bars.
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
