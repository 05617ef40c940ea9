//! youtube-audio-merger - clip and join audio from YouTube videos.
//!
//! Each entry names a video and a time range. The audio is downloaded,
//! trimmed to the range and the resulting clips are merged in input order.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod entries;
pub mod error;
pub mod media;
pub mod output;
pub mod pipeline;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{
    Config, RunSettings, config_file_path, load_default_config, save_default_config,
    validate_config,
};
use media::{Ffmpeg, Transcoder, YtDlp};
use pipeline::{ClipPipeline, Workspace, merge_clips, run_batch};
use tracing::{debug, info, warn};

pub use error::{Error, Result};

/// Main entry point for the youtube-audio-merger CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.merge.verbose, cli.merge.quiet);

    let config = load_default_config()?;

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    validate_config(&config)?;
    let settings = RunSettings::resolve(&cli.merge, &config);
    debug!("Run settings: {settings:?}");

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    runtime.block_on(merge_entries(&settings))
}

/// Run the whole pipeline: pre-flight, entry input, batch and merge.
async fn merge_entries(settings: &RunSettings) -> Result<()> {
    let ffmpeg = Ffmpeg::new(settings.ffmpeg.clone(), settings.process_timeout);
    let banner = ffmpeg.check_available().await?;
    debug!("Using {banner}");

    let source = YtDlp::from_settings(settings)?;
    match source.version().await {
        Some(version) => debug!("Using yt-dlp {version}"),
        None => warn!(
            "Could not run {}; downloads will fail until yt-dlp is installed",
            settings.yt_dlp.display()
        ),
    }

    let workspace = Workspace::open(&settings.workspace)?;

    let entries = entries::parse_entries(settings)?;
    if entries.is_empty() {
        info!("No valid entries found. Exiting.");
        workspace.cleanup();
        return Ok(());
    }

    let pipeline = ClipPipeline::new(&source, &ffmpeg, &workspace, &settings.format);
    let outcome = run_batch(&entries, &pipeline).await;

    if outcome.clips.is_empty() {
        info!("No clips were successfully processed. Exiting.");
        workspace.cleanup();
        return Ok(());
    }

    let report = merge_clips(outcome.clips, settings, &ffmpeg, &workspace).await?;
    debug!(
        "Wrote {} clip(s) to {}",
        report.clip_count,
        report.output.display()
    );

    info!("Done!");
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // HTTP client internals stay quiet unless fully verbose.
    let filter_str = if quiet {
        "warn".to_string()
    } else {
        match verbose {
            0 => "info,reqwest=warn,hyper=warn,hyper_util=warn".to_string(),
            1 => "debug,reqwest=warn,hyper=warn,hyper_util=warn".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
