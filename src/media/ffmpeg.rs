//! ffmpeg process adapter.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use super::Transcoder;
use crate::constants::progress::COMPLETE;
use crate::error::{Error, Result};

/// Runs the `ffmpeg` executable.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl Ffmpeg {
    /// Create an adapter for the given executable.
    #[must_use]
    pub const fn new(program: PathBuf, timeout: Option<Duration>) -> Self {
        Self { program, timeout }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.stdin(Stdio::null()).kill_on_drop(true);
        cmd
    }

    fn tool_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Await `fut`, failing with a description once the timeout elapses.
    async fn bounded<T>(
        &self,
        fut: impl Future<Output = std::io::Result<T>>,
    ) -> std::result::Result<T, String> {
        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, fut).await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(_) => Err(format!("timed out after {}s", limit.as_secs())),
            },
            None => fut.await.map_err(|e| e.to_string()),
        }
    }
}

impl Transcoder for Ffmpeg {
    async fn check_available(&self) -> Result<String> {
        let unavailable = |reason: String| Error::CollaboratorUnavailable {
            tool: self.tool_name(),
            reason,
        };

        let output = self
            .command()
            .arg("-version")
            .output()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !output.status.success() {
            return Err(unavailable(format!("-version exited with {}", output.status)));
        }

        let banner = String::from_utf8_lossy(&output.stdout);
        Ok(banner.lines().next().unwrap_or_default().to_string())
    }

    async fn trim(
        &self,
        input: &Path,
        output: &Path,
        start_secs: u64,
        duration_secs: u64,
    ) -> Result<()> {
        let args = trim_args(input, output, start_secs, duration_secs);
        debug!("Running {} {:?}", self.tool_name(), args);

        let result = self
            .bounded(
                self.command()
                    .args(&args)
                    .stdout(Stdio::null())
                    .stderr(Stdio::piped())
                    .output(),
            )
            .await
            .and_then(|out| check_status(out.status, &String::from_utf8_lossy(&out.stderr)));

        result.map_err(|reason| Error::TrimFailed {
            path: input.to_path_buf(),
            source: reason.into(),
        })
    }

    async fn concat(
        &self,
        inputs: &[PathBuf],
        output: &Path,
        bitrate: &str,
        expected_secs: u64,
        on_progress: &mut dyn FnMut(u8),
    ) -> Result<()> {
        let merge_failed = |reason: String| Error::MergeFailed {
            path: output.to_path_buf(),
            source: reason.into(),
        };

        let args = concat_args(inputs, output, bitrate);
        debug!("Running {} {:?}", self.tool_name(), args);

        let mut child = self
            .command()
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| merge_failed(e.to_string()))?;

        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| merge_failed("stderr not captured".to_string()))?;

        let run = async {
            let mut lines = BufReader::new(stderr).lines();
            let mut diagnostics = Vec::new();
            while let Some(line) = lines.next_line().await? {
                match parse_progress_line(&line, expected_secs) {
                    Some(percent) => on_progress(percent),
                    None if !line.contains('=') => diagnostics.push(line),
                    None => {}
                }
            }
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((status, diagnostics.join("\n")))
        };

        let (status, diagnostics) = self.bounded(run).await.map_err(merge_failed)?;
        check_status(status, &diagnostics).map_err(merge_failed)
    }
}

fn check_status(status: ExitStatus, stderr: &str) -> std::result::Result<(), String> {
    if status.success() {
        return Ok(());
    }
    let detail = stderr.trim();
    if detail.is_empty() {
        Err(format!("ffmpeg exited with {status}"))
    } else {
        Err(format!("ffmpeg exited with {status}: {detail}"))
    }
}

/// Build the argument list for extracting a clip.
#[must_use]
pub fn trim_args(input: &Path, output: &Path, start_secs: u64, duration_secs: u64) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-v".into(),
        "error".into(),
        "-ss".into(),
        start_secs.to_string().into(),
        "-i".into(),
        input.into(),
        "-t".into(),
        duration_secs.to_string().into(),
        "-vn".into(),
        output.into(),
    ]
}

/// Build the argument list for concatenating clips.
///
/// Uses the `concat` audio filter so inputs with differing codecs or
/// sample rates still merge.
#[must_use]
pub fn concat_args(inputs: &[PathBuf], output: &Path, bitrate: &str) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-y".into(),
        "-v".into(),
        "error".into(),
        "-progress".into(),
        "pipe:2".into(),
    ];

    for input in inputs {
        args.push("-i".into());
        args.push(input.into());
    }

    let streams: String = (0..inputs.len()).map(|i| format!("[{i}:a]")).collect();
    args.push("-filter_complex".into());
    args.push(format!("{streams}concat=n={}:v=0:a=1[out]", inputs.len()).into());
    args.push("-map".into());
    args.push("[out]".into());
    args.push("-b:a".into());
    args.push(bitrate.into());
    args.push(output.into());

    args
}

/// Convert one `-progress` line to a percentage of `expected_secs`.
///
/// `out_time_us` and `out_time_ms` both carry microseconds. Returns
/// `None` for unrelated lines or when the expected length is unknown.
#[must_use]
pub fn parse_progress_line(line: &str, expected_secs: u64) -> Option<u8> {
    let (key, value) = line.trim().split_once('=')?;
    match key {
        "progress" if value == "end" => Some(COMPLETE),
        "out_time_us" | "out_time_ms" if expected_secs > 0 => {
            let micros: u64 = value.parse().ok()?;
            let percent = micros / expected_secs.saturating_mul(10_000);
            Some(u8::try_from(percent.min(u64::from(COMPLETE))).unwrap_or(COMPLETE))
        }
        _ => None,
    }
}
