//! Entry parsing from input files and interactive sessions.
//!
//! Each entry line has the shape `<source> <start> <end>`; extra fields are
//! ignored. File mode silently drops lines with fewer than three fields,
//! interactive mode reports them and keeps prompting.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::config::RunSettings;
use crate::constants::ENTRY_FORMAT_HINT;
use crate::error::{Error, Result};

/// One requested clip.
///
/// Time tokens are kept raw; they are validated when the entry is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Source locator (a video URL).
    pub source: String,
    /// Raw start time token.
    pub start: String,
    /// Raw end time token.
    pub end: String,
}

/// Parse a single entry line.
///
/// Returns `None` when the line has fewer than three whitespace-separated
/// fields.
#[must_use]
pub fn parse_entry_line(line: &str) -> Option<Entry> {
    let mut fields = line.split_whitespace();
    let source = fields.next()?;
    let start = fields.next()?;
    let end = fields.next()?;

    Some(Entry {
        source: source.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Parse entry file contents, preserving line order.
///
/// Blank lines and lines with fewer than three fields produce no entry.
#[must_use]
pub fn parse_entry_text(text: &str) -> Vec<Entry> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(line_num, line)| {
            let entry = parse_entry_line(line);
            if entry.is_none() {
                debug!("Ignoring line {}: fewer than three fields", line_num + 1);
            }
            entry
        })
        .collect()
}

/// Read and parse an entry file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_entry_file(path: &Path) -> Result<Vec<Entry>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_entry_text(&text))
}

/// Prompt for entries until an empty line or end of input.
///
/// Lines with fewer than three fields print a hint to `output` and do not
/// end the session.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn read_interactive<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Vec<Entry>> {
    writeln!(
        output,
        "Enter YouTube URLs with start and end times (empty line to finish):"
    )?;
    writeln!(
        output,
        "Format: https://youtube.com/watch?v=VIDEOID 00:00 02:30"
    )?;

    let mut entries = Vec::new();
    let mut line = String::new();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }

        match parse_entry_line(trimmed) {
            Some(entry) => entries.push(entry),
            None => writeln!(output, "Invalid format. Please use: {ENTRY_FORMAT_HINT}")?,
        }
    }

    Ok(entries)
}

/// Collect entries for a run.
///
/// Uses the configured input file when one is set, otherwise prompts on the
/// terminal.
///
/// # Errors
///
/// Returns an error if the input file or the terminal cannot be read.
pub fn parse_entries(settings: &RunSettings) -> Result<Vec<Entry>> {
    match &settings.input {
        Some(path) => parse_entry_file(path),
        None => {
            let stdin = std::io::stdin();
            read_interactive(stdin.lock(), std::io::stdout())
        }
    }
}
