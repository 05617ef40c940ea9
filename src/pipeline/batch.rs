//! Sequential batch processing of entries.

use std::time::Instant;

use tracing::{error, info};

use super::{ClipDescriptor, ClipPipeline};
use crate::entries::Entry;
use crate::error::Error;
use crate::media::{AudioSource, Transcoder};

/// An entry that produced no clip.
#[derive(Debug)]
pub struct EntryFailure {
    /// 1-based position of the entry.
    pub index: usize,
    /// Source locator as given.
    pub source: String,
    /// Why processing stopped.
    pub error: Error,
}

/// Result of processing every entry.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Clips in input order.
    pub clips: Vec<ClipDescriptor>,
    /// Failed entries in input order.
    pub failures: Vec<EntryFailure>,
}

/// Process `entries` one at a time, in order.
///
/// A failing entry is logged and skipped; it never aborts the batch.
pub async fn run_batch<S: AudioSource, T: Transcoder>(
    entries: &[Entry],
    pipeline: &ClipPipeline<'_, S, T>,
) -> BatchOutcome {
    let start = Instant::now();
    let total = entries.len();
    let mut outcome = BatchOutcome::default();

    for (i, entry) in entries.iter().enumerate() {
        let index = i + 1;
        info!("Processing ({index}/{total}): {}", entry.source);

        match pipeline.process(index, entry).await {
            Ok(clip) => outcome.clips.push(clip),
            Err(e) => {
                error!("Error processing entry {index} ({}): {e}", entry.source);
                outcome.failures.push(EntryFailure {
                    index,
                    source: entry.source.clone(),
                    error: e,
                });
            }
        }
    }

    info!(
        "Processed {} entries in {:.1}s: {} clip(s), {} failed",
        total,
        start.elapsed().as_secs_f64(),
        outcome.clips.len(),
        outcome.failures.len()
    );

    outcome
}
