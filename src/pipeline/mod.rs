//! Clip processing pipeline.
//!
//! Entries flow through [`ClipPipeline`] one at a time via [`run_batch`];
//! the surviving clips are joined by [`merge_clips`].

mod batch;
mod clip;
mod merge;
mod workspace;

pub use batch::{BatchOutcome, EntryFailure, run_batch};
pub use clip::{ClipDescriptor, ClipPipeline, clip_range, sanitize_title};
pub use merge::{MergeReport, merge_clips};
pub use workspace::Workspace;
