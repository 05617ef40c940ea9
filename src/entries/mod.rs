//! Entry input handling.
//!
//! Reads requested clips from a file or an interactive session, converts
//! human time notation to seconds, and extracts canonical video identifiers
//! from the many URL shapes users paste.

mod parser;
mod resolver;
mod time;

pub use parser::{
    Entry, parse_entries, parse_entry_file, parse_entry_line, parse_entry_text, read_interactive,
};
pub use resolver::{VideoId, resolve_video_id};
pub use time::parse_time;
