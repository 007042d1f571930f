//! Structured session logging.
//!
//! Console output goes through `tracing_subscriber::fmt`. With a log
//! directory, every event is also appended to a per-day, per-window JSONL
//! file:
//!
//! ```text
//! logs/raw/2026-10-17_main.jsonl
//! logs/raw/2026-10-17_second.jsonl
//! ```
//!
//! ```bash
//! # Every hover that pushed neighbours
//! jq 'select(.message == "Applied hover repulsion")' logs/raw/*.jsonl
//! ```

mod entry;
mod layer;
mod writer;

pub use entry::{LogRecord, Severity};
pub use layer::{LogSetup, SessionLayer, DEFAULT_FILTER};
pub use writer::{load_session, SessionLog};
