//! Session log file: `<logs_dir>/raw/<date>_<window>.jsonl`, append only.

use std::fs::{self, File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::LogRecord;
use crate::error::HubResult;

pub struct SessionLog {
    window: String,
    path: PathBuf,
    out: Mutex<LineWriter<File>>,
}

impl SessionLog {
    /// Open (or continue) today's file for `window`.
    pub fn open(logs_dir: &Path, window: &str) -> HubResult<Self> {
        let raw = logs_dir.join("raw");
        fs::create_dir_all(&raw)?;

        let day = chrono::Local::now().format("%Y-%m-%d");
        let path = raw.join(format!("{day}_{window}.jsonl"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            window: window.to_owned(),
            path,
            out: Mutex::new(LineWriter::new(file)),
        })
    }

    pub fn window(&self) -> &str {
        &self.window
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a complete line.
    pub fn append(&self, record: &LogRecord) -> HubResult<()> {
        let mut line = record.to_line()?;
        line.push('\n');
        self.out.lock().write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Load every record of a session file, skipping lines that do not parse.
pub fn load_session(path: &Path) -> HubResult<Vec<LogRecord>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| LogRecord::parse_line(line).ok())
        .collect())
}
