//! Tag manager that appends events to a JSONL file.
//!
//! One file per day under the analytics directory:
//!
//! ```text
//! analytics/
//! ├── 2026-10-18.jsonl
//! └── 2026-10-19.jsonl
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TagManager;

/// One recorded analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    /// ISO 8601 timestamp
    pub ts: String,
    pub event: String,
    pub params: Map<String, Value>,
}

/// Appends each pushed event as one JSON line.
pub struct JsonlTagManager {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTagManager {
    /// Open (or create) today's file under `dir`.
    pub fn new(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = dir.join(format!("{}.jsonl", date));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every record in a file.
    pub fn read_records(path: impl AsRef<Path>) -> std::io::Result<Vec<AnalyticsRecord>> {
        let content = fs::read_to_string(path)?;
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect())
    }

    fn append(&self, record: &AnalyticsRecord) -> std::io::Result<()> {
        let line = serde_json::to_string(record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl TagManager for JsonlTagManager {
    fn push(&self, event: &str, params: &Map<String, Value>) {
        let record = AnalyticsRecord {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: event.to_string(),
            params: params.clone(),
        };
        if let Err(e) = self.append(&record) {
            tracing::warn!(event, error = %e, "Failed to record analytics event");
        }
    }
}
