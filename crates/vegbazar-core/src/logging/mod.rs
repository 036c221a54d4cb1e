//! Application logging: console output plus a JSONL file per day.
//!
//! ```text
//! <data dir>/logs/raw/2026-10-19_desktop.jsonl
//! ```
//!
//! ```ignore
//! use vegbazar_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new(data_dir.join("logs"), "desktop")
//!     .with_filter("vegbazar=debug,vegbazar_core=debug")
//!     .init()?;
//! ```
//!
//! Query with jq:
//!
//! ```bash
//! jq 'select(.level == "warn")' logs/raw/*.jsonl
//! ```

mod layer;
mod writer;

pub use layer::{JsonLogEntry, JsonlLayer};
pub use writer::InstanceLogWriter;

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info,vegbazar=debug,vegbazar_core=debug,vegbazar_ui=debug";

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    logs_dir: PathBuf,
    instance: String,
    env_filter: Option<String>,
}

impl LoggingBuilder {
    pub fn new(logs_dir: impl Into<PathBuf>, instance: impl Into<String>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            instance: instance.into(),
            env_filter: None,
        }
    }

    /// Set the filter directive (e.g. "vegbazar=info,vegbazar_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Build the JSONL layer on its own, for manual composition.
    pub fn build_layer(&self) -> std::io::Result<JsonlLayer> {
        JsonlLayer::new(&self.logs_dir, &self.instance)
    }

    fn filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        }
    }

    /// Install the global subscriber. Returns the JSONL file path.
    pub fn init(self) -> std::io::Result<PathBuf> {
        let jsonl = self.build_layer()?;
        let path = jsonl.log_path().to_path_buf();
        let console = tracing_subscriber::fmt::layer().with_target(true);

        tracing_subscriber::registry()
            .with(self.filter())
            .with(jsonl)
            .with(console)
            .try_init()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e.to_string()))?;

        Ok(path)
    }
}
