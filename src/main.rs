#![allow(non_snake_case)]

mod app;
mod catalog;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use vegbazar_core::logging::LoggingBuilder;
use vegbazar_core::{Storage, StorefrontConfig};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global storefront configuration, loaded once at startup
static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();

/// Whether analytics events are recorded
static ANALYTICS_ENABLED: OnceLock<bool> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the storefront configuration (loaded from --config or defaults)
pub fn get_config() -> StorefrontConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn analytics_enabled() -> bool {
    ANALYTICS_ENABLED.get().copied().unwrap_or(true)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vegbazar")
}

/// VegBazar - Fresh groceries, delivered
#[derive(Parser, Debug)]
#[command(name = "vegbazar-desktop")]
#[command(about = "VegBazar storefront - fresh vegetables and groceries delivered")]
struct Args {
    /// Data directory for storage, logs and analytics
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding storefront timings and limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,

    /// Do not record analytics events
    #[arg(long)]
    no_analytics: bool,

    /// Forget dismissed banners and prompts before starting
    #[arg(long)]
    reset_dismissals: bool,
}

/// Clear stored dismissals. The storage handle is dropped before the
/// window opens so the app can take the database lock.
fn reset_dismissals(data_dir: &Path) {
    let cleared = Storage::new(data_dir.join(context::STORAGE_FILE))
        .and_then(|storage| storage.clear_all_dismissals());
    match cleared {
        Ok(count) => tracing::info!(count, "Cleared stored dismissals"),
        Err(e) => tracing::warn!(error = %e, "Failed to clear stored dismissals"),
    }
}

fn main() {
    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    let mut logging = LoggingBuilder::new(data_dir.join("logs"), "desktop");
    if let Some(filter) = args.log_filter.as_deref() {
        logging = logging.with_filter(filter);
    }
    if let Err(e) = logging.init() {
        let _ = tracing_subscriber::fmt().try_init();
        tracing::warn!("JSONL logging unavailable: {}", e);
    }

    let config = match args.config.as_ref() {
        Some(path) => StorefrontConfig::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Falling back to default config");
            StorefrontConfig::default()
        }),
        None => StorefrontConfig::default(),
    };

    if args.reset_dismissals {
        reset_dismissals(&data_dir);
    }

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = CONFIG.set(config);
    let _ = ANALYTICS_ENABLED.set(!args.no_analytics);

    tracing::info!("Starting VegBazar with data dir: {:?}", data_dir);

    let window_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("VegBazar")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .launch(app::App);
}
