//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging drag
//! transitions, hover resolution, and reorder commits.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=drag=debug,hover=trace` - scoped filtering
//! - `RUST_LOG=dock_reorder::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dock-reorder/logs/dock-reorder.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DockModel, DragStatus};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG, defaulting to `warn`. File logging
/// writes to the logs directory with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dock-reorder.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of drag and order state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct DragSnapshot {
    pub status: DragStatus,
    pub source: Option<usize>,
    pub target: Option<usize>,
    pub generation: u32,
    pub order: Vec<String>,
}

impl DragSnapshot {
    pub fn from_model(model: &DockModel) -> Self {
        Self {
            status: model.drag.status,
            source: model.drag.source_index,
            target: model.drag.target_index,
            generation: model.reflow.generation(),
            order: model.items().iter().map(|i| i.as_str().to_owned()).collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DragSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.status != other.status {
            changes.push(format!(
                "status: {} → {}",
                self.status.as_str(),
                other.status.as_str()
            ));
        }
        if self.source != other.source {
            changes.push(format!("source: {:?} → {:?}", self.source, other.source));
        }
        if self.target != other.target {
            changes.push(format!("target: {:?} → {:?}", self.target, other.target));
        }
        if self.order != other.order {
            changes.push(format!(
                "order: [{}] → [{}] (gen {} → {})",
                self.order.join(","),
                other.order.join(","),
                self.generation,
                other.generation
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
