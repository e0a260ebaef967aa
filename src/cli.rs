//! Command-line argument parsing for the dock demo
//!
//! CLI values override whatever the config file says.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DockConfig;

/// A reorderable dock
#[derive(Parser, Debug)]
#[command(name = "dock-reorder", version, about = "A drag-to-reorder dock")]
pub struct CliArgs {
    /// Comma-separated item ids, left to right
    #[arg(long, value_name = "IDS")]
    pub items: Option<String>,

    /// Read config from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Width of one slot in pixels
    #[arg(long, value_name = "N")]
    pub slot_width: Option<f32>,

    /// Spacing between slots in pixels
    #[arg(long, value_name = "N")]
    pub spacing: Option<f32>,
}

impl CliArgs {
    /// Load the base config and apply overrides
    pub fn into_config(self) -> Result<DockConfig, String> {
        let base = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                DockConfig::from_yaml_str(&content)?
            }
            None => DockConfig::load(),
        };
        self.apply(base)
    }

    /// Apply CLI overrides on top of `config`
    pub fn apply(self, mut config: DockConfig) -> Result<DockConfig, String> {
        if let Some(items) = self.items {
            config.items = parse_items(&items)?;
        }
        if let Some(width) = self.slot_width {
            if width <= 0.0 {
                return Err(format!("Slot width must be positive, got {}", width));
            }
            config.metrics.slot_width = width;
        }
        if let Some(spacing) = self.spacing {
            if spacing < 0.0 {
                return Err(format!("Spacing cannot be negative, got {}", spacing));
            }
            config.metrics.spacing = spacing;
        }
        Ok(config)
    }
}

fn parse_items(raw: &str) -> Result<Vec<String>, String> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err("--items needs at least one id".to_string());
    }
    Ok(items)
}
