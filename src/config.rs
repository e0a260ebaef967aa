//! Dock configuration
//!
//! Read-only startup settings from `~/.config/dock-reorder/config.yaml`.
//! The dock order is never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::DockMetrics;

/// Startup configuration for the dock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Initial item ids, left to right
    #[serde(default = "default_items")]
    pub items: Vec<String>,

    #[serde(default)]
    pub metrics: DockMetrics,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

fn default_items() -> Vec<String> {
    ["finder", "mail", "music", "photos", "terminal"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_window_width() -> u32 {
    800
}

fn default_window_height() -> u32 {
    600
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            metrics: DockMetrics::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl DockConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.metrics.slot_width <= 0.0 || self.metrics.slot_height <= 0.0 {
            return Err("Slot dimensions must be positive".to_string());
        }
        if self.metrics.spacing < 0.0 {
            return Err("Spacing cannot be negative".to_string());
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err("Window dimensions must be non-zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = DockConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, DockConfig::default());
    }

    #[test]
    fn test_partial_metrics_keep_other_defaults() {
        let config = DockConfig::from_yaml_str("metrics:\n  spacing: 12\n").unwrap();
        assert_eq!(config.metrics.spacing, 12.0);
        assert_eq!(config.metrics.slot_width, DockMetrics::default().slot_width);
    }

    #[test]
    fn test_items_are_parsed_in_order() {
        let config = DockConfig::from_yaml_str("items: [a, b, c]\n").unwrap();
        assert_eq!(config.items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_negative_spacing_is_rejected() {
        assert!(DockConfig::from_yaml_str("metrics:\n  spacing: -1\n").is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(DockConfig::from_yaml_str("items: [a, b").is_err());
    }
}
