//! Dock Reorder - Elm-style drag-to-reorder dock
//!
//! This crate provides the core types and logic for a horizontal dock whose
//! items are reordered by dragging, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod geometry;
pub mod hover;
pub mod messages;
pub mod model;
pub mod probe;
pub mod reflow;
pub mod scheduler;
pub mod tracing;
pub mod update;
pub mod view_model;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use controller::DockController;
pub use messages::Msg;
pub use model::DockModel;
pub use view_model::DockView;
