//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the dock:
//! - `app` - ApplicationHandler and window management
//! - `render` - softbuffer drawing
//! - `tween` - displayed geometry easing toward the view model

pub mod app;
pub mod render;
pub mod tween;

pub use app::App;
