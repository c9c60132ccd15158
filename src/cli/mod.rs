// pose-render · AGPL-3.0 License - https://github.com/pose-render/pose-render

//! CLI module for rendering pose overlays.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `render` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Logging macros and verbosity flag.
pub mod logging;

/// Render command logic.
pub mod render;
