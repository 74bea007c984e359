//! # CLI Layer
//!
//! This module is **one possible UI client** for studentapp, not the application
//! itself. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Configures logging

mod commands;
mod logging;
mod render;
mod setup;
mod shell;
mod styles;

pub use commands::run;
