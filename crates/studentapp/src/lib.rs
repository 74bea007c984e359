//! # Studentapp Architecture
//!
//! Studentapp is a **UI-agnostic student roster library**. The bundled `students`
//! binary is one client of it; a GUI, a web handler or a test harness can drive the
//! exact same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (the `students` CLI, or any other client)     │
//! │  - Parses input, renders output, owns all terminal I/O      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fills defaults from configuration                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation + uniqueness checks before every mutation     │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - InMemoryStore, SharedStore (mutex-guarded handle)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Global State
//!
//! There is no process-wide roster. A store is constructed explicitly (usually by
//! [`init::initialize`]) and handed to [`api::StudentApi`], which owns it for the
//! lifetime of the client. Tests build as many isolated stores as they like.
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing from `api.rs` inward writes to stdout/stderr or exits the process.
//! Expected conditions (missing student, invalid field, duplicate ID) come back
//! as `Option`, `bool` or [`error::StudentError`], never as panics.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Student`] record and its helpers
//! - [`validation`]: Field rules and phone formatting
//! - [`config`]: Layered configuration
//! - [`init`]: Context construction for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
