//! # Students CLI
//!
//! The `students` binary is a thin client over the `studentapp` library. This file
//! only invokes `cli::run()` and handles process termination; everything else
//! lives in `src/cli/`.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/students/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Interactive session (shell.rs)                           │
//! │  - Terminal / JSON rendering (render.rs, styles.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/studentapp/src/api.rs)                   │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Roster per Process
//!
//! The roster is in memory only. A one-shot invocation (`students toggle 3`)
//! starts from a freshly seeded roster and forgets its changes on exit. To work
//! with one roster across many commands, use `students shell`, which reads
//! commands from stdin until `exit` or end of input.
//!
//! ## Testing Approach
//!
//! - Business logic is tested in `studentapp`.
//! - Dispatch, rendering and line splitting have unit tests next to the code.
//! - `tests/cli.rs` runs the real binary through `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
