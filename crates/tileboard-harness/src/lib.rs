#![forbid(unsafe_code)]

//! `tileboard` command-line harness.
//!
//! Drives `tileboard-layout` from the shell: replays recorded gesture traces,
//! auto-arranges layouts and adds panels, printing the resulting layout as
//! JSON on stdout. Board tuning comes from `TILEBOARD_*` environment
//! variables; log filtering from `RUST_LOG`.

pub mod cli;
pub mod error;
pub mod logging;
pub mod trace;

pub use cli::{run, run_from_env};
pub use error::{HarnessError, Result};
