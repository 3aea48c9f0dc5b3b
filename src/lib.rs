//! Terminal 2048 (workspace facade crate).
//!
//! This package exposes the `tui_2048::{core,input,term,types}` API while the
//! implementation lives in dedicated crates under `crates/`. The command-line
//! surface ([`cli`]) and the headless scripted mode ([`script`]) live here.

pub mod cli;
pub mod script;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
