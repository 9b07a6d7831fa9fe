//! Command modules for the wiigt CLI.
//!
//! Each subcommand lives in its own file and exposes an args struct plus a
//! `run_*` entry point that writes to any `io::Write`.

pub mod common;

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
