//! Lexer module.
//!
//! The implementation is split by token family:
//! - `core` - Lexer struct, state and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `operator` - Operator and delimiter lexing

mod core;
mod identifier;
mod number;
mod operator;

pub use core::{Lexer, LexerState};
