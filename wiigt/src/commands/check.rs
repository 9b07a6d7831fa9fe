//! Check command implementation.
//!
//! Lexes each input and reports every illegal token with its byte offset.

use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};
use wiig_lex::{Lexer, Token};

use crate::commands::common::read_sources;
use crate::config::Config;
use crate::error::{Result, WiigtError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input files; stdin when empty.
    pub inputs: Vec<PathBuf>,
    /// Report illegal tokens without failing.
    pub allow_illegal: bool,
}

/// Run the check command.
///
/// Fails with [`WiigtError::IllegalTokens`] when any input contains illegal
/// tokens, unless failing is disabled by `--allow-illegal` or by
/// `deny_illegal = false` in the configuration.
pub fn run_check(args: CheckArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let sources = read_sources(&args.inputs)?;

    let mut total = 0;
    for source in &sources {
        let illegal = find_illegal(&source.text);
        for (offset, token) in &illegal {
            writeln!(out, "{}:{}: illegal character {:?}", source.name, offset, token.literal)?;
        }
        if !illegal.is_empty() {
            warn!(source = %source.name, count = illegal.len(), "illegal tokens");
        }
        total += illegal.len();
    }

    writeln!(out, "{} source(s) checked, {} illegal token(s)", sources.len(), total)?;
    info!(sources = sources.len(), illegal = total, "check finished");

    if total > 0 && config.deny_illegal && !args.allow_illegal {
        return Err(WiigtError::IllegalTokens { count: total });
    }
    Ok(())
}

/// Returns every illegal token in `text` with its starting byte offset.
pub fn find_illegal(text: &str) -> Vec<(usize, Token<'_>)> {
    let mut lexer = Lexer::new(text);
    let mut found = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            return found;
        }
        if token.is_illegal() {
            // The cursor sits just past the token.
            found.push((lexer.position() - token.literal.len(), token));
        }
    }
}
