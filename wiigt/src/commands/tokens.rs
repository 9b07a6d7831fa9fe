//! Tokens command implementation.
//!
//! Lexes each input and prints the token stream, either as aligned text or
//! as JSON.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;
use wiig_lex::{Lexer, Token};

use crate::commands::common::{read_sources, Source};
use crate::config::{Config, OutputFormat};
use crate::error::Result;

/// Width of the kind column in text output.
const KIND_WIDTH: usize = 10;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Input files; stdin when empty.
    pub inputs: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Omit the terminating EOF token.
    pub no_eof: bool,
}

/// One source and its tokens, as written in JSON mode.
#[derive(Debug, Serialize)]
struct SourceTokens<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let sources = read_sources(&args.inputs)?;
    let format = args.format.unwrap_or(config.format);
    let show_eof = config.show_eof && !args.no_eof;
    write_tokens(&sources, format, show_eof, out)
}

/// Lexes `sources` and writes their tokens to `out`.
pub fn write_tokens(
    sources: &[Source],
    format: OutputFormat,
    show_eof: bool,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for source in sources {
                if sources.len() > 1 {
                    writeln!(out, "==> {} <==", source.name)?;
                }
                for token in lex_source(source, show_eof) {
                    let line =
                        format!("{:<width$}{}", token.kind, token.literal, width = KIND_WIDTH);
                    writeln!(out, "{}", line.trim_end())?;
                }
            }
        }
        OutputFormat::Json => {
            let dumps: Vec<SourceTokens<'_>> = sources
                .iter()
                .map(|source| SourceTokens {
                    source: &source.name,
                    tokens: lex_source(source, show_eof),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &dumps)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn lex_source(source: &Source, show_eof: bool) -> Vec<Token<'_>> {
    let mut tokens = Lexer::new(&source.text).tokenize();
    if !show_eof {
        tokens.pop();
    }
    debug!(source = %source.name, count = tokens.len(), "lexed source");
    tokens
}
