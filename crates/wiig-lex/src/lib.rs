//! wiig-lex - Lexical Analyzer for the wiig Programming Language
//!
//! This crate turns wiig source text into a stream of tokens for the parser.
//! The lexer is pull-based: hold a [`Lexer`] over a complete source string
//! and ask for tokens until the end-of-input token comes back.
//!
//! # Example Usage
//!
//! ```
//! use wiig_lex::{Lexer, Token, TokenKind};
//!
//! let mut lexer = Lexer::new("let five = 5;");
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Let, "let"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "five"));
//!
//! // Or drain it as an iterator (stops before EOF)
//! let kinds: Vec<TokenKind> = Lexer::new("1 == 1").map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Int, TokenKind::Eq, TokenKind::Int]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the keyword table
//! - [`lexer`] - The scanning state machine
//! - [`cursor`] - Byte cursor with one byte of lookahead
//! - [`classify`] - Byte classification helpers
//!
//! # Token Categories
//!
//! **Keywords**: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! **Identifiers**: `[a-zA-Z_]+` (digits end an identifier)
//!
//! **Integers**: `[0-9]+`, kept as source text
//!
//! **Operators**: `=`, `+`, `-`, `!`, `*`, `/`, `<`, `>`, `==`, `!=`
//!
//! **Delimiters**: `,`, `;`, `(`, `)`, `{`, `}`
//!
//! **Special**: `EOF` once input is exhausted, `ILLEGAL` for any other
//! character. The lexer never fails; illegal characters are reported in-band
//! and scanning continues.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{Lexer, LexerState};
pub use token::{lookup_ident, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect all tokens from source, excluding EOF.
    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn test_function_definition() {
        let source = r#"
            let add = fn(x, y) {
                return x + y;
            };
        "#;
        let tokens = lex_all(source);

        assert!(tokens.contains(&Token::new(TokenKind::Function, "fn")));
        assert!(tokens.contains(&Token::new(TokenKind::Ident, "add")));
        assert!(tokens.contains(&Token::new(TokenKind::Return, "return")));
        assert!(tokens.contains(&Token::new(TokenKind::Plus, "+")));
        assert_eq!(tokens.len(), 17);
    }

    #[test]
    fn test_conditional() {
        let source = "if (a != b) { true } else { false }";
        let kinds: Vec<_> = lex_all(source).into_iter().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            [
                TokenKind::If,
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::NotEq,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::True,
                TokenKind::RBrace,
                TokenKind::Else,
                TokenKind::LBrace,
                TokenKind::False,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all("   \n\t  \r\n  ").is_empty());
    }

    #[test]
    fn test_keyword_vs_identifier() {
        assert_eq!(lex_all("let"), [Token::new(TokenKind::Let, "let")]);
        assert_eq!(lex_all("x"), [Token::new(TokenKind::Ident, "x")]);
    }
}
