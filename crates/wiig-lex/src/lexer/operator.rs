//! Operator and delimiter lexing.
//!
//! `=` and `!` have two-character forms and need one character of
//! lookahead; everything else maps one character to one token.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes a token made of exactly the current character.
    pub(super) fn lex_single(&mut self, kind: TokenKind) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    /// Lexes a token whose first character is current and whose second
    /// character, if it matches `second`, extends it to `double`.
    fn lex_pair(&mut self, second: u8, double: TokenKind, single: TokenKind) -> Token<'a> {
        if self.cursor.peek() != second {
            return self.lex_single(single);
        }

        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();
        Token::new(double, self.cursor.slice_from(start))
    }

    /// Lexes assignment or equality.
    ///
    /// Handles: `=`, `==`
    pub(super) fn lex_equals(&mut self) -> Token<'a> {
        self.lex_pair(b'=', TokenKind::Eq, TokenKind::Assign)
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(super) fn lex_bang(&mut self) -> Token<'a> {
        self.lex_pair(b'=', TokenKind::NotEq, TokenKind::Bang)
    }
}
