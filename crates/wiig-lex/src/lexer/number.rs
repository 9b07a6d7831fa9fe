//! Integer literal lexing.

use crate::classify::is_digit;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// Only a maximal run of decimal digits is consumed. Signs, decimal
    /// points and separators are lexed as tokens of their own, and the
    /// literal is kept as text, so arbitrarily long runs never overflow.
    pub(super) fn lex_number(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance_while(is_digit);
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }
}
