//! Identifier and keyword lexing.

use crate::classify::is_letter;
use crate::lexer::Lexer;
use crate::token::{lookup_ident, Token};

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a maximal run of letters and underscores, then resolves the
    /// run through the keyword table. The cursor is left on the first
    /// character after the run.
    pub(super) fn lex_identifier(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance_while(is_letter);

        let text = self.cursor.slice_from(start);
        Token::new(lookup_ident(text), text)
    }
}
