//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use tracing::{debug, trace};

use crate::classify::{is_digit, is_letter, is_utf8_continuation, is_whitespace};
use crate::cursor::{Cursor, EOF_CHAR};
use crate::token::{Token, TokenKind};

/// Scanning state of a [`Lexer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerState {
    /// Input remains; the next call may produce any token.
    Scanning,
    /// The cursor has reached the end of input. Every further call yields
    /// the end-of-input token.
    AtEnd,
}

/// Lexer for the wiig language.
///
/// The lexer turns source text into tokens one call at a time. It never
/// fails: characters it does not recognize come back as
/// [`TokenKind::Illegal`] tokens and scanning carries on after them.
///
/// # Example
///
/// ```
/// use wiig_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "five");
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Byte cursor over the source.
    pub(super) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the first character already loaded.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the current character. Once the
    /// input is exhausted every call returns the end-of-input token with an
    /// empty literal.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let token = match self.cursor.current() {
            b'=' => self.lex_equals(),
            b'!' => self.lex_bang(),
            b'+' => self.lex_single(TokenKind::Plus),
            b'-' => self.lex_single(TokenKind::Minus),
            b'*' => self.lex_single(TokenKind::Asterisk),
            b'/' => self.lex_single(TokenKind::Slash),
            b'<' => self.lex_single(TokenKind::Lt),
            b'>' => self.lex_single(TokenKind::Gt),
            b',' => self.lex_single(TokenKind::Comma),
            b';' => self.lex_single(TokenKind::Semicolon),
            b'(' => self.lex_single(TokenKind::LParen),
            b')' => self.lex_single(TokenKind::RParen),
            b'{' => self.lex_single(TokenKind::LBrace),
            b'}' => self.lex_single(TokenKind::RBrace),
            EOF_CHAR if self.cursor.is_at_end() => Token::eof(),
            b if is_letter(b) => self.lex_identifier(),
            b if is_digit(b) => self.lex_number(),
            _ => self.lex_illegal(),
        };

        trace!(kind = %token.kind, literal = token.literal, "token");
        token
    }

    /// Returns the character after the current one without consuming it.
    ///
    /// Yields `0` when there is no such character.
    pub fn peek_char(&self) -> u8 {
        self.cursor.peek()
    }

    /// Returns the current scanning state.
    pub fn state(&self) -> LexerState {
        if self.cursor.is_at_end() {
            LexerState::AtEnd
        } else {
            LexerState::Scanning
        }
    }

    /// Returns the byte offset of the character under examination.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Drains the lexer into a vector.
    ///
    /// The returned tokens always end with exactly one end-of-input token.
    ///
    /// ```
    /// use wiig_lex::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::new("x;").tokenize();
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(kinds, [TokenKind::Ident, TokenKind::Semicolon, TokenKind::Eof]);
    /// ```
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            tokens.push(token);
            if token.is_eof() {
                return tokens;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.advance_while(is_whitespace);
    }

    /// Emits one unrecognized character.
    ///
    /// A non-ASCII character is consumed whole so the literal stays a valid
    /// string slice.
    fn lex_illegal(&mut self) -> Token<'a> {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance_while(is_utf8_continuation);

        let literal = self.cursor.slice_from(start);
        debug!(offset = start, literal, "illegal character");
        Token::new(TokenKind::Illegal, literal)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, the end-of-input token.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
