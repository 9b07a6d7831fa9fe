//! Token definitions and the keyword table.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of source text it
//! was scanned from. Reserved words are resolved through a process-wide,
//! read-only keyword table built on first use.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

/// A single lexical unit.
///
/// The literal borrows the source buffer, so tokens are `Copy` and never
/// outlive the text they were scanned from.
///
/// # Example
///
/// ```
/// use wiig_lex::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Let, "let");
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!(token.literal, "let");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    /// The kind tag.
    pub kind: TokenKind,

    /// The source text that produced this token.
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token from a kind and its literal.
    pub fn new(kind: TokenKind, literal: &'a str) -> Self {
        Self { kind, literal }
    }

    /// The end-of-input token. Its literal is always empty.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for an unrecognized character.
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========================================================================
    // Sentinels
    // ========================================================================
    /// End of input.
    Eof,
    /// A character that starts no token.
    Illegal,

    // ========================================================================
    // Identifiers and literals
    // ========================================================================
    /// A name that is not a keyword.
    Ident,
    /// A run of decimal digits.
    Int,

    // ========================================================================
    // Operators
    // ========================================================================
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    // ========================================================================
    // Delimiters
    // ========================================================================
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ========================================================================
    // Keywords
    // ========================================================================
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl TokenKind {
    /// Returns the display name of this kind.
    ///
    /// Operators and delimiters display as their spelling, everything else
    /// as an upper-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    /// Returns true if this kind is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }

    /// Returns true if this kind is a one- or two-character operator.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Bang
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Reserved words and their kinds.
const KEYWORDS: [(&str, TokenKind); 7] = [
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Resolves an identifier-shaped string to its kind.
///
/// Returns the reserved kind for keywords and [`TokenKind::Ident`] for
/// everything else.
///
/// # Example
///
/// ```
/// use wiig_lex::token::{lookup_ident, TokenKind};
///
/// assert_eq!(lookup_ident("fn"), TokenKind::Function);
/// assert_eq!(lookup_ident("five"), TokenKind::Ident);
/// ```
pub fn lookup_ident(ident: &str) -> TokenKind {
    keywords().get(ident).copied().unwrap_or(TokenKind::Ident)
}
