//! Byte classification for the wiig lexer.
//!
//! The lexer works on raw bytes and only recognizes ASCII; every non-ASCII
//! byte falls through to the illegal-token path.

/// Checks if a byte can start or continue an identifier.
///
/// Identifiers are made of ASCII letters and underscores only; digits
/// terminate them.
///
/// # Example
///
/// ```
/// use wiig_lex::classify::is_letter;
///
/// assert!(is_letter(b'a'));
/// assert!(is_letter(b'Z'));
/// assert!(is_letter(b'_'));
/// assert!(!is_letter(b'1'));
/// assert!(!is_letter(b'-'));
/// ```
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte is an ASCII decimal digit.
///
/// ```
/// use wiig_lex::classify::is_digit;
///
/// assert!(is_digit(b'0'));
/// assert!(is_digit(b'9'));
/// assert!(!is_digit(b'a'));
/// assert!(!is_digit(b'.'));
/// ```
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is skipped between tokens.
///
/// Only space, tab, newline and carriage return count; form feed and
/// vertical tab are illegal characters.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Checks if a byte continues a multi-byte UTF-8 sequence.
#[inline]
pub fn is_utf8_continuation(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}
