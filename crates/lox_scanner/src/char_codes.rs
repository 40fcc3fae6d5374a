//! Byte classification used by the scanner.
//!
//! The language is ASCII-only outside of string literals and comments, so
//! every predicate here works on raw bytes.

pub const LINE_FEED: u8 = b'\n';
pub const DOUBLE_QUOTE: u8 = b'"';

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Whether a byte can start an identifier.
#[inline]
pub fn is_identifier_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

/// Whether a byte can continue an identifier.
#[inline]
pub fn is_identifier_part(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Insignificant whitespace. Line feeds are handled separately because they
/// advance the line counter.
#[inline]
pub fn is_white_space_single_line(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\t')
}
