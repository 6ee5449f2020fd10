//! Character classification for Jack identifiers.
//!
//! Jack identifiers are ASCII-only (`[A-Za-z_][A-Za-z_0-9]*`), unlike the
//! Unicode-aware identifier rules a general-purpose language lexer needs.

/// True for characters that may start an identifier: letters and `_`.
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// True for characters that may continue an identifier: alphanumerics and `_`.
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
