//! Lexical error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("line {line}: '{fragment}' is not a valid token")]
    InvalidFragment { fragment: String, line: u32 },

    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: u32 },
}

pub type LexResult<T> = Result<T, LexError>;
