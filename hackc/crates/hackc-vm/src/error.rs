//! Translation error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("line {line}: '{text}' is not a valid VM instruction")]
    MalformedInstruction { text: String, line: u32 },

    #[error("line {line}: '{segment}' is not a valid memory segment")]
    UnknownSegment { segment: String, line: u32 },

    #[error("line {line}: pointer index must be 0 or 1, got '{index}'")]
    InvalidPointerIndex { index: String, line: u32 },

    #[error("line {line}: '{value}' is not a valid index or argument count")]
    InvalidIndex { value: String, line: u32 },
}

pub type TranslateResult<T> = Result<T, TranslateError>;
