//! Parse/compile error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected {expected} but found '{found}'")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: u32,
    },

    #[error("the class name '{found}' does not match the file name '{expected}'")]
    ClassNameMismatch { expected: String, found: String },

    #[error("line {line}: '{name}' is not declared")]
    UndeclaredVariable { name: String, line: u32 },

    #[error("unexpected end of input while parsing {context}")]
    UnexpectedEof { context: String },

    #[error("line {line}: integer constant {value} is out of range (max 32767)")]
    IntegerOutOfRange { value: u64, line: u32 },

    #[error(transparent)]
    Sem(#[from] hackc_sem::SemError),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// `hackc-par`'s error type is also known as `CompileError` at crate
/// boundaries, matching the taxonomy the driver dispatches on.
pub type CompileError = ParseError;
pub type CompileResult<T> = ParseResult<T>;
