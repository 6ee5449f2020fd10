//! Semantic-analysis error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemError {
    #[error("line {line}: '{name}' is already declared in this scope")]
    DuplicateDeclaration { name: String, line: u32 },

    #[error("line {line}: '{name}' is not declared")]
    UndeclaredVariable { name: String, line: u32 },
}

pub type SemResult<T> = Result<T, SemError>;
