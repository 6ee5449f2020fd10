//! Assembler error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssembleError {
    #[error("line {line}: '{text}' is not a valid instruction")]
    MalformedInstruction { text: String, line: u32 },

    #[error("line {line}: '{mnemonic}' is not a valid {field} mnemonic")]
    UnknownMnemonic {
        field: &'static str,
        mnemonic: String,
        line: u32,
    },
}

pub type AssembleResult<T> = Result<T, AssembleError>;
