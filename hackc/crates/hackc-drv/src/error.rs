//! Driver-level error type, wrapping every per-stage error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read or write {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("'{0}' has no recognized stage extension (.jack, .vm, .asm)")]
    UnsupportedExtension(PathBuf),

    #[error("no input files found for '{0}'")]
    NoInputFiles(String),

    #[error(transparent)]
    Lex(#[from] hackc_lex::LexError),

    #[error(transparent)]
    Compile(#[from] hackc_par::CompileError),

    #[error(transparent)]
    Translate(#[from] hackc_vm::TranslateError),

    #[error(transparent)]
    Assemble(#[from] hackc_asm::AssembleError),
}

pub type DriverResult<T> = Result<T, DriverError>;
