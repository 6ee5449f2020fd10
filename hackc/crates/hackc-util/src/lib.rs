//! Shared infrastructure for the hackc toolchain: string interning,
//! diagnostics, typed index vectors, and the de-commenter used ahead of
//! every stage that consumes source text.
//!
//! Every other `hackc-*` crate depends on this one. Nothing here knows
//! about Jack syntax, VM commands, or HACK assembly - it only provides
//! the plumbing those crates build on.

pub mod decomment;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

pub use error::{
    DiagnosticError, DiagnosticResult, IndexVecError, IndexVecResult, SourceMapError,
    SourceMapResult, SymbolError, SymbolResult,
};
