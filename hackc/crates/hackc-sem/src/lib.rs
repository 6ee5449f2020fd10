//! Class-scope and subroutine-scope symbol tables for the Jack compiler.
//!
//! A class owns one [`scope::ClassScope`] for its `static`/`field`
//! variables; each subroutine owns one [`scope::SubroutineScope`] for its
//! `argument`/`local` variables, which resolves names against the enclosing
//! class scope when they aren't declared locally.

pub mod error;
pub mod scope;

pub use error::{SemError, SemResult};
pub use scope::{ClassScope, StorageKind, SubroutineScope, VarEntry};

#[cfg(test)]
mod edge_cases;
