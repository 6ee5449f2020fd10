//! Jack tokenizer: splits decommented source text into keyword, symbol,
//! integer constant, string constant, and identifier fragments.
//!
//! Classification is first-match-wins in that order - a fragment equal to a
//! reserved word is always a keyword, never an identifier.

pub mod cursor;
pub mod error;
mod lexer;
pub mod token;
mod unicode;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod edge_cases;

/// Tokenizes a whole file's raw (not yet decommented) source text.
///
/// Runs the shared de-commenter in
/// [`hackc_util::decomment::Mode::Preserve`] and joined form, then lexes
/// the result. This is the entry point `hackc-drv` calls per `.jack` file.
pub fn tokenize_source(source: &str) -> LexResult<Vec<Token>> {
    let joined = hackc_util::decomment::decomment_joined(source);
    let mut handler = hackc_util::diagnostic::Handler::new();
    let lexer = Lexer::new(&joined, &mut handler);
    lexer.tokenize()
}
