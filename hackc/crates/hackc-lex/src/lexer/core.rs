//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use hackc_util::Handler;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::Token;

/// Lexer for Jack source text.
///
/// Source is decommented up front (comments and pure whitespace never reach
/// the fragment classifier), then scanned fragment by fragment: each
/// fragment is either a single-character symbol, a double-quoted string
/// constant, or a maximal run of identifier/digit characters classified as
/// keyword, integer constant, or identifier.
pub struct Lexer<'a> {
    /// Cursor over the decommented source.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub(crate) handler: &'a mut Handler,

    /// Starting position of the current fragment (byte offset).
    pub(crate) token_start: usize,

    /// First error encountered, if any. `tokenize` surfaces this; `next_token`
    /// keeps scanning past errors so a single bad fragment doesn't hide the
    /// rest of the file's tokens from callers that only want diagnostics.
    pub(crate) last_error: Option<LexError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over already-decommented source text.
    ///
    /// Callers driving a whole file should decomment with
    /// [`hackc_util::decomment::decomment_joined`] first; this lexer does
    /// not strip comments itself.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            last_error: None,
        }
    }

    /// Returns the next token from the input, or `None` at end of file.
    pub fn next_token(&mut self) -> Option<Token> {
        self.cursor.skip_whitespace();

        if self.cursor.is_at_end() {
            return None;
        }

        self.token_start = self.cursor.position();
        let line = self.cursor.line();

        let c = self.cursor.current_char();
        let token = if crate::token::is_symbol_char(c) {
            self.lex_symbol(line)
        } else if c == '"' {
            self.lex_string(line)
        } else if c.is_ascii_digit() {
            self.lex_integer(line)
        } else if crate::unicode::is_ascii_ident_start(c) {
            self.lex_identifier_or_keyword(line)
        } else {
            self.report_error(LexError::InvalidFragment {
                fragment: c.to_string(),
                line,
            });
            self.cursor.advance();
            return self.next_token();
        };

        Some(token)
    }

    /// Collects every token in the source. Returns the first error seen, if
    /// any, after scanning to the end.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        match self.last_error {
            Some(err) => Err(err),
            None => Ok(tokens),
        }
    }

    pub(crate) fn report_error(&mut self, err: LexError) {
        hackc_util::DiagnosticBuilder::error(err.to_string()).emit(self.handler);
        if self.last_error.is_none() {
            self.last_error = Some(err);
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
