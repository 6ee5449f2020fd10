//! Single-character symbol fragments.

use crate::token::{Token, TokenKind};
use crate::Lexer;
use hackc_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes a single-character symbol fragment.
    pub(crate) fn lex_symbol(&mut self, line: u32) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();
        Token::new(TokenKind::Symbol, Symbol::intern(&c.to_string()), line)
    }
}
