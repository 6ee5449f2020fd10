//! Integer constant fragments.
//!
//! Jack has only decimal integer constants, with no hex/binary/octal forms
//! and no float literals - `\d+`, unconstrained at the lexer (the compiler
//! is expected to reject values >= 32768, not the tokenizer).

use crate::token::{Token, TokenKind};
use crate::Lexer;
use hackc_util::Symbol;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_integer(&mut self, line: u32) -> Token {
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        Token::new(TokenKind::IntegerConstant, Symbol::intern(text), line)
    }
}
