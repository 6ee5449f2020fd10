//! String constant fragments.
//!
//! Jack string constants are `"[^"]*"` - no escape sequences, and the
//! closing quote must appear before end of line.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;
use hackc_util::Symbol;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self, line: u32) -> Token {
        self.cursor.advance(); // opening quote

        let start = self.cursor.position();
        while !self.cursor.is_at_end()
            && self.cursor.current_char() != '"'
            && self.cursor.current_char() != '\n'
        {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);

        if self.cursor.current_char() == '"' {
            self.cursor.advance();
        } else {
            self.report_error(LexError::UnterminatedString { line });
        }

        Token::new(TokenKind::StringConstant, Symbol::intern(text), line)
    }
}
