//! Identifier and keyword fragments.
//!
//! Keywords and identifiers share one fragment shape
//! (`[A-Za-z_][A-Za-z_0-9]*`); classification is exact-match-against-the-
//! keyword-list, falling back to identifier - keyword lookup must run
//! before the identifier is interned as a plain name.

use crate::token::{is_keyword, Token, TokenKind};
use crate::unicode::is_ascii_ident_continue;
use crate::Lexer;
use hackc_util::Symbol;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier_or_keyword(&mut self, line: u32) -> Token {
        let start = self.cursor.position();
        while is_ascii_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        let kind = if is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, Symbol::intern(text), line)
    }
}
