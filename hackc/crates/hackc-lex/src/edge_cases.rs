//! Edge case tests for hackc-lex

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::{Lexer, Token};
    use hackc_util::{Handler, Symbol};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        let lexer = Lexer::new(source, &mut handler);
        lexer.collect()
    }

    #[test]
    fn empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn single_char_identifier() {
        let t = lex_all("x");
        assert_eq!(t[0].text, Symbol::intern("x"));
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert!(t.iter().any(|tok| tok.text == Symbol::intern(&name)));
    }

    #[test]
    fn keywords_are_not_identifiers() {
        let t = lex_all("class let if");
        assert_eq!(t[0].kind, TokenKind::Keyword);
        assert_eq!(t[1].kind, TokenKind::Keyword);
        assert_eq!(t[2].kind, TokenKind::Keyword);
    }

    #[test]
    fn zero_is_a_valid_integer_constant() {
        let t = lex_all("0");
        assert_eq!(t[0].kind, TokenKind::IntegerConstant);
        assert_eq!(t[0].int_value(), Some(0));
    }

    #[test]
    fn leading_zeros_are_preserved_numerically() {
        let t = lex_all("007");
        assert_eq!(t[0].int_value(), Some(7));
    }

    #[test]
    fn empty_string_constant() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].kind, TokenKind::StringConstant);
        assert_eq!(t[0].text, Symbol::intern(""));
    }

    #[test]
    fn all_symbols_lex_individually() {
        let t = lex_all("{}()[].,;+-*/&|<>=~");
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Symbol));
        assert_eq!(t.len(), 19);
    }

    #[test]
    fn nested_parens_lex_as_separate_symbol_tokens() {
        let t = lex_all("((()))");
        assert_eq!(
            t.iter().filter(|tok| tok.text == Symbol::intern("(")).count(),
            3
        );
    }

    #[test]
    fn case_sensitivity_in_keywords() {
        let t = lex_all("Class class");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[1].kind, TokenKind::Keyword);
    }

    #[test]
    fn true_false_null_are_keywords() {
        let t = lex_all("true false null");
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Keyword));
    }

    #[test]
    fn whitespace_variations_are_all_separators() {
        let t = lex_all("let\tx\n=\n1");
        assert_eq!(t.len(), 4);
        assert_eq!(t[3].int_value(), Some(1));
    }

    #[test]
    fn consecutive_symbols_lex_as_distinct_tokens() {
        let t = lex_all("+++");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn unterminated_string_reports_error_but_still_yields_a_token() {
        let mut handler = Handler::new();
        let mut lex = Lexer::new("\"unterminated", &mut handler);
        let token = lex.next_token();
        assert!(token.is_some());
        assert!(handler.has_errors());
    }

    #[test]
    fn invalid_character_is_reported_but_scanning_continues() {
        let mut handler = Handler::new();
        let lex = Lexer::new("let x = @ 1;", &mut handler);
        let tokens: Vec<_> = lex.collect();
        assert!(handler.has_errors());
        assert!(tokens.iter().any(|tok| tok.kind == TokenKind::IntegerConstant));
    }

    #[test]
    fn identifier_with_keyword_as_prefix_is_an_identifier() {
        let t = lex_all("classVariable");
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn string_cannot_span_lines() {
        let mut handler = Handler::new();
        let mut lex = Lexer::new("\"line1\nline2\"", &mut handler);
        lex.next_token();
        assert!(handler.has_errors());
    }
}
