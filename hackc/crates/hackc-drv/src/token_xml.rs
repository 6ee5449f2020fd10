//! Optional `T.xml` token-list diagnostic dump, retained as a side-channel
//! artifact per spec.md §6 - nothing downstream reads it back in.

use hackc_lex::{Token, TokenKind};

fn tag_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => "keyword",
        TokenKind::Symbol => "symbol",
        TokenKind::IntegerConstant => "integerConstant",
        TokenKind::StringConstant => "stringConstant",
        TokenKind::Identifier => "identifier",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders a token stream as `<tokens>...</tokens>` XML, one element per
/// token, matching the historical Jack analyzer's `T.xml` output.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::from("<tokens>\n");
    for token in tokens {
        let tag = tag_name(token.kind);
        out.push_str(&format!(
            "<{tag}> {} </{tag}>\n",
            escape(token.text.as_str())
        ));
    }
    out.push_str("</tokens>\n");
    out
}
