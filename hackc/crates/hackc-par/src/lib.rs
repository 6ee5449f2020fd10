//! Recursive-descent Jack parser that emits VM command text directly while
//! parsing - there is no separate AST stage, matching the single-pass
//! `Compiler` class this crate is grounded on.

mod class;
mod error;
mod expr;
mod stmt;

pub use error::{CompileError, CompileResult, ParseError, ParseResult};

use hackc_lex::{Token, TokenKind};
use hackc_sem::ClassScope;
use hackc_util::Symbol;

/// Maps a Jack binary-operator symbol to the VM command it compiles to.
pub(crate) fn binop_to_vm(op: &str) -> &'static str {
    match op {
        "+" => "add",
        "-" => "sub",
        "*" => "call Math.multiply 2",
        "/" => "call Math.divide 2",
        "&" => "and",
        "|" => "or",
        "<" => "lt",
        ">" => "gt",
        "=" => "eq",
        _ => unreachable!("not a Jack binary operator: {op}"),
    }
}

/// Compiles one class's token stream into VM command text.
///
/// `class_name` is the file's stem (`Main.jack` -> `Main`); Jack requires
/// the declared class name to match it exactly.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    class_name: Symbol,
    label_count: u32,
    output: String,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], class_name: Symbol) -> Self {
        Self {
            tokens,
            pos: 0,
            class_name,
            label_count: 0,
            output: String::new(),
        }
    }

    /// Compiles `class <ClassName> { ... }` and returns the VM text emitted.
    pub fn compile_class(mut self) -> ParseResult<String> {
        self.expect_keyword("class")?;
        let name_tok = self.expect_kind(TokenKind::Identifier)?;
        if name_tok.text != self.class_name {
            return Err(ParseError::ClassNameMismatch {
                expected: self.class_name.as_str().to_string(),
                found: name_tok.text.as_str().to_string(),
            });
        }
        self.expect_symbol("{")?;

        let mut class_scope = ClassScope::new();
        self.compile_class_var_decs(&mut class_scope)?;
        self.compile_subroutines(&class_scope)?;

        self.expect_symbol("}")?;
        Ok(self.output)
    }

    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn bump(&mut self) -> ParseResult<Token> {
        let tok = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or_else(|| ParseError::UnexpectedEof {
                context: "token stream".to_string(),
            })?;
        self.pos += 1;
        Ok(tok)
    }

    pub(crate) fn expect_symbol(&mut self, sym: &str) -> ParseResult<Token> {
        let tok = self.bump()?;
        if tok.kind == TokenKind::Symbol && tok.text.eq_str(sym) {
            Ok(tok)
        } else {
            Err(self.unexpected(&tok, sym))
        }
    }

    pub(crate) fn expect_keyword(&mut self, kw: &str) -> ParseResult<Token> {
        let tok = self.bump()?;
        if tok.kind == TokenKind::Keyword && tok.text.eq_str(kw) {
            Ok(tok)
        } else {
            Err(self.unexpected(&tok, kw))
        }
    }

    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let tok = self.bump()?;
        if tok.kind == kind {
            Ok(tok)
        } else {
            Err(self.unexpected(&tok, &format!("{kind:?}")))
        }
    }

    pub(crate) fn peek_is_symbol(&self, sym: &str) -> bool {
        matches!(self.current(), Some(tok) if tok.kind == TokenKind::Symbol && tok.text.eq_str(sym))
    }

    pub(crate) fn peek_is_keyword(&self, kw: &str) -> bool {
        matches!(self.current(), Some(tok) if tok.kind == TokenKind::Keyword && tok.text.eq_str(kw))
    }

    fn unexpected(&self, found: &Token, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.text.as_str().to_string(),
            line: found.line,
        }
    }

    pub(crate) fn next_label(&mut self) -> String {
        let label = format!("{}.L{}", self.class_name.as_str(), self.label_count);
        self.label_count += 1;
        label
    }

    pub(crate) fn emit(&mut self, line: impl AsRef<str>) {
        self.output.push_str(line.as_ref());
        self.output.push('\n');
    }

    pub(crate) fn emit_push(&mut self, segment: &str, index: u16) {
        self.emit(format!("push {segment} {index}"));
    }

    pub(crate) fn emit_pop(&mut self, segment: &str, index: u16) {
        self.emit(format!("pop {segment} {index}"));
    }

    pub(crate) fn emit_call(&mut self, class_name: &str, name: &str, argument_count: u16) {
        self.emit(format!("call {class_name}.{name} {argument_count}"));
    }
}

#[cfg(test)]
mod edge_cases;
