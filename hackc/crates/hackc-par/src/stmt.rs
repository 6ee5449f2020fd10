//! Statement compilation: let, if, while, do, return.

use hackc_lex::TokenKind;
use hackc_sem::{ClassScope, SubroutineScope};

use crate::error::{ParseError, ParseResult};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn compile_statements(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        loop {
            if self.peek_is_keyword("let") {
                self.compile_let_statement(scope, class)?;
            } else if self.peek_is_keyword("if") {
                self.compile_if_statement(scope, class)?;
            } else if self.peek_is_keyword("while") {
                self.compile_while_statement(scope, class)?;
            } else if self.peek_is_keyword("do") {
                self.compile_do_statement(scope, class)?;
            } else if self.peek_is_keyword("return") {
                self.compile_return_statement(scope, class)?;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn compile_let_statement(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        self.expect_keyword("let")?;
        let name_tok = self.expect_kind(TokenKind::Identifier)?;
        let var = scope
            .lookup(name_tok.text, class)
            .ok_or_else(|| ParseError::UndeclaredVariable {
                name: name_tok.text.as_str().to_string(),
                line: name_tok.line,
            })?;

        if self.peek_is_symbol("[") {
            self.bump()?;
            self.compile_expression(scope, class)?;
            self.expect_symbol("]")?;
            self.expect_symbol("=")?;

            self.emit_push(var.kind.segment(), var.index);
            self.emit("add");

            self.compile_expression(scope, class)?;
            self.emit_pop("temp", 0);
            self.emit_pop("pointer", 1);
            self.emit_push("temp", 0);
            self.emit_pop("that", 0);
        } else {
            self.expect_symbol("=")?;
            self.compile_expression(scope, class)?;
            self.emit_pop(var.kind.segment(), var.index);
        }

        self.expect_symbol(";")?;
        Ok(())
    }

    fn compile_if_statement(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        self.expect_keyword("if")?;
        self.expect_symbol("(")?;
        self.compile_expression(scope, class)?;
        self.expect_symbol(")")?;
        self.expect_symbol("{")?;

        let if_false = self.next_label();
        let if_true = self.next_label();

        self.emit("not");
        self.emit(format!("if-goto {if_false}"));

        self.compile_statements(scope, class)?;

        self.emit(format!("goto {if_true}"));
        self.emit(format!("label {if_false}"));

        self.expect_symbol("}")?;

        if self.peek_is_keyword("else") {
            self.bump()?;
            self.expect_symbol("{")?;
            self.compile_statements(scope, class)?;
            self.expect_symbol("}")?;
        }

        self.emit(format!("label {if_true}"));
        Ok(())
    }

    fn compile_while_statement(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        self.expect_keyword("while")?;
        self.expect_symbol("(")?;

        let loop_top = self.next_label();
        let loop_end = self.next_label();

        self.emit(format!("label {loop_top}"));
        self.compile_expression(scope, class)?;

        self.expect_symbol(")")?;
        self.expect_symbol("{")?;

        self.emit("not");
        self.emit(format!("if-goto {loop_end}"));

        self.compile_statements(scope, class)?;

        self.emit(format!("goto {loop_top}"));
        self.emit(format!("label {loop_end}"));

        self.expect_symbol("}")?;
        Ok(())
    }

    fn compile_do_statement(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        self.expect_keyword("do")?;
        self.compile_subroutine_call_statement(scope, class)?;
        self.emit_pop("temp", 0);
        self.expect_symbol(";")?;
        Ok(())
    }

    fn compile_return_statement(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        self.expect_keyword("return")?;

        if self.peek_is_symbol(";") {
            self.emit_push("constant", 0);
        } else {
            self.compile_expression(scope, class)?;
        }

        self.emit("return");
        self.expect_symbol(";")?;
        Ok(())
    }
}
