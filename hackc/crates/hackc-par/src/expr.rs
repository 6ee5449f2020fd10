//! Expression and term compilation, subroutine-call resolution, and the
//! string-literal expansion into `String.new`/`appendChar` calls.

use hackc_lex::{Token, TokenKind};
use hackc_sem::{ClassScope, SubroutineScope, VarEntry};

use crate::error::{ParseError, ParseResult};
use crate::{binop_to_vm, Parser};

const BINARY_OPERATORS: &[&str] = &["+", "-", "*", "/", "&", "|", "<", ">", "="];

impl<'a> Parser<'a> {
    pub(crate) fn compile_expression(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        self.compile_term(scope, class)?;

        while let Some(tok) = self.current() {
            if tok.kind != TokenKind::Symbol || !BINARY_OPERATORS.contains(&tok.text.as_str()) {
                break;
            }
            let op = self.bump()?;
            self.compile_term(scope, class)?;
            self.emit(binop_to_vm(op.text.as_str()));
        }
        Ok(())
    }

    pub(crate) fn compile_expression_list(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<u16> {
        if self.peek_is_symbol(")") {
            return Ok(0);
        }
        let mut count = 0u16;
        loop {
            self.compile_expression(scope, class)?;
            count += 1;
            if self.peek_is_symbol(",") {
                self.bump()?;
                continue;
            }
            break;
        }
        Ok(count)
    }

    fn compile_term(&mut self, scope: &SubroutineScope, class: &ClassScope) -> ParseResult<()> {
        let tok = self.bump()?;

        match tok.kind {
            TokenKind::IntegerConstant => {
                // `int_value` is `None` both for lexemes too wide to fit a
                // `u64` and (unreachably, given the lexer's `\d+` fragment)
                // non-numeric text; either way it's out of Jack's 16-bit
                // `int` range, just like a value that parses fine but
                // exceeds `i16::MAX`.
                match tok.int_value() {
                    Some(value) if value <= i16::MAX as u64 => {
                        self.emit_push("constant", value as u16);
                    }
                    Some(value) => {
                        return Err(ParseError::IntegerOutOfRange {
                            value,
                            line: tok.line,
                        })
                    }
                    None => {
                        return Err(ParseError::IntegerOutOfRange {
                            value: u64::MAX,
                            line: tok.line,
                        })
                    }
                }
            }
            TokenKind::StringConstant => {
                self.write_string(tok.text.as_str());
            }
            TokenKind::Keyword => match tok.text.as_str() {
                "this" => self.emit_push("pointer", 0),
                "true" => {
                    self.emit_push("constant", 0);
                    self.emit("not");
                }
                "false" | "null" => self.emit_push("constant", 0),
                other => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "a term".to_string(),
                        found: other.to_string(),
                        line: tok.line,
                    })
                }
            },
            TokenKind::Identifier => {
                let var = scope.lookup(tok.text, class);

                if self.peek_is_symbol("[") {
                    let var = var.ok_or_else(|| ParseError::UndeclaredVariable {
                        name: tok.text.as_str().to_string(),
                        line: tok.line,
                    })?;
                    self.bump()?; // '['
                    self.compile_expression(scope, class)?;
                    self.emit_push(var.kind.segment(), var.index);
                    self.emit("add");
                    self.emit_pop("pointer", 1);
                    self.emit_push("that", 0);
                    self.expect_symbol("]")?;
                } else {
                    self.compile_subroutine_call(tok, var, scope, class)?;
                }
            }
            TokenKind::Symbol if tok.text.eq_str("(") => {
                self.compile_expression(scope, class)?;
                self.expect_symbol(")")?;
            }
            TokenKind::Symbol if tok.text.eq_str("-") => {
                self.compile_term(scope, class)?;
                self.emit("neg");
            }
            TokenKind::Symbol if tok.text.eq_str("~") => {
                self.compile_term(scope, class)?;
                self.emit("not");
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a term".to_string(),
                    found: tok.text.as_str().to_string(),
                    line: tok.line,
                })
            }
        }

        Ok(())
    }

    /// Resolves and compiles a `do` statement's leading call, parsed the
    /// same way a term's identifier branch resolves a call, just without a
    /// surrounding expression context.
    pub(crate) fn compile_subroutine_call_statement(
        &mut self,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        let tok = self.expect_kind(TokenKind::Identifier)?;
        let var = scope.lookup(tok.text, class);
        self.compile_subroutine_call(tok, var, scope, class)
    }

    /// `name(...)`, `name.other(...)`, or `instance.method(...)`,
    /// disambiguated by whether a `.` follows and whether `name` resolved
    /// to a declared variable: a dotted call on a known variable is an
    /// instance method call on that variable's declared type, a dotted call
    /// on an unknown name is a call on that name as a class, and an
    /// undotted call is an implicit method call on the current object.
    fn compile_subroutine_call(
        &mut self,
        name_tok: Token,
        var: Option<VarEntry>,
        scope: &SubroutineScope,
        class: &ClassScope,
    ) -> ParseResult<()> {
        let mut subroutine_name = name_tok.text.as_str().to_string();
        let mut subroutine_class = self.class_name.as_str().to_string();
        let mut argument_count = 0u16;
        let mut call_without_instance = true;

        if self.peek_is_symbol(".") {
            call_without_instance = false;
            self.bump()?; // '.'
            let method_tok = self.expect_kind(TokenKind::Identifier)?;
            subroutine_name = method_tok.text.as_str().to_string();

            if let Some(instance) = var {
                subroutine_class = instance.ty.as_str().to_string();
                argument_count = 1;
                self.emit_push(instance.kind.segment(), instance.index);
            } else {
                subroutine_class = name_tok.text.as_str().to_string();
            }
        }

        if self.peek_is_symbol("(") {
            if call_without_instance {
                argument_count = 1;
                self.emit_push("pointer", 0);
            }
            self.bump()?; // '('
            argument_count += self.compile_expression_list(scope, class)?;
            self.expect_symbol(")")?;
            self.emit_call(&subroutine_class, &subroutine_name, argument_count);
        } else if let Some(var) = var {
            self.emit_push(var.kind.segment(), var.index);
        }

        Ok(())
    }

    /// Expands a string constant into a freshly allocated `String` built one
    /// character at a time, the way the VM has no literal string pool.
    fn write_string(&mut self, text: &str) {
        self.emit_push("constant", text.len() as u16);
        self.emit_call("String", "new", 1);
        for ch in text.chars() {
            self.emit_push("constant", ch as u16);
            self.emit_call("String", "appendChar", 2);
        }
    }
}
