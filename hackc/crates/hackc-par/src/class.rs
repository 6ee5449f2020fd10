//! Class-level and subroutine-level declarations: class var declarations,
//! subroutine declarations, parameter lists, and local var declarations.

use hackc_lex::TokenKind;
use hackc_sem::{ClassScope, SubroutineScope};
use hackc_util::Symbol;

use crate::error::ParseResult;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn compile_class_var_decs(&mut self, class: &mut ClassScope) -> ParseResult<()> {
        while self.peek_is_keyword("static") || self.peek_is_keyword("field") {
            let is_static = self.peek_is_keyword("static");
            self.bump()?; // 'static' | 'field'
            let ty = self.parse_type_name()?;

            loop {
                let name = self.expect_kind(TokenKind::Identifier)?;
                if is_static {
                    class.add_static(&name, ty)?;
                } else {
                    class.add_field(&name, ty)?;
                }
                if self.peek_is_symbol(",") {
                    self.bump()?;
                    continue;
                }
                break;
            }
            self.expect_symbol(";")?;
        }
        Ok(())
    }

    /// A Jack type is either a primitive keyword (`int`, `char`, `boolean`,
    /// `void`) or a class-name identifier; both lex as plain tokens whose
    /// text is exactly the type name, so no further parsing is needed.
    fn parse_type_name(&mut self) -> ParseResult<Symbol> {
        let tok = self.bump()?;
        Ok(tok.text)
    }

    pub(crate) fn compile_subroutines(&mut self, class: &ClassScope) -> ParseResult<()> {
        while self.peek_is_keyword("constructor")
            || self.peek_is_keyword("function")
            || self.peek_is_keyword("method")
        {
            self.compile_subroutine(class)?;
        }
        Ok(())
    }

    fn compile_subroutine(&mut self, class: &ClassScope) -> ParseResult<()> {
        let kind_tok = self.bump()?; // constructor | function | method
        let subroutine_kind = kind_tok.text.as_str().to_string();
        let _return_type = self.parse_type_name()?;
        let name_tok = self.expect_kind(TokenKind::Identifier)?;
        let subroutine_name = name_tok.text.as_str().to_string();

        let mut scope = if subroutine_kind == "method" {
            SubroutineScope::new_method(self.class_name)
        } else {
            SubroutineScope::new()
        };

        self.expect_symbol("(")?;
        self.compile_parameter_list(&mut scope)?;
        self.expect_symbol(")")?;

        self.expect_symbol("{")?;
        self.compile_var_decs(&mut scope)?;

        let local_count = scope.local_count();
        self.emit(format!(
            "function {}.{} {}",
            self.class_name.as_str(),
            subroutine_name,
            local_count
        ));

        match subroutine_kind.as_str() {
            "constructor" => {
                self.emit_push("constant", class.field_count());
                self.emit_call("Memory", "alloc", 1);
                self.emit_pop("pointer", 0);
            }
            "method" => {
                self.emit_push("argument", 0);
                self.emit_pop("pointer", 0);
            }
            _ => {}
        }

        self.compile_statements(&scope, class)?;
        self.expect_symbol("}")?;

        Ok(())
    }

    fn compile_parameter_list(&mut self, scope: &mut SubroutineScope) -> ParseResult<()> {
        if self.peek_is_symbol(")") {
            return Ok(());
        }
        loop {
            let ty = self.parse_type_name()?;
            let name = self.expect_kind(TokenKind::Identifier)?;
            scope.add_argument(&name, ty)?;

            if self.peek_is_symbol(",") {
                self.bump()?;
                continue;
            }
            break;
        }
        Ok(())
    }

    fn compile_var_decs(&mut self, scope: &mut SubroutineScope) -> ParseResult<()> {
        while self.peek_is_keyword("var") {
            self.bump()?;
            let ty = self.parse_type_name()?;

            loop {
                let name = self.expect_kind(TokenKind::Identifier)?;
                scope.add_local(&name, ty)?;
                if self.peek_is_symbol(",") {
                    self.bump()?;
                    continue;
                }
                break;
            }
            self.expect_symbol(";")?;
        }
        Ok(())
    }
}
