//! Edge case tests for hackc-sem

#[cfg(test)]
mod tests {
    use crate::{ClassScope, SemError, SubroutineScope};
    use hackc_lex::{Token, TokenKind};
    use hackc_util::Symbol;

    fn tok(text: &str) -> Token {
        Token::new(TokenKind::Identifier, Symbol::intern(text), 1)
    }

    #[test]
    fn class_scope_starts_empty() {
        let class = ClassScope::new();
        assert_eq!(class.field_count(), 0);
        assert_eq!(class.static_count(), 0);
        assert!(class.lookup(Symbol::intern("x")).is_none());
    }

    #[test]
    fn duplicate_static_is_an_error() {
        let mut class = ClassScope::new();
        class
            .add_static(&tok("total"), Symbol::intern("int"))
            .unwrap();
        let err = class.add_static(&tok("total"), Symbol::intern("int"));
        assert!(matches!(err, Err(SemError::DuplicateDeclaration { .. })));
    }

    #[test]
    fn duplicate_argument_is_an_error() {
        let mut sub = SubroutineScope::new();
        sub.add_argument(&tok("n"), Symbol::intern("int")).unwrap();
        let err = sub.add_argument(&tok("n"), Symbol::intern("int"));
        assert!(matches!(err, Err(SemError::DuplicateDeclaration { .. })));
    }

    #[test]
    fn argument_and_local_with_same_name_is_an_error() {
        let mut sub = SubroutineScope::new();
        sub.add_argument(&tok("n"), Symbol::intern("int")).unwrap();
        let err = sub.add_local(&tok("n"), Symbol::intern("int"));
        assert!(matches!(err, Err(SemError::DuplicateDeclaration { .. })));
    }

    #[test]
    fn constructor_scope_has_no_implicit_this() {
        // Unlike methods, constructors and functions don't pre-register
        // `this` - only `method` subroutines do, via `new_method`.
        let sub = SubroutineScope::new();
        let class = ClassScope::new();
        assert!(sub.lookup(Symbol::intern("this"), &class).is_none());
    }

    #[test]
    fn field_variable_maps_to_this_segment() {
        let mut class = ClassScope::new();
        class.add_field(&tok("x"), Symbol::intern("int")).unwrap();
        let entry = class.lookup(Symbol::intern("x")).unwrap();
        assert_eq!(entry.kind.segment(), "this");
    }

    #[test]
    fn many_locals_get_sequential_indices() {
        let mut sub = SubroutineScope::new();
        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            sub.add_local(&tok(name), Symbol::intern("int")).unwrap();
            let class = ClassScope::new();
            assert_eq!(
                sub.lookup(Symbol::intern(name), &class).unwrap().index,
                i as u16
            );
        }
        assert_eq!(sub.local_count(), 4);
    }

    #[test]
    fn error_message_includes_declaration_line() {
        let mut class = ClassScope::new();
        let first = Token::new(TokenKind::Identifier, Symbol::intern("x"), 3);
        let second = Token::new(TokenKind::Identifier, Symbol::intern("x"), 7);
        class.add_field(&first, Symbol::intern("int")).unwrap();
        match class.add_field(&second, Symbol::intern("int")) {
            Err(SemError::DuplicateDeclaration { line, .. }) => assert_eq!(line, 7),
            _ => panic!("expected DuplicateDeclaration"),
        }
    }
}
