//! Class-scope and subroutine-scope symbol tables.
//!
//! Jack has exactly two nesting levels: a class owns `static`/`field`
//! variables, and each subroutine owns `argument`/`local` variables on top of
//! that. There is no block scoping and no shadowing beyond a subroutine's
//! variables hiding class variables of the same name, so a fixed two-level
//! stack is enough - no general scope tree is needed.

use std::collections::HashMap;

use hackc_lex::Token;
use hackc_util::Symbol;

use crate::error::SemError;

/// The VM segment a declared variable's push/pop instructions target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Static,
    Field,
    Argument,
    Local,
}

impl StorageKind {
    /// The VM memory segment name this storage kind pushes and pops against.
    ///
    /// `Field` maps to `this`, not `field` - fields are accessed through the
    /// current object's base address, which the VM segment `this` already
    /// means once `pointer 0` has been set.
    pub fn segment(self) -> &'static str {
        match self {
            StorageKind::Static => "static",
            StorageKind::Field => "this",
            StorageKind::Argument => "argument",
            StorageKind::Local => "local",
        }
    }
}

/// A single declared variable: its storage kind, its Jack type name, and its
/// slot index within that storage kind's counter.
#[derive(Debug, Clone, Copy)]
pub struct VarEntry {
    pub kind: StorageKind,
    pub ty: Symbol,
    pub index: u16,
}

/// Class-level symbol table: `static` and `field` variables, each counted
/// independently.
#[derive(Debug, Default)]
pub struct ClassScope {
    vars: HashMap<Symbol, VarEntry>,
    static_count: u16,
    field_count: u16,
}

impl ClassScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_count(&self) -> u16 {
        self.field_count
    }

    pub fn static_count(&self) -> u16 {
        self.static_count
    }

    pub fn add_static(&mut self, name: &Token, ty: Symbol) -> Result<(), SemError> {
        self.insert(name, ty, StorageKind::Static)
    }

    pub fn add_field(&mut self, name: &Token, ty: Symbol) -> Result<(), SemError> {
        self.insert(name, ty, StorageKind::Field)
    }

    fn insert(&mut self, name: &Token, ty: Symbol, kind: StorageKind) -> Result<(), SemError> {
        if self.vars.contains_key(&name.text) {
            return Err(SemError::DuplicateDeclaration {
                name: name.text.as_str().to_string(),
                line: name.line,
            });
        }
        let index = match kind {
            StorageKind::Static => {
                let i = self.static_count;
                self.static_count += 1;
                i
            }
            StorageKind::Field => {
                let i = self.field_count;
                self.field_count += 1;
                i
            }
            _ => unreachable!("ClassScope only inserts static/field variables"),
        };
        self.vars.insert(name.text, VarEntry { kind, ty, index });
        Ok(())
    }

    pub fn lookup(&self, name: Symbol) -> Option<VarEntry> {
        self.vars.get(&name).copied()
    }
}

/// Subroutine-level symbol table: `argument` and `local` variables, each
/// counted independently. Falls back to the enclosing [`ClassScope`] on a
/// lookup miss.
#[derive(Debug, Default)]
pub struct SubroutineScope {
    vars: HashMap<Symbol, VarEntry>,
    argument_count: u16,
    local_count: u16,
}

impl SubroutineScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A method's scope starts with an implicit `this` argument bound to the
    /// class itself, occupying argument slot 0 before any declared parameter.
    pub fn new_method(class_name: Symbol) -> Self {
        let mut scope = Self::default();
        scope.vars.insert(
            Symbol::intern("this"),
            VarEntry {
                kind: StorageKind::Argument,
                ty: class_name,
                index: 0,
            },
        );
        scope.argument_count = 1;
        scope
    }

    pub fn argument_count(&self) -> u16 {
        self.argument_count
    }

    pub fn local_count(&self) -> u16 {
        self.local_count
    }

    pub fn add_argument(&mut self, name: &Token, ty: Symbol) -> Result<(), SemError> {
        self.insert(name, ty, StorageKind::Argument)
    }

    pub fn add_local(&mut self, name: &Token, ty: Symbol) -> Result<(), SemError> {
        self.insert(name, ty, StorageKind::Local)
    }

    fn insert(&mut self, name: &Token, ty: Symbol, kind: StorageKind) -> Result<(), SemError> {
        if self.vars.contains_key(&name.text) {
            return Err(SemError::DuplicateDeclaration {
                name: name.text.as_str().to_string(),
                line: name.line,
            });
        }
        let index = match kind {
            StorageKind::Argument => {
                let i = self.argument_count;
                self.argument_count += 1;
                i
            }
            StorageKind::Local => {
                let i = self.local_count;
                self.local_count += 1;
                i
            }
            _ => unreachable!("SubroutineScope only inserts argument/local variables"),
        };
        self.vars.insert(name.text, VarEntry { kind, ty, index });
        Ok(())
    }

    /// Resolves a name against this subroutine's variables first, then the
    /// enclosing class's `static`/`field` variables.
    pub fn lookup(&self, name: Symbol, class: &ClassScope) -> Option<VarEntry> {
        self.vars.get(&name).copied().or_else(|| class.lookup(name))
    }
}
