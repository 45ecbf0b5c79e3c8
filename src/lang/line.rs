use super::ast::*;
use super::{Error, Ident};
use std::collections::BTreeSet;
use std::rc::Rc;

/// One addressable line of a chip program as delivered by the parser.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Line {
    errors: Vec<Error>,
    statements: Vec<Statement>,
}

impl Line {
    pub fn new(statements: Vec<Statement>) -> Line {
        Line {
            errors: vec![],
            statements,
        }
    }

    /// A line that failed to parse. It is never executed.
    pub fn with_errors(errors: Vec<Error>) -> Line {
        Line {
            errors,
            statements: vec![],
        }
    }

    pub fn empty() -> Line {
        Line::default()
    }

    pub fn is_executable(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Device fields referenced anywhere on this line, without the sigil.
    pub fn fields(&self) -> BTreeSet<Rc<str>> {
        let mut visitor = FieldVisitor::default();
        for statement in &self.statements {
            statement.accept(&mut visitor);
        }
        visitor.fields
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: BTreeSet<Rc<str>>,
}

impl Visitor for FieldVisitor {
    fn visit_ident(&mut self, ident: &Ident) {
        if let Ident::Field(name) = ident {
            self.fields.insert(name.clone());
        }
    }
}
