use crate::lang::Line;
use std::collections::BTreeSet;
use std::rc::Rc;

/// The lines a machine steps through, numbered from 1.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new(lines: Vec<Line>) -> Program {
        Program { lines }
    }

    pub fn line(&self, number: usize) -> Option<&Line> {
        match number {
            0 => None,
            n => self.lines.get(n - 1),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every device field the program references.
    pub fn fields(&self) -> BTreeSet<Rc<str>> {
        self.lines.iter().flat_map(|line| line.fields()).collect()
    }
}

impl From<Vec<Line>> for Program {
    fn from(lines: Vec<Line>) -> Program {
        Program::new(lines)
    }
}
