use super::Val;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Outcome of reading a device field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(Val),
    Missing,
    /// Several sources publish different values under the same name.
    Conflict,
}

/// ## External field store
///
/// The chip a machine runs on. Names are passed without the sigil.
/// Locking and consistency across machines sharing one store are the
/// implementor's business.

pub trait Device {
    fn field(&self, name: &str) -> Field;
    fn set_field(&mut self, name: &str, value: Val);
}

impl<D: Device + ?Sized> Device for &mut D {
    fn field(&self, name: &str) -> Field {
        (**self).field(name)
    }
    fn set_field(&mut self, name: &str, value: Val) {
        (**self).set_field(name, value)
    }
}

impl<D: Device + ?Sized> Device for Box<D> {
    fn field(&self, name: &str) -> Field {
        (**self).field(name)
    }
    fn set_field(&mut self, name: &str, value: Val) {
        (**self).set_field(name, value)
    }
}

impl<D: Device> Device for Rc<RefCell<D>> {
    fn field(&self, name: &str) -> Field {
        self.borrow().field(name)
    }
    fn set_field(&mut self, name: &str, value: Val) {
        self.borrow_mut().set_field(name, value)
    }
}

/// In-memory field store.
#[derive(Debug, Default, Clone)]
pub struct FieldMap {
    fields: HashMap<Rc<str>, Val>,
    conflicts: HashSet<Rc<str>>,
}

impl FieldMap {
    pub fn new() -> FieldMap {
        FieldMap::default()
    }

    pub fn get(&self, name: &str) -> Option<&Val> {
        self.fields.get(name)
    }

    pub fn insert<V: Into<Val>>(&mut self, name: &str, value: V) {
        self.fields.insert(name.into(), value.into());
    }

    /// Reads of `name` report [`Field::Conflict`] until it is written again.
    pub fn mark_conflict(&mut self, name: &str) {
        self.conflicts.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Device for FieldMap {
    fn field(&self, name: &str) -> Field {
        if self.conflicts.contains(name) {
            return Field::Conflict;
        }
        match self.fields.get(name) {
            Some(val) => Field::Value(val.clone()),
            None => Field::Missing,
        }
    }

    fn set_field(&mut self, name: &str, value: Val) {
        self.conflicts.remove(name);
        self.fields.insert(name.into(), value);
    }
}
