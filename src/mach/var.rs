use super::{Device, Field, Val};
use crate::lang::Ident;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// Locals live here. Field identifiers never touch this map; they go
/// straight to the device.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Returns `None` only when the device reports a conflicting field.
    pub fn fetch<D: Device + ?Sized>(&self, device: &D, ident: &Ident) -> Option<Val> {
        match ident {
            Ident::Local(name) => Some(self.get(name)),
            Ident::Field(name) => match device.field(name) {
                Field::Value(val) => Some(val),
                Field::Missing => Some(Val::default()),
                Field::Conflict => None,
            },
        }
    }

    pub fn store<D: Device + ?Sized>(&mut self, device: &mut D, ident: &Ident, value: Val) {
        match ident {
            Ident::Local(name) => {
                match self.vars.get_mut(name) {
                    Some(var) => *var = value,
                    None => {
                        self.vars.insert(name.clone(), value);
                    }
                };
            }
            Ident::Field(name) => device.set_field(name, value),
        }
    }

    /// Local lookup; unset names read as `0`.
    pub fn get(&self, name: &str) -> Val {
        match self.vars.get(name) {
            Some(val) => val.clone(),
            None => Val::default(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Val)> {
        self.vars.iter().map(|(k, v)| (k.as_ref(), v))
    }
}
