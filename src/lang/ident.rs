use std::rc::Rc;

/// Prefix marking an identifier as a device field.
pub const FIELD_SIGIL: char = ':';

/// A variable name with its namespace resolved.
///
/// Field names are kept without the sigil.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Local(Rc<str>),
    Field(Rc<str>),
}

impl Ident {
    pub fn new(spelling: &str) -> Ident {
        match spelling.strip_prefix(FIELD_SIGIL) {
            Some(name) => Ident::Field(name.into()),
            None => Ident::Local(spelling.into()),
        }
    }

    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Local(s) | Ident::Field(s) => s,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Ident::Field(_))
    }
}

impl From<&str> for Ident {
    fn from(spelling: &str) -> Ident {
        Ident::new(spelling)
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ident::Local(s) => write!(f, "{}", s),
            Ident::Field(s) => write!(f, "{}{}", FIELD_SIGIL, s),
        }
    }
}
