use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime value
///
/// YOLOL has one numeric kind and strings. Comparisons and `not`
/// produce the numbers `1` and `0`; there is no boolean.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(Rc<str>),
}

impl Val {
    pub fn to_number(&self) -> Result<f64> {
        match self {
            Val::Number(n) => Ok(*n),
            Val::String(s) => match s.trim().parse::<f64>() {
                Ok(n) => Ok(n),
                Err(_) => Err(error!(TypeMismatch; format!("\"{}\" IS NOT A NUMBER", s))),
            },
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Val::Number(n) => *n != 0.0,
            Val::String(_) => true,
        }
    }
}

impl Default for Val {
    fn default() -> Val {
        Val::Number(0.0)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Val {
        Val::Number(n)
    }
}

impl From<i32> for Val {
    fn from(n: i32) -> Val {
        Val::Number(n.into())
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        if b {
            Val::Number(1.0)
        } else {
            Val::Number(0.0)
        }
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::String(s.into())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Val {
        Val::String(s.into())
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Val::from(3).to_string(), "3");
        assert_eq!(Val::from(2.5).to_string(), "2.5");
        assert_eq!(Val::from(-0.25).to_string(), "-0.25");
        assert_eq!(Val::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Val::from(" 42 ").to_number(), Ok(42.0));
        assert_eq!(Val::from(7).to_number(), Ok(7.0));
        assert!(Val::from("door").to_number().is_err());
    }

    #[test]
    fn test_truthy() {
        assert!(!Val::default().is_truthy());
        assert!(Val::from(-1).is_truthy());
        assert!(Val::from("").is_truthy());
        assert!(Val::from("0").is_truthy());
    }
}
