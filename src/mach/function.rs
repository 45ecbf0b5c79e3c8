use super::{Operation, Val};
use crate::lang::{ast::Keyword, Error};

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    pub fn call(keyword: Keyword, val: Val) -> Result<Val> {
        use Keyword::*;
        match keyword {
            Not => Function::not(val),
            Abs => Function::math(val, f64::abs),
            Cos => Function::math(val, f64::cos),
            Sin => Function::math(val, f64::sin),
            Tan => Function::math(val, f64::tan),
            Acos => Function::math(val, f64::acos),
            Asin => Function::math(val, f64::asin),
            Atan => Function::math(val, f64::atan),
            Sqrt => Function::math(val, f64::sqrt),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Operation::numbers_equal(n, 0.0).into()),
            Val::String(_) => Ok(Val::Number(0.0)),
        }
    }

    fn math(val: Val, f: fn(f64) -> f64) -> Result<Val> {
        Ok(Val::Number(f(val.to_number()?)))
    }
}
