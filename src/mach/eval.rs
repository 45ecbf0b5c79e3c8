use super::{Device, Function, Halt, Operation, Runtime, Val};
use crate::error;
use crate::lang::{ast::Expression, Error, Ident, InternalError};

type Result<T> = std::result::Result<T, Halt>;

type BinaryOp = fn(Val, Val) -> std::result::Result<Val, Error>;

impl<D: Device> Runtime<D> {
    pub(super) fn eval(&mut self, expr: &Expression) -> Result<Val> {
        use Expression::*;
        match expr {
            Number(text) => match text.trim().parse::<f64>() {
                Ok(n) => Ok(Val::Number(n)),
                Err(_) => Err(InternalError::Literal(text.clone()).into()),
            },
            String(text) => Ok(Val::String(text.clone())),
            Var(ident) => self.fetch(ident),
            Keyword(keyword, expr) => {
                let val = self.eval(expr)?;
                Ok(Function::call(*keyword, val)?)
            }
            PreIncrement(expr) => self.increment(expr, Operation::sum, true),
            PreDecrement(expr) => self.increment(expr, Operation::subtract, true),
            PostIncrement(expr) => self.increment(expr, Operation::sum, false),
            PostDecrement(expr) => self.increment(expr, Operation::subtract, false),
            Power(lhs, rhs) => self.binary(lhs, rhs, Operation::power),
            Multiply(lhs, rhs) => self.binary(lhs, rhs, Operation::multiply),
            Divide(lhs, rhs) => self.binary(lhs, rhs, Operation::divide),
            Modulus(lhs, rhs) => self.binary(lhs, rhs, Operation::modulus),
            Add(lhs, rhs) => self.binary(lhs, rhs, Operation::sum),
            Subtract(lhs, rhs) => self.binary(lhs, rhs, Operation::subtract),
            Equal(lhs, rhs) => self.binary(lhs, rhs, Operation::equal),
            NotEqual(lhs, rhs) => self.binary(lhs, rhs, Operation::not_equal),
            Less(lhs, rhs) => self.binary(lhs, rhs, Operation::less),
            LessEqual(lhs, rhs) => self.binary(lhs, rhs, Operation::less_equal),
            Greater(lhs, rhs) => self.binary(lhs, rhs, Operation::greater),
            GreaterEqual(lhs, rhs) => self.binary(lhs, rhs, Operation::greater_equal),
        }
    }

    fn binary(&mut self, lhs: &Expression, rhs: &Expression, op: BinaryOp) -> Result<Val> {
        let lhs = self.eval(lhs)?;
        let rhs = self.eval(rhs)?;
        Ok(op(lhs, rhs)?)
    }

    /// Only a plain variable operand is written back.
    fn increment(&mut self, expr: &Expression, op: BinaryOp, prefix: bool) -> Result<Val> {
        let old = self.eval(expr)?;
        let new = op(old.clone(), Val::Number(1.0))?;
        if let Expression::Var(ident) = expr {
            self.assign(ident, new.clone())?;
        }
        if prefix {
            Ok(new)
        } else {
            Ok(old)
        }
    }

    pub(super) fn fetch(&self, ident: &Ident) -> Result<Val> {
        if ident.name().is_empty() {
            return Err(InternalError::EmptyIdent.into());
        }
        match self.vars.fetch(&self.device, ident) {
            Some(val) => Ok(val),
            None => Err(error!(AmbiguousField; ident.to_string()).into()),
        }
    }

    pub(super) fn assign(&mut self, ident: &Ident, val: Val) -> Result<()> {
        if ident.name().is_empty() {
            return Err(InternalError::EmptyIdent.into());
        }
        self.vars.store(&mut self.device, ident, val);
        Ok(())
    }
}
