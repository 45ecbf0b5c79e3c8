use super::{Device, Halt, Operation, Runtime, Val};
use crate::error;
use crate::lang::ast::{AssignOp, Expression, Statement};
use crate::lang::{Ident, InternalError};

type Result<T> = std::result::Result<T, Halt>;

impl<D: Device> Runtime<D> {
    /// Runs statements in order; the first halt abandons the rest.
    pub(super) fn exec_block(&mut self, statements: &[Statement]) -> Result<()> {
        for statement in statements {
            self.exec(statement)?;
        }
        Ok(())
    }

    fn exec(&mut self, statement: &Statement) -> Result<()> {
        use Statement::*;
        match statement {
            Assign(ident, op, expr) => self.exec_assign(ident, *op, expr),
            Goto(expr) => self.exec_goto(expr),
            If(predicate, then_stmts, else_stmts) => {
                if self.eval(predicate)?.is_truthy() {
                    self.exec_block(then_stmts)
                } else {
                    self.exec_block(else_stmts)
                }
            }
            Comment(_) => Ok(()),
            Increment(expr) => {
                if !expr.is_increment() {
                    return Err(InternalError::NotAStatement.into());
                }
                self.eval(expr)?;
                Ok(())
            }
        }
    }

    fn exec_assign(&mut self, ident: &Ident, op: AssignOp, expr: &Expression) -> Result<()> {
        let val = self.eval(expr)?;
        let val = match op {
            AssignOp::Assign => val,
            AssignOp::Add => Operation::sum(self.fetch(ident)?, val)?,
            AssignOp::Subtract => Operation::subtract(self.fetch(ident)?, val)?,
            AssignOp::Multiply => Operation::multiply(self.fetch(ident)?, val)?,
            AssignOp::Divide => Operation::divide(self.fetch(ident)?, val)?,
            AssignOp::Modulus => Operation::modulus(self.fetch(ident)?, val)?,
        };
        self.assign(ident, val)
    }

    /// Leaves the counter one short of the target; the end-of-line
    /// advance lands on it.
    fn exec_goto(&mut self, expr: &Expression) -> Result<()> {
        let target = match self.eval(expr)? {
            Val::Number(n) if !n.is_nan() => n.trunc(),
            val => return Err(error!(InvalidJump; format!("\"{}\" IS NOT A LINE", val)).into()),
        };
        let ceiling = self.config.jump_ceiling.max(1);
        let line = if target < 1.0 {
            1
        } else if target > ceiling as f64 {
            ceiling
        } else {
            target as usize
        };
        if line as f64 != target {
            tracing::trace!(requested = target, line, "jump clamped");
            self.log.push(
                self.current,
                error!(JumpClamped; format!("{} -> {}", target, line)),
            );
        }
        self.pc = line - 1;
        Ok(())
    }
}
