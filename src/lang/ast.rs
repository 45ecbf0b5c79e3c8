use super::{Ident, InternalError};
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Assign(Ident, AssignOp, Expression),
    Goto(Expression),
    If(Expression, Vec<Statement>, Vec<Statement>),
    Comment(Rc<str>),
    Increment(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(Rc<str>),
    String(Rc<str>),
    Var(Ident),
    Keyword(Keyword, Box<Expression>),
    PreIncrement(Box<Expression>),
    PreDecrement(Box<Expression>),
    PostIncrement(Box<Expression>),
    PostDecrement(Box<Expression>),
    Power(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Modulus(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    NotEqual(Box<Expression>, Box<Expression>),
    Less(Box<Expression>, Box<Expression>),
    LessEqual(Box<Expression>, Box<Expression>),
    Greater(Box<Expression>, Box<Expression>),
    GreaterEqual(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn is_increment(&self) -> bool {
        use Expression::*;
        matches!(
            self,
            PreIncrement(_) | PreDecrement(_) | PostIncrement(_) | PostDecrement(_)
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Not,
    Abs,
    Cos,
    Sin,
    Tan,
    Acos,
    Asin,
    Atan,
    Sqrt,
}

impl std::str::FromStr for Keyword {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Keyword, InternalError> {
        use Keyword::*;
        match s.to_ascii_lowercase().as_str() {
            "not" => Ok(Not),
            "abs" => Ok(Abs),
            "cos" => Ok(Cos),
            "sin" => Ok(Sin),
            "tan" => Ok(Tan),
            "acos" => Ok(Acos),
            "asin" => Ok(Asin),
            "atan" => Ok(Atan),
            "sqrt" => Ok(Sqrt),
            _ => Err(InternalError::UnknownKeyword(s.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AssignOp {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl std::str::FromStr for AssignOp {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<AssignOp, InternalError> {
        use AssignOp::*;
        match s {
            "=" => Ok(Assign),
            "+=" => Ok(Add),
            "-=" => Ok(Subtract),
            "*=" => Ok(Multiply),
            "/=" => Ok(Divide),
            "%=" => Ok(Modulus),
            _ => Err(InternalError::UnknownOperator(s.to_string())),
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_ident(&mut self, _: &Ident) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Ident {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_ident(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Comment(_) => {}
            Assign(ident, _, expr) => {
                ident.accept(visitor);
                expr.accept(visitor);
            }
            Goto(expr) | Increment(expr) => {
                expr.accept(visitor);
            }
            If(predicate, vec_stmt1, vec_stmt2) => {
                predicate.accept(visitor);
                for stmt in vec_stmt1 {
                    stmt.accept(visitor);
                }
                for stmt in vec_stmt2 {
                    stmt.accept(visitor);
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Number(_) | String(_) => {}
            Var(ident) => {
                ident.accept(visitor);
            }
            Keyword(_, expr)
            | PreIncrement(expr)
            | PreDecrement(expr)
            | PostIncrement(expr)
            | PostDecrement(expr) => expr.accept(visitor),
            Power(expr1, expr2)
            | Multiply(expr1, expr2)
            | Divide(expr1, expr2)
            | Modulus(expr1, expr2)
            | Add(expr1, expr2)
            | Subtract(expr1, expr2)
            | Equal(expr1, expr2)
            | NotEqual(expr1, expr2)
            | Less(expr1, expr2)
            | LessEqual(expr1, expr2)
            | Greater(expr1, expr2)
            | GreaterEqual(expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!("SQRT".parse::<Keyword>(), Ok(Keyword::Sqrt));
        assert_eq!("not".parse::<Keyword>(), Ok(Keyword::Not));
        assert_eq!(
            "ln".parse::<Keyword>(),
            Err(InternalError::UnknownKeyword("ln".to_string()))
        );
    }

    #[test]
    fn test_assign_op_from_str() {
        assert_eq!("%=".parse::<AssignOp>(), Ok(AssignOp::Modulus));
        assert_eq!(
            "^=".parse::<AssignOp>(),
            Err(InternalError::UnknownOperator("^=".to_string()))
        );
    }

    #[derive(Default)]
    struct Counter {
        statements: usize,
        expressions: usize,
        idents: usize,
    }

    impl Visitor for Counter {
        fn visit_statement(&mut self, _: &Statement) {
            self.statements += 1;
        }
        fn visit_ident(&mut self, _: &Ident) {
            self.idents += 1;
        }
        fn visit_expression(&mut self, _: &Expression) {
            self.expressions += 1;
        }
    }

    #[test]
    fn test_visitor_walks_if_branches() {
        // if x == 0 then y = 1 else :door++ end
        let stmt = Statement::If(
            Expression::Equal(
                Box::new(Expression::Var(Ident::new("x"))),
                Box::new(Expression::Number("0".into())),
            ),
            vec![Statement::Assign(
                Ident::new("y"),
                AssignOp::Assign,
                Expression::Number("1".into()),
            )],
            vec![Statement::Increment(Expression::PostIncrement(Box::new(
                Expression::Var(Ident::new(":door")),
            )))],
        );
        let mut counter = Counter::default();
        stmt.accept(&mut counter);
        assert_eq!(counter.statements, 3);
        assert_eq!(counter.expressions, 6);
        assert_eq!(counter.idents, 3);
    }
}
