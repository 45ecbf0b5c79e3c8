use super::*;
use crate::lang::ast::{Expression, Statement};
use crate::lang::{Ident, InternalError, Line};


fn machine() -> Runtime<FieldMap> {
    Runtime::new(FieldMap::new(), vec![Line::empty(); 3])
}

fn num(text: &str) -> Box<Expression> {
    Box::new(Expression::Number(text.into()))
}

fn var(name: &str) -> Box<Expression> {
    Box::new(Expression::Var(Ident::new(name)))
}
