#![allow(dead_code)]

use yolol::lang::ast::{AssignOp, Expression, Keyword, Statement};
use yolol::lang::{Ident, Line};
use yolol::mach::{FieldMap, Runtime, Val};

pub type Binary = fn(Box<Expression>, Box<Expression>) -> Expression;
pub type Unary = fn(Box<Expression>) -> Expression;

pub fn num(text: &str) -> Expression {
    Expression::Number(text.into())
}

pub fn string(text: &str) -> Expression {
    Expression::String(text.into())
}

pub fn var(name: &str) -> Expression {
    Expression::Var(Ident::new(name))
}

pub fn bin(op: Binary, lhs: Expression, rhs: Expression) -> Expression {
    op(Box::new(lhs), Box::new(rhs))
}

pub fn unary(op: Unary, expr: Expression) -> Expression {
    op(Box::new(expr))
}

pub fn keyword(name: &str, expr: Expression) -> Expression {
    let keyword: Keyword = name.parse().unwrap();
    Expression::Keyword(keyword, Box::new(expr))
}

pub fn set(name: &str, expr: Expression) -> Statement {
    Statement::Assign(Ident::new(name), AssignOp::Assign, expr)
}

pub fn update(name: &str, op: &str, expr: Expression) -> Statement {
    Statement::Assign(Ident::new(name), op.parse().unwrap(), expr)
}

pub fn goto(expr: Expression) -> Statement {
    Statement::Goto(expr)
}

pub fn if_else(predicate: Expression, then: Vec<Statement>, otherwise: Vec<Statement>) -> Statement {
    Statement::If(predicate, then, otherwise)
}

pub fn line(statements: Vec<Statement>) -> Line {
    Line::new(statements)
}

pub fn chip(lines: Vec<Line>) -> Runtime<FieldMap> {
    Runtime::new(FieldMap::new(), lines)
}

pub fn steps<D: yolol::mach::Device>(runtime: &mut Runtime<D>, count: usize) {
    for _ in 0..count {
        runtime.step();
    }
}

/// Runs a single line once and returns the local `x` afterwards.
pub fn eval_x(expr: Expression) -> Val {
    let mut r = chip(vec![line(vec![set("x", expr)])]);
    r.step();
    r.get_var("x").unwrap()
}

/// Records logged for `line`, rendered as text.
pub fn errors(runtime: &Runtime<FieldMap>, line: usize) -> Vec<String> {
    runtime.errors(line).iter().map(|e| e.to_string()).collect()
}
