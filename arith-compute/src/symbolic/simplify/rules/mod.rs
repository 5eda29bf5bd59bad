//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. The rules for each operator are tried in order, and the first one that
//! applies wins.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod sub;

use arith_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    token::op::BinOpKind,
};
use crate::symbolic::{error::kind::DivisionByZero, step_collector::StepCollector};
use rug::Integer;
use super::step::Step;

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side of the expression.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Binary,
    op: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if expr.op == op {
        f(&expr.lhs, &expr.rhs)
    } else {
        None
    }
}

/// If both operands of the expression are integers, calls the given transformation function
/// with them.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_integers(
    expr: &Binary,
    op: BinOpKind,
    f: impl Fn(&Integer, &Integer) -> Option<Expr>,
) -> Option<Expr> {
    do_binary(expr, op, |lhs, rhs| {
        f(lhs.as_integer()?, rhs.as_integer()?)
    })
}

/// Returns true if both expressions are the same variable.
pub(crate) fn same_variable(lhs: &Expr, rhs: &Expr) -> bool {
    lhs.is_symbol() && lhs == rhs
}

/// Returns true if the expression is the given integer.
pub(crate) fn is_int(expr: &Expr, n: i32) -> bool {
    expr.as_integer().map_or(false, |int| *int == n)
}

/// Applies all rules for the operator of the expression.
pub fn all(
    expr: &Binary,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, DivisionByZero> {
    Ok(match expr.op {
        BinOpKind::Add => add::all(expr, step_collector),
        BinOpKind::Sub => sub::all(expr, step_collector),
        BinOpKind::Mul => multiply::all(expr, step_collector),
        BinOpKind::Div => divide::all(expr, step_collector)?,
    })
}
