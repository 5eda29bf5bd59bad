//! Simplification rules for sums.

use arith_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    token::op::BinOpKind,
};
use crate::symbolic::{
    simplify::{rules::{do_binary, do_integers, is_int}, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;

/// `2+3 = 5`
pub fn add_integers(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_integers(expr, BinOpKind::Add, |lhs, rhs| {
        Some(Expr::integer(Integer::from(lhs + rhs)))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FoldConstants);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if is_int(lhs, 0) {
            Some(rhs.clone())
        } else if is_int(rhs, 0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a+3 = 3+a`
pub fn integer_first(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if !lhs.is_integer() && rhs.is_integer() {
            Some(Expr::add(rhs.clone(), lhs.clone()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::IntegerFirst);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression, except for
/// [`integer_first`], which only moves an integer to the left of the sum.
pub fn all(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_integers(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| integer_first(expr, step_collector))
}
