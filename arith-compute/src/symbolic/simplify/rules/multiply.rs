//! Simplification rules for products.

use arith_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    token::op::BinOpKind,
};
use crate::symbolic::{
    simplify::{rules::{do_binary, do_integers, is_int}, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;

/// `2*3 = 6`
pub fn multiply_integers(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_integers(expr, BinOpKind::Mul, |lhs, rhs| {
        Some(Expr::integer(Integer::from(lhs * rhs)))
    })?;

    step_collector.push(Step::FoldConstants);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if is_int(lhs, 1) {
            Some(rhs.clone())
        } else if is_int(rhs, 1) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (is_int(lhs, 0) || is_int(rhs, 0)).then(|| Expr::integer(0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_integers(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| multiply_zero(expr, step_collector))
}
