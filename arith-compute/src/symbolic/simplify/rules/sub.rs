//! Simplification rules for differences.

use arith_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    token::op::BinOpKind,
};
use crate::symbolic::{
    simplify::{rules::{do_binary, do_integers, is_int, same_variable}, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;

/// `2-3 = -1`
pub fn sub_integers(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_integers(expr, BinOpKind::Sub, |lhs, rhs| {
        Some(Expr::integer(Integer::from(lhs - rhs)))
    })?;

    step_collector.push(Step::FoldConstants);
    Some(opt)
}

/// `0-a = a`
///
/// The result is `a`, not `-a`. Evaluating the result can therefore give a different value than
/// evaluating the input.
pub fn zero_sub(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        is_int(lhs, 0).then(|| rhs.clone())
    })?;

    step_collector.push(Step::ZeroSub);
    Some(opt)
}

/// `a-0 = a`
pub fn sub_zero(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        is_int(rhs, 0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubZero);
    Some(opt)
}

/// `a-a = 0`, where `a` is a variable
pub fn sub_self(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        same_variable(lhs, rhs).then(|| Expr::integer(0))
    })?;

    step_collector.push(Step::SubSelf);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    sub_integers(expr, step_collector)
        .or_else(|| zero_sub(expr, step_collector))
        .or_else(|| sub_zero(expr, step_collector))
        .or_else(|| sub_self(expr, step_collector))
}
