//! Simplification rules for quotients.

use arith_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    token::op::BinOpKind,
};
use crate::symbolic::{
    error::kind::DivisionByZero,
    simplify::{rules::{do_binary, is_int, same_variable}, step::Step},
    step_collector::StepCollector,
};
use rug::Integer;

/// `7/2 = 3`
/// `-7/2 = -3`
///
/// Returns an error if the divisor is zero.
pub fn divide_integers(
    expr: &Binary,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, DivisionByZero> {
    let (BinOpKind::Div, Some(lhs), Some(rhs)) = (expr.op, expr.lhs.as_integer(), expr.rhs.as_integer()) else {
        return Ok(None);
    };

    if rhs.is_zero() {
        return Err(DivisionByZero);
    }

    step_collector.push(Step::FoldConstants);
    Ok(Some(Expr::integer(Integer::from(lhs / rhs))))
}

/// `0/a = 0`
pub fn divide_zero(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, _| {
        is_int(lhs, 0).then(|| Expr::integer(0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        is_int(rhs, 1).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `a/a = 1`, where `a` is a variable
pub fn divide_self(expr: &Binary, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        same_variable(lhs, rhs).then(|| Expr::integer(1))
    })?;

    step_collector.push(Step::DivideSelf);
    Some(opt)
}

/// Applies all division rules.
pub fn all(
    expr: &Binary,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Option<Expr>, DivisionByZero> {
    if let Some(folded) = divide_integers(expr, step_collector)? {
        return Ok(Some(folded));
    }

    Ok(divide_zero(expr, step_collector)
        .or_else(|| divide_one(expr, step_collector))
        .or_else(|| divide_self(expr, step_collector)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn quotient(lhs: Expr, rhs: Expr) -> Binary {
        Binary::new(BinOpKind::Div, lhs, rhs)
    }

    #[test]
    fn integers_truncate() {
        let expr = quotient(Expr::integer(-7), Expr::integer(2));
        assert_eq!(all(&expr, &mut ()), Ok(Some(Expr::integer(-3))));
    }

    #[test]
    fn integer_divisor_zero() {
        let expr = quotient(Expr::integer(5), Expr::integer(0));
        assert_eq!(all(&expr, &mut ()), Err(DivisionByZero));

        let expr = quotient(Expr::integer(0), Expr::integer(0));
        assert_eq!(all(&expr, &mut ()), Err(DivisionByZero));
    }

    #[test]
    fn identities() {
        let x = Expr::symbol("x");
        let mut steps = Vec::new();
        assert_eq!(all(&quotient(Expr::integer(0), x.clone()), &mut steps), Ok(Some(Expr::integer(0))));
        assert_eq!(all(&quotient(x.clone(), Expr::integer(1)), &mut steps), Ok(Some(x.clone())));
        assert_eq!(all(&quotient(x.clone(), x.clone()), &mut steps), Ok(Some(Expr::integer(1))));
        assert_eq!(steps, vec![Step::DivideZero, Step::DivideOne, Step::DivideSelf]);
    }

    #[test]
    fn not_applicable() {
        let expr = quotient(Expr::symbol("x"), Expr::integer(0));
        assert_eq!(all(&expr, &mut ()), Ok(None));

        let expr = quotient(Expr::integer(1), Expr::symbol("x"));
        assert_eq!(all(&expr, &mut ()), Ok(None));
    }
}
