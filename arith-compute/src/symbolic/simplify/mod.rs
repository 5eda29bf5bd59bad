//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into an
//! equivalent one with fewer nodes where the rules in [`rules`] allow it. The input expression is
//! never modified.
//!
//! Simplification fails only if it has to fold a quotient of two integers whose divisor is zero.
//! The spans of the error point at the divisor in the infix rendering of the input expression.

pub mod rules;
pub mod step;

use arith_parser::parser::ast::{binary::Binary, expr::Expr};
use crate::symbolic::{error::Error, step_collector::StepCollector};
use log::{debug, trace};
use step::Step;

/// Base implementation of the simplification algorithm.
///
/// `offset` is the offset of `expr` in the infix rendering of the expression passed to
/// [`simplify_with`], used to point errors at the original source.
fn inner_simplify_with(
    expr: &Expr,
    offset: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let Expr::Binary(binary) = expr else {
        return Ok(expr.clone());
    };

    // simplify the operands first, so that the rules only see simplified operands
    let lhs = inner_simplify_with(&binary.lhs, binary.lhs_offset(offset), step_collector)?;
    let rhs = inner_simplify_with(&binary.rhs, binary.rhs_offset(offset), step_collector)?;
    let rebuilt = Binary::new(binary.op, lhs, rhs);

    match rules::all(&rebuilt, step_collector) {
        Ok(Some(simplified)) => {
            trace!("simplified {} to {}", rebuilt, simplified);
            Ok(simplified)
        },
        Ok(None) => Ok(Expr::Binary(rebuilt)),
        Err(kind) => Err(Error::new(vec![binary.rhs_span(offset)], kind)),
    }
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Simplify the given expression, reporting every rule applied to the given step collector, in
/// the order the rules are applied.
pub fn simplify_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    debug!("simplifying {}", expr);
    inner_simplify_with(expr, 0, step_collector)
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned. This is useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = simplify_with(expr, &mut steps)?;
    Ok((expr, steps))
}

#[cfg(test)]
mod tests {
    use arith_parser::parser::Parser;
    use crate::symbolic::error::kind::DivisionByZero;
    use pretty_assertions::assert_eq;
    use super::*;

    fn infix(source: &str) -> Expr {
        Parser::new(source).try_parse_infix().unwrap()
    }

    fn postfix(source: &str) -> Expr {
        Parser::new(source).try_parse_postfix().unwrap()
    }

    #[test]
    fn leaves_unchanged() {
        assert_eq!(simplify(&Expr::integer(-4)).unwrap(), Expr::integer(-4));
        assert_eq!(simplify(&Expr::symbol("x")).unwrap(), Expr::symbol("x"));
    }

    #[test]
    fn multiply_zero() {
        let expr = Expr::mul(Expr::integer(0), Expr::symbol("x"));
        assert_eq!(simplify(&expr).unwrap(), Expr::integer(0));
    }

    #[test]
    fn sub_self() {
        let expr = Expr::sub(Expr::symbol("x"), Expr::symbol("x"));
        assert_eq!(simplify(&expr).unwrap(), Expr::integer(0));
    }

    #[test]
    fn fold_nested() {
        assert_eq!(simplify(&infix("( 2 + 3 ) * ( 10 - 4 ) / 4")).unwrap(), Expr::integer(7));
    }

    #[test]
    fn operands_first() {
        // `x - x` becomes `0`, which makes the product zero
        let expr = postfix("x x - y z + *");
        assert_eq!(simplify(&expr).unwrap(), Expr::integer(0));

        // `y / y` becomes `1`, which is then removed from the product
        let expr = infix("( y / y ) * ( a + b )");
        assert_eq!(simplify(&expr).unwrap(), infix("a + b"));
    }

    #[test]
    fn zero_sub_quirk() {
        assert_eq!(simplify(&infix("0 - x")).unwrap(), Expr::symbol("x"));
    }

    #[test]
    fn integer_moves_left() {
        let simplified = simplify(&infix("x * y + 4")).unwrap();
        assert_eq!(simplified.to_infix(), "(4+(x*y))");
    }

    #[test]
    fn equal_subtrees_are_not_cancelled() {
        let expr = infix("( a + b ) - ( b + a )");
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn steps() {
        let (expr, steps) = simplify_with_steps(&infix("x * 1 + 0 - 2 * 3")).unwrap();
        assert_eq!(expr.to_infix(), "(x-6)");
        assert_eq!(steps, vec![Step::MultiplyOne, Step::AddZero, Step::FoldConstants]);
    }

    #[test]
    fn does_not_modify_input() {
        let expr = infix("x + 0");
        let copy = expr.clone();
        simplify(&expr).unwrap();
        assert_eq!(expr.to_infix(), copy.to_infix());
    }

    #[test]
    fn division_by_zero() {
        let expr = infix("x + 3 / ( 2 - 2 )");
        let err = simplify(&expr).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        // `(x+(3/(2-2)))`
        assert_eq!(&expr.to_string()[err.spans[0].clone()], "(2-2)");
    }

    #[test]
    fn variable_divisor_is_kept() {
        let expr = infix("x / ( y - y )");
        assert_eq!(simplify(&expr).unwrap(), Expr::div(Expr::symbol("x"), Expr::integer(0)));
    }
}
