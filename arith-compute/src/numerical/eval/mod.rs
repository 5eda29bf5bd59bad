mod binary;
mod literal;

use arith_parser::parser::ast::expr::Expr;
use rug::Integer;
use super::{ctxt::Ctxt, error::Error};

/// Any type that can be evaluated to produce an integer.
///
/// Spans of evaluation errors point into the infix rendering of the evaluated expression (its
/// [`Display`](std::fmt::Display) output), so a report can be built against `expr.to_string()`.
pub trait Eval {
    /// Evaluate the expression to produce an integer, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Integer, Error>;

    /// Evaluate the expression to produce an integer, using an empty context.
    fn eval_default(&self) -> Result<Integer, Error> {
        self.eval(&Ctxt::default())
    }
}

/// An expression that is evaluated as a part of a larger expression, whose infix rendering
/// starts at the given offset in the infix rendering of the whole expression.
pub(crate) trait EvalAt {
    fn eval_at(&self, ctxt: &Ctxt, offset: usize) -> Result<Integer, Error>;
}

impl EvalAt for Expr {
    fn eval_at(&self, ctxt: &Ctxt, offset: usize) -> Result<Integer, Error> {
        match self {
            Expr::Literal(literal) => literal.eval_at(ctxt, offset),
            Expr::Binary(binary) => binary.eval_at(ctxt, offset),
        }
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<Integer, Error> {
        self.eval_at(ctxt, 0)
    }
}

/// Evaluates the expression with the variable values in the given context.
///
/// This is the same as [`Eval::eval`].
pub fn evaluate(expr: &Expr, ctxt: &Ctxt) -> Result<Integer, Error> {
    expr.eval(ctxt)
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use arith_parser::parser::Parser;
    use crate::numerical::error::kind::{DivisionByZero, UndefinedVariable};
    use super::*;

    fn infix(source: &str) -> Expr {
        Parser::new(source).try_parse_infix().unwrap()
    }

    fn postfix(source: &str) -> Expr {
        Parser::new(source).try_parse_postfix().unwrap()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(postfix("3 4 +").eval_default().unwrap(), 7);
    }

    #[test]
    fn precedence() {
        assert_eq!(infix("3 + 4 * 2").eval_default().unwrap(), 11);
        assert_eq!(infix("( 3 + 4 ) * 2").eval_default().unwrap(), 14);
    }

    #[test]
    fn left_associative() {
        assert_eq!(infix("8 - 3 - 2").eval_default().unwrap(), 3);
        assert_eq!(infix("64 / 4 / 2").eval_default().unwrap(), 8);
    }

    #[test]
    fn truncating_division() {
        assert_eq!(postfix("7 2 /").eval_default().unwrap(), 3);
        assert_eq!(postfix("-7 2 /").eval_default().unwrap(), -3);
        assert_eq!(postfix("7 -2 /").eval_default().unwrap(), -3);
        assert_eq!(postfix("1 3 /").eval_default().unwrap(), 0);
    }

    #[test]
    fn variables() {
        let ctxt = Ctxt::from_iter([("x", 6), ("rate", -2)]);
        assert_eq!(infix("x * rate - x / 4").eval(&ctxt).unwrap(), -13);
        assert_eq!(evaluate(&infix("x + x"), &ctxt).unwrap(), 12);
    }

    #[test]
    fn no_overflow() {
        let ctxt = Ctxt::from_iter([("big", i64::MAX)]);
        let result = postfix("big big * big *").eval(&ctxt).unwrap();
        assert_eq!(result, Integer::from(i64::MAX) * Integer::from(i64::MAX) * Integer::from(i64::MAX));
    }

    #[test]
    fn undefined_variable() {
        let expr = infix("x + y");
        let err = expr.eval(&Ctxt::from_iter([("x", 1)])).unwrap_err();
        assert_eq!(
            err.downcast_kind::<UndefinedVariable>(),
            Some(&UndefinedVariable { name: "y".to_string() }),
        );

        // `(x+y)`
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn unbound_variable_is_not_zero() {
        assert!(postfix("a 0 *").eval_default().unwrap_err().is::<UndefinedVariable>());
    }

    #[test]
    fn division_by_zero() {
        let err = postfix("5 0 /").eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![3..4]);

        let expr = infix("1 + 12 / ( x - x )");
        let err = expr.eval(&Ctxt::from_iter([("x", 2)])).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        // `(1+(12/(x-x)))`
        assert_eq!(&expr.to_string()[err.spans[0].clone()], "(x-x)");
    }

    #[test]
    fn report() {
        let expr = infix("2 * z");
        let err = expr.eval_default().unwrap_err();
        let mut buf = Vec::new();
        err.write_report("expr", &expr.to_string(), &mut buf).unwrap();

        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("`z` is not defined"));
        assert!(text.contains("this variable"));
    }
}
