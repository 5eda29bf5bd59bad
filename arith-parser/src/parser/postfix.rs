//! Parsing of expressions written in postfix notation, such as `3 4 + 2 *`.

use log::debug;
use crate::tokenizer::Token;
use super::{ast::expr::Expr, error::Error, finish, reduce, token::op::BinOpKind, Operand};

/// Parses an expression in postfix notation, in a single left-to-right pass over the tokens.
///
/// Operands are pushed onto a stack. Each operator pops two operands (the first popped is the
/// right-hand side), and pushes the expression built from them. Exactly one expression must be
/// left on the stack at the end.
///
/// Parentheses have no meaning in postfix notation and are rejected as invalid operands.
pub fn parse_postfix(tokens: &[Token]) -> Result<Expr, Error> {
    debug!("parsing {} tokens in postfix notation", tokens.len());
    let mut operands = Vec::new();

    for token in tokens {
        match BinOpKind::from_token(token.kind) {
            Some(op) => reduce(&mut operands, op, token.span.clone(), true)?,
            None => operands.push(Operand::parse(token)?),
        }
    }

    finish(operands)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::{error::kind, Parser};

    fn parse(source: &str) -> Result<Expr, Error> {
        Parser::new(source).try_parse_postfix()
    }

    #[test]
    fn sum() {
        assert_eq!(parse("3 4 +").unwrap(), Expr::add(Expr::integer(3), Expr::integer(4)));
    }

    #[test]
    fn operand_order() {
        assert_eq!(
            parse("10 x -").unwrap(),
            Expr::sub(Expr::integer(10), Expr::symbol("x")),
        );
        assert_eq!(
            parse("a b c / /").unwrap(),
            Expr::div(Expr::symbol("a"), Expr::div(Expr::symbol("b"), Expr::symbol("c"))),
        );
    }

    #[test]
    fn nested() {
        assert_eq!(
            parse("1 2 + 3 4 - *").unwrap(),
            Expr::mul(
                Expr::add(Expr::integer(1), Expr::integer(2)),
                Expr::sub(Expr::integer(3), Expr::integer(4)),
            ),
        );
    }

    #[test]
    fn negative_literal() {
        assert_eq!(
            parse("-3 y *").unwrap(),
            Expr::mul(Expr::integer(-3), Expr::symbol("y")),
        );
    }

    #[test]
    fn single_operand() {
        assert_eq!(parse("42").unwrap(), Expr::integer(42));
        assert_eq!(parse("rate").unwrap(), Expr::symbol("rate"));
    }

    #[test]
    fn empty() {
        let err = parse("   ").unwrap_err();
        assert!(err.is::<kind::EmptyExpression>());
    }

    #[test]
    fn missing_operand() {
        let err = parse("3 +").unwrap_err();
        assert_eq!(err.downcast_kind::<kind::MissingOperand>(), Some(&kind::MissingOperand {
            op: "+",
            postfix: true,
        }));
        assert_eq!(err.spans, vec![2..3]);

        assert!(parse("*").unwrap_err().is::<kind::MissingOperand>());
    }

    #[test]
    fn extra_operands() {
        let err = parse("1 2 3 +").unwrap_err();
        assert_eq!(err.downcast_kind::<kind::ExtraOperands>(), Some(&kind::ExtraOperands { unused: 1 }));
    }

    #[test]
    fn invalid_operands() {
        for source in ["1 2.5 +", "( 1 2 + )", "3x 2 *", "1 2 %"] {
            let err = parse(source).unwrap_err();
            assert!(err.is::<kind::InvalidInteger>(), "{source}");
        }
    }
}
