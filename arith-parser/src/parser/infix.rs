//! Parsing of expressions written in infix notation, using the shunting-yard algorithm.

use log::debug;
use crate::tokenizer::{Token, TokenKind};
use std::ops::Range;
use super::{
    ast::expr::Expr,
    error::{kind, Error},
    finish,
    reduce,
    token::op::BinOpKind,
    Operand,
    Precedence,
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// A binary operator waiting for its right-hand side.
    Op(BinOpKind),

    /// An opening parenthesis waiting for its closing parenthesis.
    OpenParen,
}

impl Pending {
    /// Returns the precedence of the stack entry.
    fn precedence(&self) -> Precedence {
        match self {
            Self::Op(op) => op.precedence(),
            Self::OpenParen => Precedence::Group,
        }
    }
}

/// Parses an expression in infix notation.
///
/// The parser keeps a stack of pending operators and a stack of operands. When an operator is
/// read, every pending operator with greater or equal precedence is reduced first, which makes
/// operators of equal precedence left-associative: `8 - 3 - 2` is `(8 - 3) - 2`. Parentheses are
/// only used for grouping and do not appear in the resulting tree.
///
/// A token such as `-5` is a negative integer literal, not the subtraction operator.
///
/// Operands and operators must alternate, so tokens written in postfix or prefix order, such as
/// `3 4 +` or `- 3 4`, are rejected.
pub fn parse_infix(tokens: &[Token]) -> Result<Expr, Error> {
    debug!("parsing {} tokens in infix notation", tokens.len());
    let mut operators: Vec<(Pending, Range<usize>)> = Vec::new();
    let mut operands = Vec::new();

    // operands and operators must alternate; an operand or `(` is expected at the start and after
    // an operator or `(`, an operator or `)` after an operand or `)`
    let mut expect_operand = true;
    let mut prev: Option<&Token> = None;

    for token in tokens {
        match token.kind {
            TokenKind::OpenParen => {
                if !expect_operand {
                    return Err(Error::new(vec![token.span.clone()], kind::MissingOperator));
                }
                operators.push((Pending::OpenParen, token.span.clone()));
            },
            TokenKind::CloseParen => {
                if expect_operand {
                    if let Some(prev) = prev {
                        if prev.kind == TokenKind::OpenParen {
                            return Err(Error::new(
                                vec![prev.span.start..token.span.end],
                                kind::EmptyParenthesis,
                            ));
                        }
                        if let Some(err) = missing_rhs(prev) {
                            return Err(err);
                        }
                    }
                }

                loop {
                    match operators.pop() {
                        Some((Pending::OpenParen, _)) => break,
                        Some((Pending::Op(op), span)) => reduce(&mut operands, op, span, false)?,
                        None => return Err(Error::new(
                            vec![token.span.clone()],
                            kind::UnclosedParenthesis { opening: false },
                        )),
                    }
                }
                expect_operand = false;
            },
            other => match BinOpKind::from_token(other) {
                Some(op) => {
                    if expect_operand {
                        return Err(Error::new(
                            vec![token.span.clone()],
                            kind::MissingOperand { op: op.symbol(), postfix: false },
                        ));
                    }

                    while let Some((top, _)) = operators.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }

                        if let Some((Pending::Op(top), span)) = operators.pop() {
                            reduce(&mut operands, top, span, false)?;
                        }
                    }
                    operators.push((Pending::Op(op), token.span.clone()));
                    expect_operand = true;
                },
                None => {
                    if !expect_operand {
                        return Err(Error::new(vec![token.span.clone()], kind::MissingOperator));
                    }
                    operands.push(Operand::parse(token)?);
                    expect_operand = false;
                },
            },
        }

        prev = Some(token);
    }

    if let Some(err) = prev.and_then(missing_rhs) {
        return Err(err);
    }

    while let Some((pending, span)) = operators.pop() {
        match pending {
            Pending::Op(op) => reduce(&mut operands, op, span, false)?,
            Pending::OpenParen => return Err(Error::new(
                vec![span],
                kind::UnclosedParenthesis { opening: true },
            )),
        }
    }

    finish(operands)
}

/// If the token is an operator, returns the error for the operator having no right-hand side.
fn missing_rhs(token: &Token) -> Option<Error> {
    let op = BinOpKind::from_token(token.kind)?;
    Some(Error::new(
        vec![token.span.clone()],
        kind::MissingOperand { op: op.symbol(), postfix: false },
    ))
}
