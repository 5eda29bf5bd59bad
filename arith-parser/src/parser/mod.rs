pub mod ast;
pub mod error;
pub mod fmt;
pub mod infix;
pub mod postfix;
pub mod token;

use ast::{expr::Expr, literal::int_from_str};
use error::{kind, Error};
use log::trace;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use token::op::BinOpKind;

pub use infix::parse_infix;
pub use postfix::parse_postfix;

/// A high-level parser for arithmetic expressions. This is the type to use to parse a piece of
/// source code into an expression tree.
///
/// The source is split into whitespace-delimited tokens up front; the same tokens can then be
/// parsed as either a postfix or an infix expression.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is parsing.
    tokens: Box<[Token<'source>]>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
        }
    }

    /// Create a new parser for a sequence of tokens that were already split on whitespace.
    ///
    /// Error spans refer to the tokens joined by single spaces.
    pub fn from_words<S: AsRef<str>>(words: &'source [S]) -> Self {
        Self {
            tokens: Token::from_words(words).into_boxed_slice(),
        }
    }

    /// Returns the tokens of the source.
    pub fn tokens(&self) -> &[Token<'source>] {
        &self.tokens
    }

    /// Parses the tokens as an expression in postfix notation, such as `3 4 + 2 *`.
    pub fn try_parse_postfix(&self) -> Result<Expr, Error> {
        parse_postfix(&self.tokens)
    }

    /// Parses the tokens as an expression in infix notation, such as `( 3 + 4 ) * 2`.
    pub fn try_parse_infix(&self) -> Result<Expr, Error> {
        parse_infix(&self.tokens)
    }
}

/// The precedence of an entry on the operator stack of the infix parser, in order from lowest
/// precedence (reduced last) to highest precedence (reduced first).
///
/// A closing parenthesis never reaches the operator stack, so it has no precedence here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of an opening parenthesis `(`, which is lower than any operator, so that no
    /// operator is ever reduced past it.
    Group,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,
}

/// An operand on the operand stack, along with the region of the source code it was parsed
/// from.
#[derive(Debug)]
struct Operand {
    expr: Expr,
    span: Range<usize>,
}

impl Operand {
    /// Creates a variable or integer literal operand from the given token.
    fn parse(token: &Token) -> Result<Self, Error> {
        let expr = if token.kind == TokenKind::Name {
            Expr::symbol(token.lexeme)
        } else {
            let int = int_from_str(token.lexeme).ok_or_else(|| Error::new(
                vec![token.span.clone()],
                kind::InvalidInteger { lexeme: token.lexeme.to_owned() },
            ))?;
            Expr::integer(int)
        };

        Ok(Self {
            expr,
            span: token.span.clone(),
        })
    }
}

/// Pops the two operands of `op` off the stack (the first popped is the right-hand side) and
/// pushes the binary expression built from them.
fn reduce(
    operands: &mut Vec<Operand>,
    op: BinOpKind,
    op_span: Range<usize>,
    postfix: bool,
) -> Result<(), Error> {
    let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
        return Err(Error::new(vec![op_span], kind::MissingOperand { op: op.symbol(), postfix }));
    };

    let span = lhs.span.start.min(op_span.start)..rhs.span.end.max(op_span.end);
    let expr = Expr::binary(op, lhs.expr, rhs.expr);
    trace!("reduced `{}` to {}", op, expr);
    operands.push(Operand { expr, span });
    Ok(())
}

/// Returns the single expression remaining on the operand stack.
fn finish(mut operands: Vec<Operand>) -> Result<Expr, Error> {
    match operands.len() {
        0 => Err(Error::new(vec![0..0], kind::EmptyExpression)),
        1 => Ok(operands.remove(0).expr),
        len => {
            let spans = operands[..len - 1]
                .iter()
                .map(|operand| operand.span.clone())
                .collect();
            Err(Error::new(spans, kind::ExtraOperands { unused: len - 1 }))
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn same_tree_from_both_notations() {
        let postfix = Parser::new("a b c * + d -").try_parse_postfix().unwrap();
        let infix = Parser::new("a + b * c - d").try_parse_infix().unwrap();
        assert_eq!(postfix, infix);
        assert_eq!(postfix.to_infix(), "((a+(b*c))-d)");
    }

    #[test]
    fn from_words() {
        let words = vec!["(".to_string(), "3".into(), "+".into(), "4".into(), ")".into(), "*".into(), "2".into()];
        let expr = Parser::from_words(&words).try_parse_infix().unwrap();
        assert_eq!(expr, Expr::mul(
            Expr::add(Expr::integer(3), Expr::integer(4)),
            Expr::integer(2),
        ));
    }

    #[test]
    fn error_spans_refer_to_joined_words() {
        let words = ["3", "4", "5", "+"];
        let err = Parser::from_words(&words).try_parse_postfix().unwrap_err();
        assert!(err.is::<kind::ExtraOperands>());
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn report() {
        let source = "1 + 2x";
        let err = Parser::new(source).try_parse_infix().unwrap_err();
        let mut buf = Vec::new();
        err.write_report("input", source, &mut buf).unwrap();

        let text = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(text.contains("invalid operand `2x`"));
        assert!(text.contains("this is not an integer or a variable"));
    }
}
