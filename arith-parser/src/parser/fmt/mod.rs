//! Rendering of expression trees in prefix, infix and postfix notation, and as a graph.
//!
//! Prefix and postfix renderings contain no separators and no parentheses, so they are meant
//! for display: `(3 + 4) * 12` renders as `*+3412` in prefix notation. The infix rendering wraps
//! every binary expression in parentheses, so precedence is never ambiguous.

mod dot;

use std::fmt::{Display, Formatter, Result};
use super::ast::expr::Expr;

pub use dot::{write_dot, Dot};

/// The notations an expression can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// The operator comes before its operands, as in `+34`.
    Prefix,

    /// The operator comes between its operands, as in `(3+4)`.
    Infix,

    /// The operator comes after its operands, as in `34+`.
    Postfix,
}

/// A wrapper type that implements [`Display`] for an expression in a chosen [`Notation`].
pub struct NotationFormatter<'a> {
    expr: &'a Expr,
    notation: Notation,
}

impl<'a> NotationFormatter<'a> {
    /// Wraps the expression to be displayed in the given notation.
    pub fn new(expr: &'a Expr, notation: Notation) -> Self {
        Self { expr, notation }
    }
}

impl Display for NotationFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_notation(self.expr, self.notation, f)
    }
}

/// Writes the expression in the given notation.
fn fmt_notation(expr: &Expr, notation: Notation, f: &mut Formatter) -> Result {
    match expr {
        Expr::Literal(literal) => write!(f, "{}", literal),
        Expr::Binary(binary) => match notation {
            Notation::Prefix => {
                write!(f, "{}", binary.op)?;
                fmt_notation(&binary.lhs, notation, f)?;
                fmt_notation(&binary.rhs, notation, f)
            },
            Notation::Infix => {
                write!(f, "(")?;
                fmt_notation(&binary.lhs, notation, f)?;
                write!(f, "{}", binary.op)?;
                fmt_notation(&binary.rhs, notation, f)?;
                write!(f, ")")
            },
            Notation::Postfix => {
                fmt_notation(&binary.lhs, notation, f)?;
                fmt_notation(&binary.rhs, notation, f)?;
                write!(f, "{}", binary.op)
            },
        },
    }
}

impl Expr {
    /// Wraps the expression in a [`NotationFormatter`], which implements [`Display`].
    pub fn as_notation(&self, notation: Notation) -> NotationFormatter<'_> {
        NotationFormatter::new(self, notation)
    }

    /// Renders the expression in prefix notation.
    pub fn to_prefix(&self) -> String {
        self.as_notation(Notation::Prefix).to_string()
    }

    /// Renders the expression in fully parenthesized infix notation. This is the same as the
    /// [`Display`] implementation of [`Expr`].
    pub fn to_infix(&self) -> String {
        self.as_notation(Notation::Infix).to_string()
    }

    /// Renders the expression in postfix notation.
    pub fn to_postfix(&self) -> String {
        self.as_notation(Notation::Postfix).to_string()
    }

    /// Returns the tokens of the expression written in the given notation, in order.
    ///
    /// Unlike the renderings, the tokens can be parsed back into the same tree with
    /// [`Parser::from_words`](crate::parser::Parser::from_words). Infix tokens include the
    /// parentheses around every binary expression.
    pub fn tokens(&self, notation: Notation) -> Vec<String> {
        let mut tokens = Vec::new();
        push_tokens(self, notation, &mut tokens);
        tokens
    }
}

/// Appends the tokens of the expression to `tokens`.
fn push_tokens(expr: &Expr, notation: Notation, tokens: &mut Vec<String>) {
    let Expr::Binary(binary) = expr else {
        tokens.push(expr.to_string());
        return;
    };

    let op = binary.op.symbol().to_string();
    match notation {
        Notation::Prefix => {
            tokens.push(op);
            push_tokens(&binary.lhs, notation, tokens);
            push_tokens(&binary.rhs, notation, tokens);
        },
        Notation::Infix => {
            tokens.push("(".to_string());
            push_tokens(&binary.lhs, notation, tokens);
            tokens.push(op);
            push_tokens(&binary.rhs, notation, tokens);
            tokens.push(")".to_string());
        },
        Notation::Postfix => {
            push_tokens(&binary.lhs, notation, tokens);
            push_tokens(&binary.rhs, notation, tokens);
            tokens.push(op);
        },
    }
}
