//! The binary operators that can appear in an expression.

use crate::{parser::Precedence, tokenizer::TokenKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    /// Addition, `+`. The result is a sum.
    Add,

    /// Subtraction, `-`. The result is a difference.
    Sub,

    /// Multiplication, `*`. The result is a product.
    Mul,

    /// Truncating integer division, `/`. The result is a quotient.
    Div,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns true if the operands of the operation can be swapped without changing its result.
    pub fn is_commutative(&self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }

    /// Returns the symbol used to write the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns the operator represented by the given token kind, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(BinOpKind::Mul.precedence() > BinOpKind::Add.precedence());
        assert_eq!(BinOpKind::Mul.precedence(), BinOpKind::Div.precedence());
        assert_eq!(BinOpKind::Add.precedence(), BinOpKind::Sub.precedence());
        assert!(BinOpKind::Sub.precedence() > Precedence::Group);
    }

    #[test]
    fn from_token() {
        assert_eq!(BinOpKind::from_token(TokenKind::Div), Some(BinOpKind::Div));
        assert_eq!(BinOpKind::from_token(TokenKind::OpenParen), None);
        assert_eq!(BinOpKind::from_token(TokenKind::Int), None);
    }
}
