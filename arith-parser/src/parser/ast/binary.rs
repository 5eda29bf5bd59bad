use crate::parser::{ast::expr::Expr, token::op::BinOpKind};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Each operand is exclusively owned by the node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Creates a new binary expression.
    pub fn new(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    /// Returns the length of the fully parenthesized infix rendering of this expression.
    pub fn infix_len(&self) -> usize {
        // `(` + lhs + op + rhs + `)`
        self.lhs.infix_len() + self.rhs.infix_len() + 3
    }

    /// Given the offset of this expression in an infix rendering, returns the offset of the
    /// left-hand side.
    pub fn lhs_offset(&self, offset: usize) -> usize {
        offset + 1
    }

    /// Given the offset of this expression in an infix rendering, returns the offset of the
    /// right-hand side.
    pub fn rhs_offset(&self, offset: usize) -> usize {
        offset + 1 + self.lhs.infix_len() + 1
    }

    /// Given the offset of this expression in an infix rendering, returns the span of the
    /// right-hand side.
    pub fn rhs_span(&self, offset: usize) -> Range<usize> {
        let start = self.rhs_offset(offset);
        start..start + self.rhs.infix_len()
    }
}

/// Sums and products are compared without regard to the order of their operands. Differences
/// and quotients are compared positionally.
impl PartialEq for Binary {
    fn eq(&self, other: &Self) -> bool {
        if self.op != other.op {
            return false;
        }

        (self.lhs == other.lhs && self.rhs == other.rhs)
            || (self.op.is_commutative() && self.lhs == other.rhs && self.rhs == other.lhs)
    }
}

impl Eq for Binary {}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{}{})", self.lhs, self.op, self.rhs)
    }
}
