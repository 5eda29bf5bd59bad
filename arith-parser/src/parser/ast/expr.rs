//! The expression tree.
//!
//! # Equality
//!
//! Two expressions are compared **structurally**, with one relaxation: the operands of a sum or
//! a product may appear in either order. This means `a + b` and `b + a` are equal, but `a - b` and
//! `b - a` are not (unless `a` and `b` are themselves equal).
//!
//! Structural equality is a subset of semantic equality. `2 + 2` and `4` are never equal, and
//! neither are `(a + b) + c` and `a + (b + c)`. It never reports false positives, which is what
//! the simplifier relies on to cancel `x - x` and `x / x`.

use crate::parser::{
    ast::{binary::Binary, iter::ExprIter, literal::Literal},
    token::op::BinOpKind,
};
use rug::Integer;
use std::{collections::BTreeSet, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arithmetic expression over integers and variables.
///
/// Trees are finite and every node exclusively owns its children. Nothing in this crate or in
/// `arith-compute` mutates an existing tree; operations that rewrite a tree return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// An integer or a variable.
    Literal(Literal),

    /// A sum, difference, product, or quotient of two expressions.
    Binary(Binary),
}

impl Expr {
    /// Creates an integer literal.
    pub fn integer<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Literal(Literal::Integer(Integer::from(n)))
    }

    /// Creates a variable.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Literal(Literal::Symbol(name.into()))
    }

    /// Creates a binary expression from an operator and its two operands.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary(Binary::new(op, lhs, rhs))
    }

    /// Creates the sum `lhs + rhs`.
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Add, lhs, rhs)
    }

    /// Creates the difference `lhs - rhs`.
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Sub, lhs, rhs)
    }

    /// Creates the product `lhs * rhs`.
    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Mul, lhs, rhs)
    }

    /// Creates the quotient `lhs / rhs`.
    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOpKind::Div, lhs, rhs)
    }

    /// If the expression is an integer literal, returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Literal(Literal::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// If the expression is a variable, returns its name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Literal(Literal::Symbol(name)) => Some(name),
            _ => None,
        }
    }

    /// If the expression is a binary expression, returns a reference to it.
    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Self::Binary(binary) => Some(binary),
            _ => None,
        }
    }

    /// Returns true if the expression is an integer literal.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Literal(Literal::Integer(_)))
    }

    /// Returns true if the expression is a variable.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Literal(Literal::Symbol(_)))
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the names of all variables in the expression, sorted ascending and without
    /// duplicates.
    pub fn variables(&self) -> BTreeSet<String> {
        self.post_order_iter()
            .filter_map(Expr::as_symbol)
            .map(str::to_owned)
            .collect()
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the length of the fully parenthesized infix rendering of this expression, i.e.
    /// `self.to_infix().len()`, without rendering it.
    pub fn infix_len(&self) -> usize {
        match self {
            Self::Literal(literal) => literal.infix_len(),
            Self::Binary(binary) => binary.infix_len(),
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Binary> for Expr {
    fn from(binary: Binary) -> Self {
        Self::Binary(binary)
    }
}

/// Formats the expression in fully parenthesized infix notation.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{}", literal),
            Self::Binary(binary) => write!(f, "{}", binary),
        }
    }
}

/// Compares two expressions, treating sums and products as commutative.
///
/// This is the same comparison performed by `==`; see the [module-level documentation](self).
pub fn equals(a: &Expr, b: &Expr) -> bool {
    a == b
}
