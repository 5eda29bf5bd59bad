//! Algebraic simplification of expressions.
//!
//! Simplification is done in a single post-order pass: the operands of a binary expression are
//! simplified first, and then the rules for its operator are applied to the simplified operands.
//! Each rule is a function that accepts an expression and returns [`Option<Expr>`]; if the rule is
//! applicable to the expression, the rule is applied and the result is returned.
//!
//! The rules only use the identities of integer arithmetic, such as `0+a = a`, `1*a = a` and
//! `a/1 = a`, and fold operations on two integers. Like terms are not combined, and sums and
//! products are not reassociated, so `(x + 1) + 1` is left as it is.
//!
//! ```
//! use arith_compute::symbolic::simplify;
//! use arith_parser::parser::{ast::expr::Expr, Parser};
//!
//! let expr = Parser::new("( x - x ) * y + 2 * 3").try_parse_infix().unwrap();
//! assert_eq!(simplify(&expr).unwrap(), Expr::integer(6));
//! ```
//!
//! The rules applied can be recorded with [`simplify_with_steps`]. For more information, see the
//! [`mod@simplify`] module.

pub mod error;
pub mod simplify;
pub mod step_collector;

pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
