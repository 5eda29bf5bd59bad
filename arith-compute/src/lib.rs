//! Evaluation and simplification of the expression trees produced by [`arith_parser`].
//!
//! - [`numerical`] evaluates an expression to an integer, given values for its variables.
//! - [`symbolic`] rewrites an expression into a simpler, equivalent one.
//!
//! ```
//! use arith_compute::numerical::{ctxt::Ctxt, eval::Eval};
//! use arith_compute::symbolic::simplify;
//! use arith_parser::parser::Parser;
//!
//! let expr = Parser::new("x y - 0 +").try_parse_postfix().unwrap();
//! let ctxt = Ctxt::from_iter([("x", 10), ("y", 4)]);
//! assert_eq!(expr.eval(&ctxt).unwrap(), 6);
//!
//! let simplified = simplify(&expr).unwrap();
//! assert_eq!(simplified.to_infix(), "(x-y)");
//! ```

pub mod numerical;
pub mod symbolic;
