//! Evaluation of expressions to integers.
//!
//! Evaluation needs a value for every variable in the expression, given by a [`Ctxt`](ctxt::Ctxt).
//! Arithmetic is done with arbitrary-precision integers, so it never overflows, and division
//! truncates toward zero.
//!
//! # Features
//!
//! - `numerical` (default): Enables this module.

#![cfg(feature = "numerical")]

pub mod ctxt;
pub mod error;
pub mod eval;
