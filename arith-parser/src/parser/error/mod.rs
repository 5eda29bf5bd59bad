//! Errors produced while parsing.
//!
//! Every parsing error is an [`Error`] whose kind is one of the types in [`kind`]. The spans of
//! the error point into the parsed source (or, for pre-split tokens, into the tokens joined by
//! single spaces).

pub mod kind;

pub use arith_error::Error;
