//! Parsing of integer arithmetic expressions written in postfix or infix notation.
//!
//! Source code is split into whitespace-delimited tokens by the [`tokenizer`], and the
//! [`parser::Parser`] turns those tokens into an [`Expr`](parser::ast::Expr) tree.
//!
//! ```
//! use arith_parser::parser::Parser;
//!
//! let expr = Parser::new("( 3 + 4 ) * x").try_parse_infix().unwrap();
//! assert_eq!(expr.to_postfix(), "34+x*");
//! assert_eq!(expr.to_infix(), "((3+4)*x)");
//! ```

pub mod parser;
pub mod tokenizer;
