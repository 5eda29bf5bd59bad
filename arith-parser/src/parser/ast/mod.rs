pub mod binary;
pub mod expr;
pub mod iter;
pub mod literal;

pub use binary::Binary;
pub use expr::Expr;
pub use literal::Literal;
