use ariadne::Fmt;
use arith_attrs::ErrorKind;
use arith_error::EXPR;

/// The variable has no value in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = format!("give {} a value in the context before evaluating", (&self.name).fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,
}

/// The divisor of a quotient evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor evaluates to zero"],
)]
pub struct DivisionByZero;
