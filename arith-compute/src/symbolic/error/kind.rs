use arith_attrs::ErrorKind;

/// A quotient of two integers has a divisor of zero, so it cannot be folded into an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot simplify a division by zero",
    labels = ["this divisor is zero"],
    help = "the expression has no value for any assignment of its variables",
)]
pub struct DivisionByZero;
