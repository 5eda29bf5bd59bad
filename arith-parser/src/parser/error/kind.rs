use ariadne::Fmt;
use arith_attrs::ErrorKind;
use arith_error::EXPR;

/// There were no tokens to parse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an expression, but found nothing",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// An operand that is neither a variable nor a valid integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid operand `{}`", lexeme),
    labels = ["this is not an integer or a variable"],
    help = "integers are written with decimal digits and an optional sign, and variables start with a letter",
)]
pub struct InvalidInteger {
    /// The lexeme of the invalid operand.
    pub lexeme: String,
}

/// An operator did not have two operands to apply to.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing operand for the `{}` operator", op),
    labels = ["this operator needs two operands"],
    help = if *postfix {
        "in postfix notation, both operands must be written before the operator"
    } else {
        "in infix notation, an operand must be written on each side of the operator"
    },
)]
pub struct MissingOperand {
    /// The symbol of the operator.
    pub op: &'static str,

    /// Whether the expression was written in postfix notation.
    pub postfix: bool,
}

/// More than one operand remained after parsing; there are not enough operators to join them
/// into one expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many operands",
    labels = vec!["this operand is never used by an operator"; *unused],
    help = format!("add an {} to combine the operands", "operator".fg(EXPR)),
)]
pub struct ExtraOperands {
    /// The number of operands that were left over.
    pub unused: usize,
}

/// Two operands were written next to each other in infix notation, with no operator between
/// them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = ["expected an operator before this"],
    help = format!("add an {} between the operands", "operator".fg(EXPR)),
)]
pub struct MissingOperator;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;
