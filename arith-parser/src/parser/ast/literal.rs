use rug::Integer;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parses a base-10 integer literal with an optional sign, such as `42` or `-7`.
///
/// Returns [`None`] if the lexeme is not a valid integer.
pub fn int_from_str(s: &str) -> Option<Integer> {
    let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Integer::from_str_radix(s, 10).ok()
}

/// A leaf of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A signed integer, such as `2` or `-144`.
    Integer(Integer),

    /// A variable, such as `x` or `rate`.
    Symbol(String),
}

impl Literal {
    /// Returns the length of the literal when written out.
    pub fn infix_len(&self) -> usize {
        match self {
            Self::Integer(int) => int.to_string().len(),
            Self::Symbol(name) => name.len(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(int) => write!(f, "{}", int),
            Self::Symbol(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(int_from_str("42"), Some(Integer::from(42)));
        assert_eq!(int_from_str("-7"), Some(Integer::from(-7)));
        assert_eq!(int_from_str("+3"), Some(Integer::from(3)));
        assert_eq!(
            int_from_str("123456789012345678901234567890").map(|int| int.to_string()),
            Some("123456789012345678901234567890".to_string()),
        );
    }

    #[test]
    fn not_integers() {
        for s in ["", "-", "+", "1_000", "1.5", "0x1f", "--3", "3-", "(", " 1"] {
            assert_eq!(int_from_str(s), None, "{s:?}");
        }
    }

    #[test]
    fn width() {
        assert_eq!(Literal::Integer(Integer::from(-120)).infix_len(), 4);
        assert_eq!(Literal::Symbol("abc".to_string()).infix_len(), 3);
    }
}
