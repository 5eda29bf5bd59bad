use rug::Integer;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
///
/// The context is never modified by evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Integer>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: impl Into<Integer>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<&Integer> {
        self.vars.get(name)
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, Integer> {
        &self.vars
    }
}

impl<K, V> FromIterator<(K, V)> for Ctxt
where
    K: Into<String>,
    V: Into<Integer>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rug::ops::Pow;
    use super::*;

    #[test]
    fn vars() {
        let mut ctxt = Ctxt::new();
        assert!(ctxt.get_vars().is_empty());

        ctxt.add_var("x", 3);
        ctxt.add_var("x", -8);
        ctxt.add_var("y", Integer::from(10).pow(30u32));
        assert_eq!(ctxt.get_var("x"), Some(&Integer::from(-8)));
        assert_eq!(ctxt.get_var("y").map(|y| y.to_string().len()), Some(31));
        assert_eq!(ctxt.get_var("z"), None);
        assert_eq!(ctxt.get_vars().len(), 2);
    }

    #[test]
    fn collect() {
        let ctxt: Ctxt = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(ctxt.get_var("b"), Some(&Integer::from(2)));
    }
}
