//! Literals are variables paired with a flag marking negation.
//!
//! ```rust
//! # use sloth_sat::structures::literal::Literal;
//! let literal = Literal::new(79, false);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.variable(), 79);
//! assert!(literal.negate().is_negated());
//! assert_eq!(literal.negate().as_int(), -79);
//! ```
//!
//! Literals are ordered by variable and then negation, and are hashable, so may be used as the keys of maps.

use crate::structures::variable::Variable;

/// A variable paired with a flag marking whether the variable is negated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    variable: Variable,
    negation: bool,
}

impl Literal {
    /// A literal on `variable`, negated if `negation` is true.
    pub fn new(variable: Variable, negation: bool) -> Self {
        Literal { variable, negation }
    }

    /// The literal which is true exactly when `variable` has `value`.
    pub fn from_value(variable: Variable, value: bool) -> Self {
        Literal {
            variable,
            negation: !value,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            variable: self.variable,
            negation: !self.negation,
        }
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn is_negated(&self) -> bool {
        self.negation
    }

    /// The value the variable of the literal must take for the literal to be true.
    pub fn polarity(&self) -> bool {
        !self.negation
    }

    /// The literal as a signed integer, with the sign indicating polarity.
    pub fn as_int(&self) -> i64 {
        match self.negation {
            true => -(self.variable as i64),
            false => self.variable as i64,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn equality_is_variable_and_negation() {
        assert_eq!(Literal::new(3, true), Literal::new(3, true));
        assert_ne!(Literal::new(3, true), Literal::new(3, false));
        assert_ne!(Literal::new(3, true), Literal::new(4, true));
    }

    #[test]
    fn from_value() {
        assert_eq!(Literal::from_value(5, false), Literal::new(5, true));
        assert_eq!(Literal::from_value(5, true).to_string(), "5");
        assert_eq!(Literal::from_value(5, false).to_string(), "-5");
    }
}
