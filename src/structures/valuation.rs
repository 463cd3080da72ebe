//! Valuations, aka. (partial) functions from variables to truth values.
//!
//! The [trail](crate::db::trail::Trail) is the valuation built during a solve.
//! A [Model] is the valuation returned from a satisfiable solve, detached from the trail.

use std::collections::BTreeMap;

use crate::structures::{literal::Literal, variable::Variable};

/// A complete valuation of the variables of a formula, ordered by variable.
pub type Model = BTreeMap<Variable, bool>;

/// Something from which the value of a variable may be read.
pub trait Valuation {
    /// The value of `variable`, if it has one.
    fn value_of(&self, variable: Variable) -> Option<bool>;

    /// The value of `literal`, if the variable of the literal has a value.
    fn literal_value(&self, literal: &Literal) -> Option<bool> {
        self.value_of(literal.variable())
            .map(|value| value == literal.polarity())
    }

    /// The valuation as a string of DIMACS literals, in the order given by `variables`.
    /// Variables without a value are skipped.
    fn as_dimacs<'v>(&self, variables: impl Iterator<Item = &'v Variable>) -> String {
        variables
            .filter_map(|variable| {
                self.value_of(*variable)
                    .map(|value| Literal::from_value(*variable, value).to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Valuation for Model {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        self.get(&variable).copied()
    }
}
