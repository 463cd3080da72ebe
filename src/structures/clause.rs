//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A clause is an ordered sequence of literals.
//! Duplicate literals are kept, and a clause is never revised after construction --- a learnt clause is always a fresh clause.
//!
//! ```rust
//! # use sloth_sat::structures::clause::{Clause, ClauseStatus};
//! # use sloth_sat::structures::literal::Literal;
//! # use sloth_sat::structures::valuation::Model;
//! let clause = Clause::from(vec![Literal::new(1, false), Literal::new(2, true)]);
//!
//! let mut valuation = Model::new();
//! valuation.insert(1, false);
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Unit(Literal::new(2, true)));
//!
//! valuation.insert(2, true);
//! assert_eq!(clause.status_on(&valuation), ClauseStatus::Conflict);
//! ```
//!
//! - The empty clause is always false (never true).

use crate::structures::{literal::Literal, valuation::Valuation, variable::Variable};

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    Satisfied,

    /// Every literal but the given literal is false, and the given literal has no value.
    Unit(Literal),

    /// Every literal is false.
    Conflict,

    /// Anything else, e.g. two or more literals without a value.
    Unresolved,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause { literals }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl Clause {
    /// An iterator over the literals of the clause, in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// An iterator over the variables of the clause, in order and with any repetition.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.literals.iter().map(|literal| literal.variable())
    }

    /// The number of literals in the clause, counting duplicates.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    /// The status of the clause on the given valuation.
    ///
    /// A clause is unit only if exactly one literal has no value and every other literal is false.
    /// So, in particular, a clause in which the same unvalued literal appears twice is not unit.
    pub fn status_on(&self, valuation: &impl Valuation) -> ClauseStatus {
        let mut false_count = 0;
        let mut unvalued = None;

        for literal in &self.literals {
            match valuation.literal_value(literal) {
                Some(true) => return ClauseStatus::Satisfied,
                Some(false) => false_count += 1,
                None => unvalued = Some(*literal),
            }
        }

        match unvalued {
            None => ClauseStatus::Conflict,
            Some(literal) if false_count + 1 == self.literals.len() => ClauseStatus::Unit(literal),
            Some(_) => ClauseStatus::Unresolved,
        }
    }

    /// Whether some literal of the clause is true on the given valuation.
    pub fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.literals
            .iter()
            .any(|literal| valuation.literal_value(literal) == Some(true))
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.as_dimacs(false))
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;
    use crate::structures::valuation::Model;

    fn clause(ints: &[i64]) -> Clause {
        ints.iter()
            .map(|int| Literal::new(int.unsigned_abs() as Variable, *int < 0))
            .collect()
    }

    #[test]
    fn empty_clause_conflicts() {
        assert_eq!(clause(&[]).status_on(&Model::new()), ClauseStatus::Conflict);
    }

    #[test]
    fn duplicate_unvalued_literal_is_not_unit() {
        let valuation = Model::new();
        assert_eq!(clause(&[1, 1]).status_on(&valuation), ClauseStatus::Unresolved);
        assert_eq!(
            clause(&[1]).status_on(&valuation),
            ClauseStatus::Unit(Literal::new(1, false))
        );
    }

    #[test]
    fn satisfied_short_circuits() {
        let mut valuation = Model::new();
        valuation.insert(2, false);

        assert_eq!(clause(&[1, -2, 3]).status_on(&valuation), ClauseStatus::Satisfied);
        assert!(clause(&[1, -2, 3]).satisfied_on(&valuation));
        assert!(!clause(&[1, 2, 3]).satisfied_on(&valuation));
    }

    #[test]
    fn dimacs() {
        assert_eq!(clause(&[1, -2]).as_dimacs(true), "1 -2 0");
        assert_eq!(clause(&[1, -2]).as_dimacs(false), "1 -2");
        assert_eq!(clause(&[]).as_dimacs(true), "0");
    }
}
