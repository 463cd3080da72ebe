//! Formulas, aka. a collection of clauses, interpreted as the conjunction of those clauses.
//!
//! A formula grows during a solve, as learnt clauses are appended to the clauses the formula was built with.
//! The variables of a formula are fixed when the formula is built, and a learnt clause only ever contains variables from the formula.
//!
//! ```rust
//! # use sloth_sat::structures::formula::Formula;
//! let formula = Formula::from_dimacs("1 -2 0\n2 3 0\n").unwrap();
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.variables().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::collections::BTreeSet;

use crate::{
    db::ClauseKey,
    structures::{clause::Clause, valuation::Valuation, variable::Variable},
};

#[derive(Clone, Debug, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
    variables: BTreeSet<Variable>,
    original_count: usize,
}

impl Formula {
    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        let variables = clauses.iter().flat_map(|clause| clause.variables()).collect();
        let original_count = clauses.len();

        Formula {
            clauses,
            variables,
            original_count,
        }
    }

    /// All clauses of the formula, original clauses first and learnt clauses after.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The clauses the formula was built with.
    pub fn original_clauses(&self) -> &[Clause] {
        &self.clauses[..self.original_count]
    }

    /// The clauses added during a solve.
    pub fn learned_clauses(&self) -> &[Clause] {
        &self.clauses[self.original_count..]
    }

    pub fn get(&self, key: ClauseKey) -> Option<&Clause> {
        self.clauses.get(key.index())
    }

    /// An iterator over the clauses of the formula paired with their keys.
    pub fn keyed_clauses(&self) -> impl Iterator<Item = (ClauseKey, &Clause)> {
        self.clauses
            .iter()
            .enumerate()
            .map(|(index, clause)| (ClauseKey::from(index), clause))
    }

    pub fn variables(&self) -> &BTreeSet<Variable> {
        &self.variables
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Appends a learnt clause to the formula, returning the key to the clause.
    ///
    /// No check is made for duplicate or subsumed clauses.
    /// The variables of the clause are expected to be variables of the formula, and this is checked only in debug builds.
    pub fn add_learned(&mut self, clause: Clause) -> ClauseKey {
        debug_assert!(clause.variables().all(|v| self.variables.contains(&v)));

        let key = ClauseKey::from(self.clauses.len());
        self.clauses.push(clause);
        key
    }

    /// Whether every clause the formula was built with is satisfied on the valuation.
    pub fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.original_clauses()
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }

    /// The formula in DIMACS form, including a problem line.
    /// Learnt clauses are included.
    pub fn as_dimacs(&self) -> String {
        let max_variable = self.variables.last().copied().unwrap_or(0);

        let mut the_string = format!("p cnf {} {}\n", max_variable, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}
