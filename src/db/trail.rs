/*!
The trail of assignments made during a solve.

An [Assignment] records the value given to a variable, the clause which forced the value (if any), and the decision level at which the value was given.
An assignment without an antecedent clause is a decision.

Assignments are kept in a map from variables, alongside a log of the order in which variables were assigned.
The log is used when backtracking and when resolving backwards from a conflict.

# Invariants
- Every assignment on the trail has a decision level no greater than the current level.
- An assignment is never revised. A variable is unassigned (by backtracking) and then assigned again.
- Decision levels are non-decreasing along the log.

```rust
# use sloth_sat::db::trail::Trail;
# use sloth_sat::structures::literal::Literal;
let mut trail = Trail::default();

trail.increment_level();
assert!(trail.assign(1, false, None).is_ok());
assert!(trail.assign(1, true, None).is_err());

assert!(trail.value(&Literal::new(1, true)));
assert!(!trail.value(&Literal::new(1, false)));

// Unassigned variables default to false.
assert!(!trail.value(&Literal::new(2, false)));
assert!(!trail.value(&Literal::new(2, true)));
```
*/

use std::collections::HashMap;

use crate::{
    db::{ClauseKey, LevelIndex},
    structures::{
        formula::Formula,
        literal::Literal,
        valuation::{Model, Valuation},
        variable::Variable,
    },
    types::err::{self},
};

/// The value of a variable, together with the reason for the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub value: bool,

    /// The clause which became unit and forced the value, or none for a decision.
    pub antecedent: Option<ClauseKey>,

    pub level: LevelIndex,
}

impl Assignment {
    pub fn is_decision(&self) -> bool {
        self.antecedent.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Trail {
    assignments: HashMap<Variable, Assignment>,
    order: Vec<Variable>,
    level: LevelIndex,
}

impl Trail {
    /// The value of `literal`, where a variable without a value is read as false.
    ///
    /// To distinguish false from no value, use [value_of](Valuation::value_of).
    pub fn value(&self, literal: &Literal) -> bool {
        match self.assignments.get(&literal.variable()) {
            Some(assignment) => assignment.value == literal.polarity(),
            None => false,
        }
    }

    pub fn assignment(&self, variable: Variable) -> Option<&Assignment> {
        self.assignments.get(&variable)
    }

    /// Assigns `value` to `variable` at the current level.
    ///
    /// Returns an error if the variable already has a value.
    pub fn assign(
        &mut self,
        variable: Variable,
        value: bool,
        antecedent: Option<ClauseKey>,
    ) -> Result<(), err::TrailError> {
        if self.assignments.contains_key(&variable) {
            return Err(err::TrailError::AlreadyAssigned(variable));
        }

        self.assignments.insert(
            variable,
            Assignment {
                value,
                antecedent,
                level: self.level,
            },
        );
        self.order.push(variable);
        Ok(())
    }

    /// Removes the assignment to `variable`, returning the assignment if one existed.
    pub fn unassign(&mut self, variable: Variable) -> Option<Assignment> {
        let assignment = self.assignments.remove(&variable)?;

        match self.order.last() {
            Some(&top) if top == variable => {
                self.order.pop();
            }
            _ => self.order.retain(|v| *v != variable),
        }

        Some(assignment)
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level
    }

    /// Sets the current decision level.
    ///
    /// # Soundness
    /// Assignments above the given level are not removed.
    /// See [backtrack](crate::context::Context::backtrack).
    pub fn set_level(&mut self, level: LevelIndex) {
        self.level = level;
    }

    pub fn increment_level(&mut self) {
        self.level += 1;
    }

    /// Variables in the order of assignment.
    pub fn order(&self) -> &[Variable] {
        &self.order
    }

    /// Variables whose assignment was made above `level`, most recent first.
    pub fn assigned_above(&self, level: LevelIndex) -> impl Iterator<Item = Variable> + '_ {
        self.order
            .iter()
            .rev()
            .copied()
            .filter(move |variable| self.assignments[variable].level > level)
    }

    /// A count of assigned variables.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// True if every clause of the formula has some true literal.
    ///
    /// # Soundness
    /// Unassigned variables are read as false, so this is only meaningful on a trail which [covers](Trail::covers) the formula.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula
            .clauses()
            .iter()
            .all(|clause| clause.literals().any(|literal| self.value(literal)))
    }

    /// True if every variable of the formula has a value.
    pub fn covers(&self, formula: &Formula) -> bool {
        formula
            .variables()
            .iter()
            .all(|variable| self.assignments.contains_key(variable))
    }

    /// An iterator over the variables of the formula without a value, in order.
    pub fn unvalued_variables<'f>(
        &'f self,
        formula: &'f Formula,
    ) -> impl Iterator<Item = Variable> + 'f {
        formula
            .variables()
            .iter()
            .copied()
            .filter(|variable| !self.assignments.contains_key(variable))
    }

    /// The values of the trail, detached from the trail.
    pub fn model(&self) -> Model {
        self.assignments
            .iter()
            .map(|(variable, assignment)| (*variable, assignment.value))
            .collect()
    }
}

impl Valuation for Trail {
    fn value_of(&self, variable: Variable) -> Option<bool> {
        self.assignments.get(&variable).map(|a| a.value)
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn assignment_records_level() {
        let mut trail = Trail::default();

        assert!(trail.assign(3, true, None).is_ok());
        trail.increment_level();
        assert!(trail.assign(1, false, Some(ClauseKey::from(4))).is_ok());

        assert_eq!(trail.assignment(3).map(|a| a.level), Some(0));

        let forced = trail.assignment(1).copied();
        assert_eq!(
            forced,
            Some(Assignment {
                value: false,
                antecedent: Some(ClauseKey::from(4)),
                level: 1,
            })
        );
        assert_eq!(trail.order(), &[3, 1]);
    }

    #[test]
    fn double_assignment() {
        let mut trail = Trail::default();

        assert!(trail.assign(2, true, None).is_ok());
        assert_eq!(
            trail.assign(2, true, None),
            Err(err::TrailError::AlreadyAssigned(2))
        );
        assert_eq!(trail.value_of(2), Some(true));
    }

    #[test]
    fn unassign_keeps_order() {
        let mut trail = Trail::default();
        for variable in [5, 6, 7] {
            assert!(trail.assign(variable, true, None).is_ok());
        }

        assert!(trail.unassign(6).is_some());
        assert!(trail.unassign(6).is_none());
        assert_eq!(trail.order(), &[5, 7]);

        assert!(trail.unassign(7).is_some());
        assert_eq!(trail.order(), &[5]);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn covers_and_satisfies() {
        let formula = Formula::from_dimacs("1 2 0\n-1 0\n").unwrap();
        let mut trail = Trail::default();

        assert!(trail.assign(1, false, None).is_ok());
        assert!(!trail.covers(&formula));
        assert_eq!(trail.unvalued_variables(&formula).collect::<Vec<_>>(), vec![2]);

        assert!(trail.assign(2, true, None).is_ok());
        assert!(trail.covers(&formula));
        assert!(trail.satisfies(&formula));
    }
}
