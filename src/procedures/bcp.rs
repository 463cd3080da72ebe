/*!
Boolean constraint propagation, aka. unit propagation.

See [Context::propagate] for the relevant context method.

# Overview

Each pass scans every clause of the formula, in order:
- A clause with some true literal is skipped.
- A unit clause --- every literal false but one, and that one without a value --- forces the remaining literal to be true, with the clause recorded as the reason for the value.
- A clause with every literal false is a conflict, and propagation stops at once.

Passes are repeated until a pass gives no new value.
Values given during a pass are visible to the clauses scanned later in the same pass.

# Complications

There is no index from literals to the clauses which contain them (e.g. watched literals), so each pass inspects every literal of every clause.
This is fine for small formulas, and simple to reason about.

# Example

```rust,ignore
match self.propagate()? {
    Propagation::Conflict(key) => {
        let analysis = self.analyse(key)?;
        ...
    }

    Propagation::NoConflict => {
        let decision = self.make_decision(decider)?;
        ...
    }
}
```
*/

use crate::{
    context::Context,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::clause::ClauseStatus,
    types::err::{self},
};

/// The result of propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// The clause with the given key has every literal false.
    Conflict(ClauseKey),

    /// Every consequence has been given a value, without conflict.
    NoConflict,
}

impl Context {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn propagate(&mut self) -> Result<Propagation, err::ErrorKind> {
        let mut finished = false;

        while !finished {
            finished = true;

            for (key, clause) in self.formula.keyed_clauses() {
                match clause.status_on(&self.trail) {
                    ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}

                    ClauseStatus::Unit(literal) => {
                        log::debug!(target: targets::PROPAGATION, "{literal} from {key} at level {}", self.trail.level());

                        self.trail
                            .assign(literal.variable(), literal.polarity(), Some(key))?;
                        self.counters.total_propagations += 1;
                        finished = false;
                    }

                    ClauseStatus::Conflict => {
                        log::debug!(target: targets::PROPAGATION, "Conflict on {key} {clause}");
                        return Ok(Propagation::Conflict(key));
                    }
                }
            }
        }

        Ok(Propagation::NoConflict)
    }
}

#[cfg(test)]
mod bcp_tests {
    use super::*;
    use crate::{
        config::Config,
        structures::{formula::Formula, valuation::Valuation},
    };

    fn context(dimacs: &str) -> Context {
        Context::from_formula(Formula::from_dimacs(dimacs).unwrap(), Config::default())
    }

    #[test]
    fn chain() {
        let mut ctx = context("-1 2 0\n-2 3 0\n1 0\n");

        assert_eq!(ctx.propagate(), Ok(Propagation::NoConflict));

        assert_eq!(ctx.trail.order(), &[1, 2, 3]);
        assert_eq!(ctx.trail.assignment(1).unwrap().antecedent, Some(ClauseKey::from(2)));
        assert_eq!(ctx.trail.assignment(2).unwrap().antecedent, Some(ClauseKey::from(0)));
        assert_eq!(ctx.trail.assignment(3).unwrap().antecedent, Some(ClauseKey::from(1)));
        assert_eq!(ctx.counters.total_propagations, 3);
    }

    #[test]
    fn conflict() {
        let mut ctx = context("1 0\n-1 2 0\n-2 0\n");

        assert_eq!(ctx.propagate(), Ok(Propagation::Conflict(ClauseKey::from(2))));
    }

    #[test]
    fn empty_clause() {
        let mut ctx = context("1 2 0\n0\n");

        assert_eq!(ctx.propagate(), Ok(Propagation::Conflict(ClauseKey::from(1))));
        assert!(ctx.trail.is_empty());
    }

    #[test]
    fn fixpoint_without_units() {
        let mut ctx = context("1 2 0\n-1 -2 0\n");

        assert_eq!(ctx.propagate(), Ok(Propagation::NoConflict));
        assert!(ctx.trail.is_empty());
    }

    #[test]
    fn propagation_after_decision() {
        let mut ctx = context("1 2 0\n1 -2 3 0\n");

        ctx.trail.increment_level();
        assert!(ctx.trail.assign(1, false, None).is_ok());

        assert_eq!(ctx.propagate(), Ok(Propagation::NoConflict));
        assert_eq!(ctx.trail.value_of(2), Some(true));
        assert_eq!(ctx.trail.value_of(3), Some(true));
        assert!(ctx.trail.order().iter().all(|v| ctx.trail.assignment(*v).unwrap().level == 1));
    }
}
