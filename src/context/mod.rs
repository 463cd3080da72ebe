/*!
The context --- within which a solve takes place.

A context takes ownership of a formula for the duration of a solve, and alongside the formula holds:
- A [trail](crate::db::trail) of assignments, fresh for each context.
- A [configuration](crate::config).
- [Counters] for various things which count.

A context solves at most once.
The only revision made to the formula during a solve is the addition of learnt clauses.

# Example
```rust
# use sloth_sat::config::Config;
# use sloth_sat::context::Context;
# use sloth_sat::procedures::decision::OrderedDecider;
# use sloth_sat::reports::Report;
# use sloth_sat::structures::formula::Formula;
let formula = Formula::from_dimacs("1 0\n-1 0\n").unwrap();
let mut ctx = Context::from_formula(formula, Config::default());

assert_eq!(ctx.solve(&mut OrderedDecider::default()), Ok(Report::Unsatisfiable));
assert!(ctx.model().is_none());
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{trail::Trail, ClauseKey},
    reports::Report,
    structures::{formula::Formula, valuation::Model},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No solve has been made.
    Input,

    /// A solve is in progress, or was stopped before satisfiability was determined.
    Solving,

    /// The trail is a complete valuation which satisfies the formula.
    Satisfiable,

    /// The formula is unsatisfiable, with the given clause in conflict at level zero.
    Unsatisfiable(ClauseKey),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
        }
    }
}

pub struct Context {
    /// The formula, to which learnt clauses are added.
    pub formula: Formula,

    /// The trail of assignments.
    pub trail: Trail,

    /// The configuration of the context.
    pub config: Config,

    /// Counters for the solve.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,
}

impl Context {
    pub fn from_formula(formula: Formula, config: Config) -> Self {
        Context {
            formula,
            trail: Trail::default(),
            config,
            counters: Counters::default(),
            state: ContextState::Input,
        }
    }

    /// A report on the satisfiability of the formula.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The satisfying valuation found by a solve, if the formula is satisfiable.
    pub fn model(&self) -> Option<Model> {
        match self.state {
            ContextState::Satisfiable => Some(self.trail.model()),
            _ => None,
        }
    }
}
