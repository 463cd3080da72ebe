//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! Before any decision is made, propagation is applied to the formula.
//! If this leads to a conflict, the formula is unsatisfiable.
//!
//! Otherwise, so long as some variable of the formula has no value:
//! 1. A decision is made, at a new level.
//! 2. Propagation is applied.
//!    While propagation finds a conflict, the conflict is analysed:
//!    + If no decision has been made, the formula is unsatisfiable.
//!    + Otherwise, the clause returned by analysis is added to the formula, the trail backtracks to the level returned by analysis, and propagation is applied again.
//!
//! When every variable has a value, the trail satisfies the formula.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!               +---------------+
//!   +---------->| make_decision |
//!   |           +---------------+
//!   |                   |
//!   |                   ⌄
//!   |             +-----------+           +---------+
//!   +-------------| propagate |---------->| analyse |----> unsatisfiable, if no decision has been made
//!   | no conflict +-----------+ conflict  +---------+
//!   |                   ⌃                      |
//!   |                   |                      ⌄
//!   |                   |                +-----------+
//!   |                   +----------------| backtrack |
//!   |                                    +-----------+
//!   |
//!   +----> satisfiable, if every variable has a value
//! ```
//!
//! A solve may also stop early, if a [limit](crate::config::Config) is reached, in which case satisfiability is [unknown](crate::reports::Report::Unknown).
//!
//! # Example
//!
//! ```rust
//! # use sloth_sat::config::{AnalysisScheme, Config};
//! # use sloth_sat::context::Context;
//! # use sloth_sat::procedures::decision::OrderedDecider;
//! # use sloth_sat::reports::Report;
//! # use sloth_sat::structures::formula::Formula;
//! let formula = Formula::from_dimacs("
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ").unwrap();
//!
//! let config = Config {
//!     analysis: AnalysisScheme::FirstUIP,
//!     ..Default::default()
//! };
//!
//! let mut ctx = Context::from_formula(formula, config);
//! assert_eq!(ctx.solve(&mut OrderedDecider::default()), Ok(Report::Unsatisfiable));
//! ```

use std::time::Instant;

use crate::{
    config::Config,
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::{
        analysis::Analysis,
        bcp::Propagation,
        decision::Decider,
    },
    reports::Report,
    structures::{formula::Formula, valuation::Model},
    types::err::{self},
};

impl Context {
    /// Determines the satisfiability of the formula of the context, with decisions made by `decider`.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self, decider: &mut impl Decider) -> Result<Report, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::SolveMade.into());
        }
        self.state = ContextState::Solving;

        let total_time = Instant::now();

        if let Propagation::Conflict(key) = self.propagate()? {
            log::info!(target: targets::SOLVE, "Conflict on {key} before any decision");
            self.state = ContextState::Unsatisfiable(key);
            self.counters.time = total_time.elapsed();
            return Ok(self.report());
        }

        'solve_loop: while !self.trail.covers(&self.formula) {
            self.counters.total_iterations += 1;
            self.counters.time = total_time.elapsed();

            if self.limit_reached() {
                log::info!(target: targets::SOLVE, "Limit reached after {} decisions", self.counters.total_decisions);
                return Ok(Report::Unknown);
            }

            let decision = self.make_decision(decider)?;
            self.trail.increment_level();
            self.trail
                .assign(decision.variable(), decision.polarity(), None)?;

            'conflict_loop: loop {
                let key = match self.propagate()? {
                    Propagation::NoConflict => break 'conflict_loop,
                    Propagation::Conflict(key) => key,
                };
                self.counters.total_conflicts += 1;

                match self.analyse(key)? {
                    Analysis::Fundamental => {
                        self.state = ContextState::Unsatisfiable(key);
                        break 'solve_loop;
                    }

                    Analysis::Learned { level, clause } => {
                        let learned = self.formula.add_learned(clause);
                        log::debug!(target: targets::SOLVE, "Added {learned}, backtracking to {level}");

                        self.backtrack(level);
                        self.trail.set_level(level);
                    }
                }
            }
        }

        if self.state == ContextState::Solving {
            debug_assert!(self.trail.satisfies(&self.formula));
            self.state = ContextState::Satisfiable;
        }

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::SOLVE, "{} after {} conflicts", self.report(), self.counters.total_conflicts);
        Ok(self.report())
    }

    fn limit_reached(&self) -> bool {
        let decisions = self.config.decision_limit;
        let time = self.config.time_limit;

        decisions.is_some_and(|limit| self.counters.total_decisions >= limit)
            || time.is_some_and(|limit| self.counters.time >= limit)
    }
}

/// Solves `formula` in a fresh context, returning a report and, if the formula is satisfiable, a model.
///
/// ```rust
/// # use sloth_sat::config::Config;
/// # use sloth_sat::procedures::decision::RandomDecider;
/// # use sloth_sat::reports::Report;
/// # use sloth_sat::structures::formula::Formula;
/// let formula = Formula::from_dimacs("1 0\n").unwrap();
///
/// let (report, model) =
///     sloth_sat::solve_formula(formula, Config::default(), &mut RandomDecider::seeded(0)).unwrap();
///
/// assert_eq!(report, Report::Satisfiable);
/// assert_eq!(model.unwrap().get(&1), Some(&true));
/// ```
pub fn solve_formula(
    formula: Formula,
    config: Config,
    decider: &mut impl Decider,
) -> Result<(Report, Option<Model>), err::ErrorKind> {
    let mut ctx = Context::from_formula(formula, config);
    let report = ctx.solve(decider)?;
    Ok((report, ctx.model()))
}
