/*!
Analysis of a conflict.

# Overview

Given a clause which is false on the current valuation, analysis returns either:
- [Fundamental](Analysis::Fundamental), if no decision has been made, in which case the formula is unsatisfiable.
- [Learned](Analysis::Learned), with a clause to add to the formula and a level to backtrack to.

How the clause and level are obtained depends on the [scheme](crate::config::AnalysisScheme) of the context.

## Conflict

The clause learnt is the conflicting clause itself, and the level is one below the current level.

No resolution takes place, and so the learnt clause is always a copy of some clause already in the formula.
As a consequence, the same conflict may be found (and learnt) again after backtracking.

## First UIP

Starting with the conflicting clause, resolution is applied against the reason for the most recently assigned variable of the current level, until exactly one literal of the current level remains --- the first unique implication point (UIP).

- Literals whose variable was assigned at level zero are dropped, as these are false on every valuation which extends level zero.
- The level returned is the highest level among the literals other than the UIP, or zero if there are no other literals.

After backtracking to this level the UIP is the only literal of the learnt clause without a value, and so propagation will give the UIP a value.

# Literature

For a discussion of resolution based analysis and unique implication points see chapter 4 of the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2).
*/

use std::collections::HashSet;

use crate::{
    config::AnalysisScheme,
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal, variable::Variable},
    types::err::{self},
};

/// Possible results of analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Analysis {
    /// The conflict was found without any decision having been made.
    Fundamental,

    /// A clause to add to the formula, and the level to backtrack to.
    Learned { level: LevelIndex, clause: Clause },
}

impl Context {
    /// Analyses the conflict found on the clause `conflict`.
    ///
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    pub fn analyse(&self, conflict: ClauseKey) -> Result<Analysis, err::ErrorKind> {
        let current = self.trail.level();
        if current == 0 {
            log::info!(target: targets::ANALYSIS, "Conflict on {conflict} at level zero");
            return Ok(Analysis::Fundamental);
        }

        let analysis = match self.config.analysis {
            AnalysisScheme::Conflict => {
                let Some(clause) = self.formula.get(conflict) else {
                    return Err(err::AnalysisError::MissingClause(conflict).into());
                };

                Analysis::Learned {
                    level: current - 1,
                    clause: clause.clone(),
                }
            }

            AnalysisScheme::FirstUIP => self.first_uip(conflict)?,
        };

        if let Analysis::Learned { level, clause } = &analysis {
            log::debug!(target: targets::ANALYSIS, "Learnt {clause} from {conflict}, asserting at {level}");
        }
        Ok(analysis)
    }

    fn first_uip(&self, conflict: ClauseKey) -> Result<Analysis, err::ErrorKind> {
        let current = self.trail.level();

        let mut seen: HashSet<Variable> = HashSet::default();
        let mut learned: Vec<Literal> = Vec::default();

        // Variables of the current level which have been seen and not yet resolved on.
        let mut pending: usize = 0;

        let mut recent = self.trail.order().iter().rev();
        let mut key = conflict;

        let uip = 'resolution_loop: loop {
            let Some(clause) = self.formula.get(key) else {
                return Err(err::AnalysisError::MissingClause(key).into());
            };

            for literal in clause.literals() {
                let variable = literal.variable();
                if !seen.insert(variable) {
                    continue;
                }

                let Some(assignment) = self.trail.assignment(variable) else {
                    return Err(err::AnalysisError::UnvaluedLiteral(variable).into());
                };

                match assignment.level {
                    0 => {}
                    level if level == current => pending += 1,
                    _ => learned.push(*literal),
                }
            }

            let (variable, assignment) = loop {
                let Some(&variable) = recent.next() else {
                    return Err(err::AnalysisError::NoCurrentLevelLiteral.into());
                };

                if let Some(assignment) = self.trail.assignment(variable) {
                    if assignment.level == current && seen.contains(&variable) {
                        break (variable, assignment);
                    }
                }
            };

            pending -= 1;
            if pending == 0 {
                break 'resolution_loop Literal::from_value(variable, !assignment.value);
            }

            match assignment.antecedent {
                Some(antecedent) => key = antecedent,
                None => return Err(err::AnalysisError::MissingAntecedent(variable).into()),
            }
        };

        let mut level = 0;
        for literal in &learned {
            if let Some(assignment) = self.trail.assignment(literal.variable()) {
                level = std::cmp::max(level, assignment.level);
            }
        }

        learned.insert(0, uip);

        Ok(Analysis::Learned {
            level,
            clause: Clause::from(learned),
        })
    }
}

#[cfg(test)]
mod analysis_tests {
    use super::*;
    use crate::{
        config::Config,
        procedures::bcp::Propagation,
        structures::formula::Formula,
    };

    fn context(dimacs: &str, analysis: AnalysisScheme) -> Context {
        let config = Config {
            analysis,
            ..Default::default()
        };
        Context::from_formula(Formula::from_dimacs(dimacs).unwrap(), config)
    }

    fn decide(ctx: &mut Context, variable: Variable, value: bool) -> Propagation {
        ctx.trail.increment_level();
        assert!(ctx.trail.assign(variable, value, None).is_ok());
        ctx.propagate().unwrap()
    }

    #[test]
    fn fundamental_at_level_zero() {
        let mut ctx = context("1 0\n-1 0\n", AnalysisScheme::FirstUIP);

        let Propagation::Conflict(key) = ctx.propagate().unwrap() else {
            panic!("Expected a conflict");
        };
        assert_eq!(ctx.analyse(key), Ok(Analysis::Fundamental));
    }

    #[test]
    fn conflict_scheme_learns_conflict() {
        let mut ctx = context("-1 2 0\n-1 -2 0\n3 4 0\n", AnalysisScheme::Conflict);

        assert_eq!(decide(&mut ctx, 3, true), Propagation::NoConflict);
        let Propagation::Conflict(key) = decide(&mut ctx, 1, true) else {
            panic!("Expected a conflict");
        };

        assert_eq!(
            ctx.analyse(key),
            Ok(Analysis::Learned {
                level: 1,
                clause: ctx.formula.get(key).unwrap().clone(),
            })
        );
    }

    #[test]
    fn first_uip_unit() {
        // Deciding 1 forces 2 and -2.
        let mut ctx = context("-1 2 0\n-1 -2 0\n3 4 0\n", AnalysisScheme::FirstUIP);

        assert_eq!(decide(&mut ctx, 3, true), Propagation::NoConflict);
        let Propagation::Conflict(key) = decide(&mut ctx, 1, true) else {
            panic!("Expected a conflict");
        };

        assert_eq!(
            ctx.analyse(key),
            Ok(Analysis::Learned {
                level: 0,
                clause: Clause::from(vec![Literal::new(1, true)]),
            })
        );
    }

    #[test]
    fn first_uip_asserting_level() {
        // With 1 at level one and 3 at level two, 3 forces 4, and then 2 and -2.
        let dimacs = "-3 4 0\n-4 -1 2 0\n-4 -1 -2 0\n";
        let mut ctx = context(dimacs, AnalysisScheme::FirstUIP);

        assert_eq!(decide(&mut ctx, 1, true), Propagation::NoConflict);
        let Propagation::Conflict(key) = decide(&mut ctx, 3, true) else {
            panic!("Expected a conflict");
        };

        let Ok(Analysis::Learned { level, clause }) = ctx.analyse(key) else {
            panic!("Expected a learnt clause");
        };

        assert_eq!(level, 1);
        assert_eq!(
            clause,
            Clause::from(vec![Literal::new(4, true), Literal::new(1, true)])
        );
    }
}
