//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! sloth_sat is a small conflict-driven clause-learning (CDCL) solver.
//! It is deliberately plain: propagation is a full scan over the formula, decisions are random, and (by default) the clause learnt from a conflict is the conflicting clause itself.
//!
//! # Orientation
//!
//! A solve happens inside a [context](crate::context), which owns a [formula](crate::structures::formula) and a [trail](crate::db::trail) of assignments for the duration of the solve.
//!
//! - The [structures] module contains the representation of variables, literals, clauses, and formulas.
//! - The [trail](crate::db::trail) records assignments alongside the clause which forced them and the decision level at which they were made.
//! - The [procedures] module contains propagation, analysis, backtracking, decisions, and the solve loop which ties these together.
//! - The [config] module lists what may be configured.
//!
//! # Example
//!
//! ```rust
//! # use sloth_sat::config::Config;
//! # use sloth_sat::context::Context;
//! # use sloth_sat::procedures::decision::RandomDecider;
//! # use sloth_sat::reports::Report;
//! # use sloth_sat::structures::formula::Formula;
//! let formula = Formula::from_dimacs("
//!  1  2 0
//! -1    0
//! ").unwrap();
//!
//! let mut ctx = Context::from_formula(formula, Config::default());
//! let mut decider = RandomDecider::seeded(7);
//!
//! assert_eq!(ctx.solve(&mut decider), Ok(Report::Satisfiable));
//!
//! let model = ctx.model().unwrap();
//! assert_eq!(model.get(&1), Some(&false));
//! assert_eq!(model.get(&2), Some(&true));
//! ```
//!
//! # Logging
//!
//! Calls to the [log] macros are made throughout the library, with [targets](crate::misc::log::targets) for each procedure.
//! No log implementation is provided by the library.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

pub use procedures::solve::solve_formula;
