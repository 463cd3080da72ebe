/*!
Configuration of a context.

The default configuration follows the plainest reading of conflict-driven clause learning used throughout the library:
- On conflict, the conflicting clause is learnt and a single level is undone (see [AnalysisScheme::Conflict]).
- No limit is placed on the number of decisions, or on time.

Note, with the default scheme an unsatisfiable formula is found only if propagation conflicts before the first decision.
Every clause learnt is a copy of a clause already in the formula, so on any other unsatisfiable formula the solve loop revisits the same conflicts indefinitely.
A [decision limit](Config::decision_limit) or [time limit](Config::time_limit) bounds a solve, after which the result is [Unknown](crate::reports::Report::Unknown).
*/

mod analysis;
pub use analysis::AnalysisScheme;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// How to derive a clause from a conflict.
    pub analysis: AnalysisScheme,

    /// The maximum number of decisions to make during a solve.
    pub decision_limit: Option<usize>,

    /// The time limit for a solve.
    pub time_limit: Option<Duration>,
}
