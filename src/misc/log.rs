/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backtracking](crate::procedures::backtrack)
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to the [solve loop](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to [reading a formula](crate::builder::dimacs)
    pub const PARSE: &str = "parse";
}
