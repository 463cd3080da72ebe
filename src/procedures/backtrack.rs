//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backtrack is a move from some (higher) decision level to some previous (lower) decision level.
//! All assignments made above the target level are undone, whether decisions or consequences of decisions.
//!
//! Typically, a backtrack is made after a conflict was found and analysis returned a clause together with a target level.
//!
//! # Soundness
//!
//! - The level of the trail is not revised, and should be set to the target level after the backtrack.
//! - A target level equal to (or greater than) the current level leaves the trail as it is.
//!
//! # Example
//!
//! ```rust,ignore
//! if let Analysis::Learned { level, clause } = self.analyse(key)? {
//!     self.formula.add_learned(clause);
//!     self.backtrack(level);
//!     self.trail.set_level(level);
//! }
//! ```

use crate::{
    context::Context,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl Context {
    /// Removes every assignment made above the given target level.
    ///
    /// For documentation, see [procedures::backtrack](crate::procedures::backtrack).
    pub fn backtrack(&mut self, target: LevelIndex) {
        log::debug!(target: targets::BACKTRACK, "Backtrack from {} to {target}", self.trail.level());

        let above = self.trail.assigned_above(target).collect::<Vec<_>>();
        for variable in above {
            self.trail.unassign(variable);
        }
    }
}

#[cfg(test)]
mod backtrack_tests {
    use super::*;
    use crate::{config::Config, structures::formula::Formula};

    fn leveled_context() -> Context {
        let formula = Formula::from_dimacs("1 2 3 4 5 0\n").unwrap();
        let mut ctx = Context::from_formula(formula, Config::default());

        assert!(ctx.trail.assign(1, true, None).is_ok());
        for variable in [2, 3, 4, 5] {
            ctx.trail.increment_level();
            assert!(ctx.trail.assign(variable, false, None).is_ok());
        }
        ctx
    }

    #[test]
    fn nothing_above_target_remains() {
        let mut ctx = leveled_context();

        ctx.backtrack(2);

        assert_eq!(ctx.trail.order(), &[1, 2, 3]);
        assert!(ctx
            .trail
            .order()
            .iter()
            .all(|v| ctx.trail.assignment(*v).is_some_and(|a| a.level <= 2)));
        assert_eq!(ctx.trail.len(), 3);
    }

    #[test]
    fn level_is_untouched() {
        let mut ctx = leveled_context();

        ctx.backtrack(0);

        assert_eq!(ctx.trail.level(), 4);
        assert_eq!(ctx.trail.order(), &[1]);
    }

    #[test]
    fn current_level_is_a_noop() {
        let mut ctx = leveled_context();

        ctx.backtrack(4);

        assert_eq!(ctx.trail.len(), 5);
    }
}
