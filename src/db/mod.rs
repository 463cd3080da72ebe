//! Data recorded during a solve.
//!
//! - Clauses live in the [formula](crate::structures::formula), and are accessed through [keys](ClauseKey).
//! - Assignments live on the [trail](trail).

pub mod trail;

/// The representation of a decision level.
pub type LevelIndex = u32;

/// A key to access a clause stored in a formula.
///
/// Clauses are never removed from a formula, so a key is the index to the clause in the order of addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(usize);

impl ClauseKey {
    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ClauseKey {
    fn from(index: usize) -> Self {
        ClauseKey(index)
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
