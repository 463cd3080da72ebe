//! The abstract elements of a solve and their representation.
//!
//! - A [variable](variable) is a positive integer.
//! - A [literal](literal) is a variable paired with a flag marking negation.
//! - A [clause](clause) is a sequence of literals, interpreted as their disjunction.
//! - A [formula](formula) is a sequence of clauses, interpreted as their conjunction.
//! - A [valuation](valuation) is anything from which the value of a variable may be read.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
pub mod variable;
