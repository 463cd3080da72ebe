//! Variables, aka. atoms.
//!
//! A variable is identified with a positive integer, as in the DIMACS representation of a formula.

/// The representation of a variable.
pub type Variable = u32;
