//! Building a formula from some external representation.
//!
//! At present, only a (simplified) [DIMACS](dimacs) representation is supported.

pub mod dimacs;
