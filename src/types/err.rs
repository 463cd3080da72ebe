//! Error types used in the library.
//!
//! - Parse errors are external, and follow from malformed input.
//! - Trail, decision, and analysis errors indicate a defect in a procedure, and are not expected during use.
//! - State errors follow from a request which does not make sense for the current state of a context.
//!
//! Note, an unsatisfiable formula is not an error, see [Report](crate::reports::Report).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::variable::Variable};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Decision(DecisionError),
    Parse(ParseError),
    State(StateError),
    Trail(TrailError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::Decision(e) => write!(f, "Decision error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::State(e) => write!(f, "State error: {e:?}"),
            Self::Trail(e) => write!(f, "Trail error: {e:?}"),
        }
    }
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// A key used during analysis does not point to a clause.
    MissingClause(ClauseKey),

    /// The conflicting clause contains no literal valued at the current decision level.
    NoCurrentLevelLiteral,

    /// Some literal of a clause used during analysis has no value.
    UnvaluedLiteral(Variable),

    /// Resolution reached a decision before a unique implication point was found.
    MissingAntecedent(Variable),
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors when making a decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecisionError {
    /// Every variable already has a value, so there is nothing to decide on.
    Exhausted,

    /// The decider returned a variable which is not a candidate.
    InvalidChoice(Variable),
}

impl From<DecisionError> for ErrorKind {
    fn from(e: DecisionError) -> Self {
        ErrorKind::Decision(e)
    }
}

/// Errors when reading a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The line could not be read.
    Line(usize),

    /// A token on the given line is not an integer.
    Token { line: usize, token: String },

    /// A literal names a variable outside the supported range.
    VariableRange { line: usize, token: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "failed to read line {line}"),
            Self::Token { line, token } => write!(f, "'{token}' on line {line} is not an integer"),
            Self::VariableRange { line, token } => {
                write!(f, "'{token}' on line {line} is out of range for a variable")
            }
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A solve has already been made with the context.
    SolveMade,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Errors from the trail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrailError {
    /// An attempt to assign a value to a variable which already has a value.
    AlreadyAssigned(Variable),
}

impl From<TrailError> for ErrorKind {
    fn from(e: TrailError) -> Self {
        ErrorKind::Trail(e)
    }
}
