use std::{io::BufReader, path::Path};

use sloth_sat::{structures::formula::Formula, types::err::ErrorKind};

pub(super) enum ReadError {
    FailedToOpen(std::io::Error),
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(e) => write!(f, "Unable to open the file: {e}."),
            Self::ParseError(e) => write!(f, "{e}."),
        }
    }
}

impl ReadError {
    pub(super) fn exit_code(&self) -> i32 {
        match self {
            Self::FailedToOpen(_) => super::EXIT_UNREADABLE,
            Self::ParseError(_) => super::EXIT_MALFORMED,
        }
    }
}

/// Reads the DIMACS file at `path` to a formula and writes a report.
pub(super) fn read_dimacs(path: &Path) -> Result<Formula, ReadError> {
    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(ReadError::FailedToOpen(e)),
    };

    let formula = match Formula::read_dimacs(BufReader::new(&file)) {
        Ok(formula) => formula,
        Err(e) => return Err(ReadError::ParseError(e)),
    };

    println!("c Variable count:   {}", formula.variable_count());
    println!("c Clause count:     {}", formula.clause_count());

    Ok(formula)
}
