/*!
Reading a formula in (simplified) DIMACS form.

Each line is split on whitespace, and tokens are read in order:
- The token `c` or `p` ends the line. Any token before `c` or `p` on the same line is still read.
- The token `0` ends the current clause. A `0` with no literals since the previous `0` is an empty clause.
- Any other integer *k* is the literal on variable |*k*|, negated if *k* is negative.
- Any other token is an error.

Literals after the final `0` are discarded.

Note, the problem line is not interpreted, and any variable and clause counts it contains are ignored.

```rust
# use sloth_sat::structures::formula::Formula;
let formula = Formula::from_dimacs("
c An example
p cnf 3 2
 1 -3 0
 2  3 -1 0
").unwrap();

assert_eq!(formula.clause_count(), 2);
assert_eq!(formula.variable_count(), 3);
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, formula::Formula, literal::Literal, variable::Variable},
    types::err::{self, ErrorKind},
};

impl Formula {
    /// Reads a formula from DIMACS.
    ///
    /// ```rust,ignore
    /// let formula = Formula::read_dimacs(BufReader::new(&file))?;
    /// ```
    pub fn read_dimacs(mut reader: impl BufRead) -> Result<Formula, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut clauses = Vec::default();
        let mut clause_buffer: Vec<Literal> = Vec::default();

        let mut line_counter = 0;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            'token_loop: for token in buffer.split_whitespace() {
                match token {
                    "c" | "p" => break 'token_loop,

                    _ => {
                        let int = match token.parse::<i64>() {
                            Ok(int) => int,
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::Token {
                                    line: line_counter,
                                    token: token.to_owned(),
                                }))
                            }
                        };

                        if int == 0 {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            clauses.push(Clause::from(the_clause));
                            continue 'token_loop;
                        }

                        let variable = match Variable::try_from(int.unsigned_abs()) {
                            Ok(variable) => variable,
                            Err(_) => {
                                return Err(ErrorKind::from(err::ParseError::VariableRange {
                                    line: line_counter,
                                    token: token.to_owned(),
                                }))
                            }
                        };

                        clause_buffer.push(Literal::new(variable, int < 0));
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::warn!(target: targets::PARSE, "Discarded {} literals without a terminating 0", clause_buffer.len());
        }

        let formula = Formula::from_clauses(clauses);
        log::info!(target: targets::PARSE, "Read {} clauses over {} variables from {line_counter} lines", formula.clause_count(), formula.variable_count());
        Ok(formula)
    }

    /// Reads a formula from a string in DIMACS form.
    pub fn from_dimacs(dimacs: &str) -> Result<Formula, ErrorKind> {
        Formula::read_dimacs(dimacs.as_bytes())
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;

    #[test]
    fn clauses_span_lines() {
        let formula = Formula::from_dimacs("1 -2\n 3 0 -1 0\n").unwrap();

        assert_eq!(formula.clause_count(), 2);
        assert_eq!(formula.clauses()[0].as_dimacs(true), "1 -2 3 0");
        assert_eq!(formula.clauses()[1].as_dimacs(true), "-1 0");
    }

    #[test]
    fn comment_ends_only_the_line() {
        let formula = Formula::from_dimacs("c 1 2 0\n4 c 5 0\n6 0\n").unwrap();

        assert_eq!(formula.clause_count(), 1);
        assert_eq!(formula.clauses()[0].as_dimacs(true), "4 6 0");
    }

    #[test]
    fn problem_line_is_skipped() {
        let formula = Formula::from_dimacs("p cnf 9 9\n1 0\n").unwrap();

        assert_eq!(formula.clause_count(), 1);
        assert_eq!(formula.variable_count(), 1);
    }

    #[test]
    fn lone_zero_is_empty_clause() {
        let formula = Formula::from_dimacs("0\n").unwrap();

        assert_eq!(formula.clause_count(), 1);
        assert!(formula.clauses()[0].is_empty());
    }

    #[test]
    fn trailing_literals_are_discarded() {
        let formula = Formula::from_dimacs("1 2 0\n3 4\n").unwrap();

        assert_eq!(formula.clause_count(), 1);
        assert!(!formula.variables().contains(&3));
    }

    #[test]
    fn duplicates_are_kept() {
        let formula = Formula::from_dimacs("1 1 -2 0\n").unwrap();

        assert_eq!(formula.clauses()[0].size(), 3);
    }

    #[test]
    fn malformed_token() {
        assert_eq!(
            Formula::from_dimacs("1 2 0\n1 x 0\n").unwrap_err(),
            ErrorKind::Parse(err::ParseError::Token {
                line: 2,
                token: "x".to_owned()
            })
        );

        assert!(matches!(
            Formula::from_dimacs("cnf 1 0\n"),
            Err(ErrorKind::Parse(err::ParseError::Token { line: 1, .. }))
        ));
    }

    #[test]
    fn variable_range() {
        assert!(matches!(
            Formula::from_dimacs("99999999999 0\n"),
            Err(ErrorKind::Parse(err::ParseError::VariableRange { .. }))
        ));
    }
}
