use std::io::{BufReader, Write};

use sloth_sat::{
    config::Config,
    procedures::decision::RandomDecider,
    reports::Report,
    structures::formula::Formula,
    types::err::{ErrorKind, ParseError},
};

#[test]
fn reparse_written_formula() {
    let dimacs = "c A formula\np cnf 5 4\n1 -2 0\n2 3 -4 0 5\n0\n-5 1 0\n";
    let formula = Formula::from_dimacs(dimacs).unwrap();
    let written = formula.as_dimacs();

    assert!(written.starts_with("p cnf 5 4\n"));

    let reparsed = Formula::from_dimacs(&written).unwrap();
    assert_eq!(reparsed.clauses(), formula.clauses());
    assert_eq!(reparsed.variables(), formula.variables());
}

#[test]
fn read_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "c From disk").unwrap();
    writeln!(file, "p cnf 3 3").unwrap();
    writeln!(file, "1 2 0").unwrap();
    writeln!(file, "-1 0").unwrap();
    writeln!(file, "-2 3 0").unwrap();

    let reader = BufReader::new(file.reopen().unwrap());
    let formula = Formula::read_dimacs(reader).unwrap();
    assert_eq!(formula.clause_count(), 3);

    let (report, model) =
        sloth_sat::solve_formula(formula, Config::default(), &mut RandomDecider::seeded(5)).unwrap();
    assert_eq!(report, Report::Satisfiable);

    let model = model.unwrap();
    assert_eq!(model.get(&1), Some(&false));
    assert_eq!(model.get(&2), Some(&true));
    assert_eq!(model.get(&3), Some(&true));
}

#[test]
fn satlib_trailer_is_rejected() {
    let dimacs = "p cnf 2 1\n1 2 0\n%\n0\n";

    assert_eq!(
        Formula::from_dimacs(dimacs).err(),
        Some(ErrorKind::Parse(ParseError::Token {
            line: 3,
            token: "%".to_owned()
        }))
    );
}
