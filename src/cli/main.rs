#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::collections::BTreeSet;

use clap::Parser;
use sloth_sat::{
    context::Context,
    procedures::decision::RandomDecider,
    reports::Report,
    structures::{
        valuation::{Model, Valuation},
        variable::Variable,
    },
};

mod args;
#[cfg(feature = "log")]
mod logging;
mod read;

use args::Args;

pub(crate) const EXIT_UNREADABLE: i32 = 1;
pub(crate) const EXIT_MALFORMED: i32 = 3;
pub(crate) const EXIT_DEFECT: i32 = 4;

const EXIT_SATISFIABLE: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;

fn main() {
    let args = Args::parse();

    #[cfg(feature = "log")]
    logging::init(args.log_level.into());

    let formula = match read::read_dimacs(&args.formula_file) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c {e}");
            std::process::exit(e.exit_code());
        }
    };

    let mut ctx = Context::from_formula(formula, args.config());

    let result = match args.seed {
        Some(seed) => {
            println!("c Seed: {seed}");
            ctx.solve(&mut RandomDecider::seeded(seed))
        }
        None => ctx.solve(&mut RandomDecider::from_entropy()),
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(EXIT_DEFECT);
        }
    };

    if args.stats {
        print_stats(&ctx);
    }

    match report {
        Report::Satisfiable => {
            let Some(model) = ctx.model() else {
                println!("c Satisfiable without a model");
                std::process::exit(EXIT_DEFECT);
            };

            if !ctx.formula.satisfied_on(&model) {
                println!("c The model found does not satisfy the formula");
                std::process::exit(EXIT_DEFECT);
            }

            println!("s SATISFIABLE");
            println!("{}", value_line(&model, ctx.formula.variables()));
        }

        Report::Unsatisfiable => println!("s UNSATISFIABLE"),

        Report::Unknown => println!("s UNKNOWN"),
    }

    std::process::exit(exit_code(report, args.exit_codes));
}

/// The exit code for a completed solve.
fn exit_code(report: Report, exit_codes: bool) -> i32 {
    match (report, exit_codes) {
        (Report::Satisfiable, true) => EXIT_SATISFIABLE,
        (Report::Unsatisfiable, true) => EXIT_UNSATISFIABLE,
        _ => 0,
    }
}

/// The `v` line of a model, with a literal for each variable in `variables`.
fn value_line(model: &Model, variables: &BTreeSet<Variable>) -> String {
    let literals = model.as_dimacs(variables.iter());
    match literals.is_empty() {
        true => "v 0".to_owned(),
        false => format!("v {literals} 0"),
    }
}

fn print_stats(ctx: &Context) {
    let counters = &ctx.counters;

    println!("c Analysis:         {}", ctx.config.analysis);
    println!("c Iterations:       {}", counters.total_iterations);
    println!("c Decisions:        {}", counters.total_decisions);
    println!("c Conflicts:        {}", counters.total_conflicts);
    println!("c Propagations:     {}", counters.total_propagations);
    println!("c Learnt clauses:   {}", ctx.formula.learned_clauses().len());
    println!("c Time:             {:.2?}", counters.time);
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use sloth_sat::structures::formula::Formula;

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(Report::Satisfiable, false), 0);
        assert_eq!(exit_code(Report::Unsatisfiable, false), 0);

        assert_eq!(exit_code(Report::Satisfiable, true), 10);
        assert_eq!(exit_code(Report::Unsatisfiable, true), 20);
        assert_eq!(exit_code(Report::Unknown, true), 0);
    }

    #[test]
    fn value_line_lists_every_variable() {
        let formula = Formula::from_dimacs("3 -1 0\n-2 0\n").unwrap();
        let model = Model::from([(2, false), (3, true), (1, false)]);

        assert_eq!(value_line(&model, formula.variables()), "v -1 -2 3 0");
    }

    #[test]
    fn value_line_of_empty_model() {
        assert_eq!(value_line(&Model::new(), &BTreeSet::new()), "v 0");
    }
}
