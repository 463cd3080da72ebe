use std::{path::PathBuf, time::Duration};

use clap::Parser;
use sloth_sat::config::{AnalysisScheme, Config};

/// Determines whether a formula is satisfiable or unsatisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse
    pub formula_file: PathBuf,

    /// How to derive a clause from a conflict
    ///
    /// With `conflict`, an unsatisfiable formula is only reported if propagation conflicts before any decision, and otherwise the solve runs until a limit is reached
    #[arg(short, long, default_value_t, value_enum)]
    pub analysis: AnalysisScheme,

    /// Seed for random decisions, otherwise taken from the operating system
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop (with an unknown result) after this many decisions
    #[arg(short, long)]
    pub decision_limit: Option<usize>,

    /// Time limit for the solve, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(Duration::from_secs))]
    pub time_limit: Option<Duration>,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// Exit with 10 on a satisfiable formula and 20 on an unsatisfiable formula, rather than 0
    #[arg(long, default_value_t = false)]
    pub exit_codes: bool,

    /// The level of logs to write to stderr, when built with logging
    #[arg(long, default_value_t, value_enum)]
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    pub log_level: LogLevel,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            analysis: self.analysis,
            decision_limit: self.decision_limit,
            time_limit: self.time_limit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
#[cfg_attr(not(feature = "log"), allow(dead_code))]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod args_tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn log_levels_are_compiled_in() {
        for level in LogLevel::value_variants() {
            assert!(log::LevelFilter::from(*level) <= log::STATIC_MAX_LEVEL);
        }
    }

    #[test]
    fn time_limit_in_seconds() {
        let args = Args::parse_from(["sloth_cli", "--time-limit", "3", "formula.cnf"]);
        assert_eq!(args.config().time_limit, Some(Duration::from_secs(3)));
        assert_eq!(args.config().decision_limit, None);
    }
}
