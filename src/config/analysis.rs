/// Variant schemes to use during conflict analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AnalysisScheme {
    /// Learn the conflicting clause, and backtrack a single level.
    #[default]
    Conflict,

    /// Resolve back through the trail to the first unique implication point, and backtrack to the level at which the learnt clause asserts.
    #[value(name = "first-uip")]
    FirstUIP,
}

impl std::fmt::Display for AnalysisScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict => write!(f, "Conflict"),
            Self::FirstUIP => write!(f, "FirstUIP"),
        }
    }
}
