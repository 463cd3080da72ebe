/*!
Methods for choosing the value of a variable.

# Overview

The core decision procedure is straightforward:
- Collect every variable of the formula which has no value on the trail, and ask a [Decider] to choose one of these together with a value.

# Decisions as literals

Strictly a decision is to value some variable *v* with value *b*.
Still, it is convenient to represent such a decision as a literal with variable *v* and polarity *b*.
For example, a decision to value *p* with value *false* is represented with the literal *-p*.

# Deciders

A decider is supplied to a solve, rather than kept by a context, so that the source of any randomness is always explicit.

- [RandomDecider] chooses a variable uniformly at random, and a value uniformly at random.
- [OrderedDecider] chooses the variable with the lowest id, and always the same value.

```rust
# use sloth_sat::procedures::decision::{Decider, OrderedDecider, RandomDecider};
# use sloth_sat::structures::literal::Literal;
let mut ordered = OrderedDecider { value: true };
assert_eq!(ordered.decide(&[4, 9]), Some(Literal::new(4, false)));

let mut random = RandomDecider::seeded(0);
let choice = random.decide(&[4, 9]).unwrap();
assert!(choice.variable() == 4 || choice.variable() == 9);
```
*/

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{literal::Literal, variable::Variable},
    types::err::{self},
};

/// Something which chooses a variable and a value for that variable.
pub trait Decider {
    /// Chooses some variable from `candidates`, together with a value, returned as a literal.
    ///
    /// Candidates are given in increasing order, and are never empty when called from a context.
    fn decide(&mut self, candidates: &[Variable]) -> Option<Literal>;
}

/// Uniformly random choices of variable and value.
pub struct RandomDecider<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDecider<R> {
    pub fn new(rng: R) -> Self {
        RandomDecider { rng }
    }
}

impl RandomDecider<StdRng> {
    /// A decider whose choices are fixed by `seed`.
    pub fn seeded(seed: u64) -> Self {
        RandomDecider::new(StdRng::seed_from_u64(seed))
    }

    /// A decider seeded from the operating system.
    pub fn from_entropy() -> Self {
        RandomDecider::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Decider for RandomDecider<R> {
    fn decide(&mut self, candidates: &[Variable]) -> Option<Literal> {
        let variable = *candidates.choose(&mut self.rng)?;
        let value = self.rng.gen_bool(0.5);
        Some(Literal::from_value(variable, value))
    }
}

/// Choices of the lowest candidate variable, always with the same value.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderedDecider {
    pub value: bool,
}

impl Decider for OrderedDecider {
    fn decide(&mut self, candidates: &[Variable]) -> Option<Literal> {
        candidates
            .first()
            .map(|variable| Literal::from_value(*variable, self.value))
    }
}

impl Context {
    /// Chooses a variable without a value and a value for the variable, using `decider`.
    ///
    /// The choice is returned as a literal, and is not made on the trail.
    /// Returns an error if every variable has a value, or if the decider makes an invalid choice.
    ///
    /// ```rust,ignore
    /// let decision = self.make_decision(decider)?;
    /// self.trail.increment_level();
    /// self.trail.assign(decision.variable(), decision.polarity(), None)?;
    /// ```
    pub fn make_decision(&mut self, decider: &mut impl Decider) -> Result<Literal, err::ErrorKind> {
        let candidates = self
            .trail
            .unvalued_variables(&self.formula)
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            return Err(err::DecisionError::Exhausted.into());
        }

        match decider.decide(&candidates) {
            Some(decision) if candidates.binary_search(&decision.variable()).is_ok() => {
                self.counters.total_decisions += 1;
                log::debug!(target: targets::DECISION, "Decision {decision} from {} candidates", candidates.len());
                Ok(decision)
            }

            Some(invalid) => Err(err::DecisionError::InvalidChoice(invalid.variable()).into()),

            None => Err(err::DecisionError::Exhausted.into()),
        }
    }
}
