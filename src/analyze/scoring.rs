//! Score calculator: a single left-to-right fold over stemmed tokens.
//!
//! Per token:
//! - adversative (`mas`, `porem`, ...): `total *= 0.3`, later tokens weigh 1.5x
//! - otherwise weight = `(intensified ? 2.0 : 1.0) * (after pivot ? 1.5 : 1.0)`
//! - positive stem adds `+w` (`-w` if negated), negative stem adds `-w` (`+w` if negated)
//!
//! The pivot decay never resets within one call.

use super::context::ContextAnalyzer;
use crate::lexicon::Lexicon;

pub const ADVERSATIVE_DECAY: f64 = 0.3;
pub const POST_ADVERSATIVE_WEIGHT: f64 = 1.5;
pub const INTENSIFIER_WEIGHT: f64 = 2.0;

/// Running accumulator for one analysis call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreState {
    pub total: f64,
    pub adversative_seen: bool,
}

impl ScoreState {
    /// Decay everything accumulated so far and mark the pivot.
    fn pivot(&mut self) {
        self.total *= ADVERSATIVE_DECAY;
        self.adversative_seen = true;
    }

    fn weight(&self, intensified: bool) -> f64 {
        let importance = if self.adversative_seen {
            POST_ADVERSATIVE_WEIGHT
        } else {
            1.0
        };
        let intensity = if intensified { INTENSIFIER_WEIGHT } else { 1.0 };
        importance * intensity
    }
}

/// Folds a token stream into a signed score using a borrowed lexicon.
#[derive(Clone, Copy, Debug)]
pub struct ScoreCalculator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ScoreCalculator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn calculate(&self, tokens: &[String]) -> f64 {
        self.fold(tokens).total
    }

    /// Full final state, for callers that also want the pivot flag.
    pub fn fold(&self, tokens: &[String]) -> ScoreState {
        let ctx = ContextAnalyzer::new(self.lexicon, tokens);
        let mut state = ScoreState::default();

        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_str();

            if ctx.is_adversative(token) {
                state.pivot();
                continue;
            }

            let negated = ctx.has_negation(i);
            let w = state.weight(ctx.has_intensifier(i));

            // Positive is checked first and wins if both prefixes match.
            if self.lexicon.is_positive(token) {
                state.total += if negated { -w } else { w };
            } else if self.lexicon.is_negative(token) {
                state.total += if negated { w } else { -w };
            }
        }

        state
    }
}
