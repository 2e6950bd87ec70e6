//! Per-token context lookups over an already tokenized sequence.

use crate::lexicon::Lexicon;

/// How many tokens back a negation still applies.
pub const NEGATION_WINDOW: usize = 2;

/// Read-only view of a token sequence against a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct ContextAnalyzer<'a> {
    lexicon: &'a Lexicon,
    tokens: &'a [String],
}

impl<'a> ContextAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon, tokens: &'a [String]) -> Self {
        Self { lexicon, tokens }
    }

    /// True if one of the two tokens before `i` is a negation.
    pub fn has_negation(&self, i: usize) -> bool {
        (1..=NEGATION_WINDOW)
            .any(|k| i >= k && self.lexicon.is_negation(self.tokens[i - k].as_str()))
    }

    /// True if the token right before `i` is an intensifier.
    pub fn has_intensifier(&self, i: usize) -> bool {
        i >= 1 && self.lexicon.is_intensifier(self.tokens[i - 1].as_str())
    }

    /// Exact membership of a stemmed token in the adversative set.
    pub fn is_adversative(&self, token: &str) -> bool {
        self.lexicon.is_adversative(token)
    }
}
