// src/analyze/mod.rs
//! Sentiment pipeline: normalize → tokenize → score → classify.
//! Business-rule enrichment lives in [`rules`] and runs independently.

pub mod classify;
pub mod context;
pub mod rules;
pub mod scoring;

use tracing::{debug, info};

use crate::debug::{anon_hash, dev_logging_enabled};
use crate::lexicon::{default_lexicon, Lexicon};
use crate::text::{normalize, tokenize};

// Re-export convenient types.
pub use crate::analyze::classify::{classify, confidence, Category, SentimentResult};
pub use crate::analyze::context::ContextAnalyzer;
pub use crate::analyze::rules::{
    start_hot_reload_thread, BusinessRuleEngine, EnrichmentResult, Priority, RulesHandle,
};
pub use crate::analyze::scoring::{ScoreCalculator, ScoreState};

/// Stateless pipeline over a borrowed lexicon; cheap to copy and share.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl SentimentAnalyzer<'static> {
    /// Analyzer over the built-in pt-BR lexicon.
    pub fn portuguese() -> Self {
        Self::new(default_lexicon())
    }
}

impl Default for SentimentAnalyzer<'static> {
    fn default() -> Self {
        Self::portuguese()
    }
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Blank input short-circuits to Neutral / 0 / 0.5.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::neutral();
        }

        let tokens = tokenize(&normalize(text));
        let state = ScoreCalculator::new(self.lexicon).fold(&tokens);
        let result = SentimentResult::from_score(state.total);

        debug!(
            tokens = tokens.len(),
            score = result.score,
            category = result.category.as_str(),
            "sentiment scored"
        );
        if dev_logging_enabled() {
            info!(
                target: "sentiment",
                id = %anon_hash(text),
                score = result.score,
                confidence = result.confidence,
                pivot = state.adversative_seen,
                "analyzed"
            );
        }

        result
    }
}
