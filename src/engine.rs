//! # Feedback Engine
//! Runs the sentiment pipeline and the business rules on one config snapshot
//! and merges both into an [`AnalysisReport`]. No I/O.

use serde::{Deserialize, Serialize};

use crate::analyze::{EnrichmentResult, RulesHandle, SentimentAnalyzer, SentimentResult};
use crate::config::BusinessRules;
use crate::error::RuleResult;

/// Merged response handed to callers (HTTP layer, CLI, history).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sentiment: SentimentResult,
    pub enrichment: EnrichmentResult,
}

/// Borrows its lexicon through the analyzer; `'static` with the built-in one.
#[derive(Clone, Debug)]
pub struct FeedbackEngine<'a> {
    analyzer: SentimentAnalyzer<'a>,
    rules: RulesHandle,
}

impl FeedbackEngine<'static> {
    /// Built-in lexicon with the given rules.
    pub fn with_rules(rules: BusinessRules) -> Self {
        Self::new(SentimentAnalyzer::portuguese(), RulesHandle::from_rules(rules))
    }
}

impl<'a> FeedbackEngine<'a> {
    pub fn new(analyzer: SentimentAnalyzer<'a>, rules: RulesHandle) -> Self {
        Self { analyzer, rules }
    }

    pub fn analyzer(&self) -> SentimentAnalyzer<'a> {
        self.analyzer
    }

    /// Handle for swapping rules at runtime.
    pub fn rules(&self) -> &RulesHandle {
        &self.rules
    }

    pub fn analyze(&self, text: &str) -> RuleResult<AnalysisReport> {
        let sentiment = self.analyzer.analyze(text);
        let rules = self.rules.snapshot();
        let enrichment = rules.enrich(text, &sentiment)?;
        Ok(AnalysisReport {
            sentiment,
            enrichment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{Category, Priority};
    use crate::config::GENERAL_SECTOR;
    use crate::error::RuleError;
    use crate::lexicon::Lexicon;

    fn engine() -> FeedbackEngine<'static> {
        FeedbackEngine::with_rules(BusinessRules::builtin().unwrap())
    }

    #[test]
    fn negative_logistics_complaint() {
        let r = engine()
            .analyze("A entrega teve atraso de uma semana, péssimo serviço")
            .unwrap();
        assert_eq!(r.sentiment.category, Category::Negative);
        assert_eq!(r.enrichment.priority, Priority::High);
        assert_eq!(r.enrichment.sector, "LOGÍSTICA");
        assert!(r.enrichment.tags.contains(&"entrega".to_string()));
        assert!(r.enrichment.tags.contains(&"atraso".to_string()));
        assert!(r.enrichment.suggested_response.contains("entrega"));
    }

    #[test]
    fn empty_text_defaults() {
        let r = engine().analyze("").unwrap();
        assert_eq!(r.sentiment, SentimentResult::neutral());
        assert_eq!(r.enrichment.priority, Priority::Low);
        assert_eq!(r.enrichment.sector, GENERAL_SECTOR);
        assert!(r.enrichment.tags.is_empty());
        let general = BusinessRules::builtin().unwrap();
        assert_eq!(
            r.enrichment.suggested_response,
            general.templates[GENERAL_SECTOR].neutral
        );
    }

    #[test]
    fn rules_swap_applies_to_next_call() {
        let e = engine();
        e.rules().replace(BusinessRules::default());
        let err = e.analyze("qualquer coisa").unwrap_err();
        assert!(matches!(err, RuleError::MissingTemplate { .. }));
    }

    #[test]
    fn custom_lexicon_with_shared_rules() {
        let lx = Lexicon::from_lists(&["entreg"], &["demor"], &["nao"], &["muito"], &["mas"]);
        let base = engine();
        let e = FeedbackEngine::new(SentimentAnalyzer::new(&lx), base.rules().clone());

        let r = e.analyze("A entrega demorou muito? Não, entregue").unwrap();
        assert_eq!(r.sentiment.category, Category::Negative);
        assert_eq!(r.enrichment.sector, "LOGÍSTICA");
        assert_eq!(r.enrichment.priority, Priority::High);

        // the built-in lexicon has no polarity for "entrega"
        let r = base.analyze("entrega").unwrap();
        assert_eq!(r.sentiment.category, Category::Neutral);
        assert_eq!(
            e.analyze("entrega").unwrap().sentiment.category,
            Category::Positive
        );
    }

    #[test]
    fn report_serializes_with_uppercase_enums() {
        let r = engine().analyze("Produto excelente, recomendo!").unwrap();
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["sentiment"]["category"], "POSITIVE");
        assert_eq!(v["enrichment"]["priority"], "LOW");
        assert_eq!(v["enrichment"]["sector"], "PRODUTO");
    }
}
