// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analyze;
pub mod config;
pub mod debug;
pub mod engine;
pub mod error;
pub mod history;
pub mod lexicon;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{
    BusinessRuleEngine, Category, EnrichmentResult, Priority, RulesHandle, SentimentAnalyzer,
    SentimentResult,
};
pub use crate::config::BusinessRules;
pub use crate::engine::{AnalysisReport, FeedbackEngine};
pub use crate::error::RuleError;
pub use crate::history::{AnalysisRecord, CategoryStats, History};
pub use crate::lexicon::Lexicon;

use tracing::info;

/// Build an engine from the resolved rules (see [`BusinessRules::load_default`])
/// and arm the dev-only hot reload watcher when a rules file is in use.
pub fn engine_from_env() -> anyhow::Result<FeedbackEngine<'static>> {
    let rules = BusinessRules::load_default()?;
    let engine = FeedbackEngine::with_rules(rules);
    if let Some(path) = BusinessRules::resolved_path() {
        info!(path = %path.display(), "business rules source");
        analyze::start_hot_reload_thread(engine.rules().clone(), path);
    }
    Ok(engine)
}
