//! Error types surfaced by the triage core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// No response template for the resolved sector and no GERAL fallback.
    #[error("no response template for sector `{sector}` and no `GERAL` fallback configured")]
    MissingTemplate { sector: String },
}

pub type RuleResult<T> = Result<T, RuleError>;
