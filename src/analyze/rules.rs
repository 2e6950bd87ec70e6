//! Business-rule engine: priority, routing sector, keyword tags and a canned
//! response, derived from the feedback text plus its sentiment category.
//!
//! All matching is substring matching over the *normalized* text (see
//! [`crate::text::normalize`]); keywords and alerts are normalized the same way
//! when the engine is compiled, so matching ignores case and accents.
//!
//! Rules can be swapped at runtime through [`RulesHandle`]. Callers take an
//! `Arc` snapshot per request, so a reload never shows up mid-analysis.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

use super::classify::{Category, SentimentResult};
use crate::config::rules::{BusinessRules, GENERAL_SECTOR};
use crate::debug::{anon_hash, dev_logging_enabled, is_dev_env};
use crate::error::{RuleError, RuleResult};
use crate::text::normalize;

pub const MAX_TAGS: usize = 5;
pub const ENV_HOT_RELOAD: &str = "BUSINESS_RULES_HOT_RELOAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

/// Operational triage for one piece of feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub priority: Priority,
    pub sector: String,
    pub tags: Vec<String>,
    pub suggested_response: String,
}

#[derive(Debug, Clone)]
struct Keyword {
    /// As configured; this is what tags report.
    raw: String,
    normalized: String,
}

#[derive(Debug, Clone)]
struct CompiledSector {
    name: String,
    keywords: Vec<Keyword>,
}

/// Rules with their phrases pre-normalized for matching.
#[derive(Debug, Clone)]
pub struct BusinessRuleEngine {
    rules: BusinessRules,
    alerts: Vec<String>,
    sectors: Vec<CompiledSector>,
}

impl BusinessRuleEngine {
    pub fn new(rules: BusinessRules) -> Self {
        // Keywords that normalize to nothing would match every text.
        let alerts = rules
            .critical_alerts
            .iter()
            .map(|a| normalize(a))
            .filter(|a| !a.is_empty())
            .collect();
        let sectors = rules
            .sectors
            .iter()
            .map(|s| CompiledSector {
                name: s.name.clone(),
                keywords: s
                    .keywords
                    .iter()
                    .map(|k| Keyword {
                        raw: k.trim().to_string(),
                        normalized: normalize(k),
                    })
                    .filter(|k| !k.normalized.is_empty())
                    .collect(),
            })
            .collect();
        Self {
            rules,
            alerts,
            sectors,
        }
    }

    pub fn rules(&self) -> &BusinessRules {
        &self.rules
    }

    /// Low unless Negative; Negative with a critical alert phrase is Critical.
    pub fn priority(&self, text: &str, category: Category) -> Priority {
        self.priority_in(&normalize(text), category)
    }

    /// First configured sector with any keyword in the text, else GERAL.
    pub fn sector(&self, text: &str) -> &str {
        self.sector_in(&normalize(text))
    }

    /// Matched keywords across all sectors: first-seen order, no duplicates, at most 5.
    pub fn tags(&self, text: &str) -> Vec<String> {
        self.tags_in(&normalize(text))
    }

    /// Template text for `sector` (or GERAL) matching `category`.
    pub fn suggested_response(&self, category: Category, sector: &str) -> RuleResult<&str> {
        self.rules
            .template_for(sector)
            .map(|t| t.for_category(category))
            .ok_or_else(|| RuleError::MissingTemplate {
                sector: sector.to_string(),
            })
    }

    /// All four derivations over one normalization pass.
    pub fn enrich(&self, text: &str, sentiment: &SentimentResult) -> RuleResult<EnrichmentResult> {
        let normalized = normalize(text);
        let category = sentiment.category;

        let priority = self.priority_in(&normalized, category);
        let sector = self.sector_in(&normalized).to_string();
        let tags = self.tags_in(&normalized);
        let suggested_response = self.suggested_response(category, &sector)?.to_string();

        if priority == Priority::Critical {
            warn!(id = %anon_hash(text), %sector, "critical alert detected");
        }
        if dev_logging_enabled() {
            info!(
                target: "rules",
                id = %anon_hash(text),
                priority = priority.as_str(),
                %sector,
                tags = ?tags,
                "enriched"
            );
        }

        Ok(EnrichmentResult {
            priority,
            sector,
            tags,
            suggested_response,
        })
    }

    // --- internals (text already normalized) ---

    fn priority_in(&self, normalized: &str, category: Category) -> Priority {
        if category != Category::Negative {
            return Priority::Low;
        }
        if self.alerts.iter().any(|a| normalized.contains(a.as_str())) {
            Priority::Critical
        } else {
            Priority::High
        }
    }

    fn sector_in(&self, normalized: &str) -> &str {
        self.sectors
            .iter()
            .find(|s| {
                s.keywords
                    .iter()
                    .any(|k| normalized.contains(k.normalized.as_str()))
            })
            .map(|s| s.name.as_str())
            .unwrap_or(GENERAL_SECTOR)
    }

    fn tags_in(&self, normalized: &str) -> Vec<String> {
        let mut seen: Vec<&str> = Vec::new();
        let mut tags = Vec::new();
        for k in self.sectors.iter().flat_map(|s| s.keywords.iter()) {
            if tags.len() == MAX_TAGS {
                break;
            }
            if seen.contains(&k.normalized.as_str()) {
                continue;
            }
            if normalized.contains(k.normalized.as_str()) {
                seen.push(k.normalized.as_str());
                tags.push(k.raw.clone());
            }
        }
        tags
    }
}

/* ----------------------------
Thread-safe handle + hot reload
---------------------------- */

/// Shared, swappable rules. Readers take an `Arc` snapshot and never observe
/// a partially replaced configuration.
#[derive(Clone, Debug)]
pub struct RulesHandle {
    inner: Arc<RwLock<Arc<BusinessRuleEngine>>>,
}

impl RulesHandle {
    pub fn new(engine: BusinessRuleEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(engine))),
        }
    }

    pub fn from_rules(rules: BusinessRules) -> Self {
        Self::new(BusinessRuleEngine::new(rules))
    }

    pub fn snapshot(&self) -> Arc<BusinessRuleEngine> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete snapshot.
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, rules: BusinessRules) {
        let fresh = Arc::new(BusinessRuleEngine::new(rules));
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = fresh;
    }

    /// Parse `path` and swap only if it loads cleanly.
    pub fn reload_from_path(&self, path: &Path) -> anyhow::Result<()> {
        let rules = BusinessRules::load_from(path)?;
        self.replace(rules);
        info!(path = %path.display(), "business rules reloaded");
        Ok(())
    }
}

/// Hot reload is opt-in and dev-only.
fn hot_reload_enabled() -> bool {
    let want = std::env::var(ENV_HOT_RELOAD)
        .map(|v| v == "1")
        .unwrap_or(false);
    want && is_dev_env()
}

/// Poll `path` mtime every 2s and swap rules into `handle` on change.
/// No-op unless `BUSINESS_RULES_HOT_RELOAD=1` in a dev environment.
pub fn start_hot_reload_thread(handle: RulesHandle, path: PathBuf) {
    if !hot_reload_enabled() {
        return;
    }
    debug!(path = %path.display(), "business rules hot reload armed");

    thread::spawn(move || {
        let poll = Duration::from_secs(2);
        let mut last_mtime: Option<SystemTime> = None;

        loop {
            if let Ok(mtime) = fs::metadata(&path).and_then(|m| m.modified()) {
                let changed = match last_mtime {
                    None => false,
                    Some(prev) => mtime > prev,
                };
                if changed {
                    if let Err(e) = handle.reload_from_path(&path) {
                        warn!(error = %e, "business rules reload failed; keeping previous rules");
                    }
                }
                last_mtime = Some(mtime);
            }
            thread::sleep(poll);
        }
    });
}
