// src/config/rules.rs
//! Business-rule configuration (TOML).
//!
//! ```toml
//! critical_alerts = ["procon", "advogado"]
//!
//! [[sectors]]
//! name = "LOGÍSTICA"
//! keywords = ["entrega", "atraso"]
//!
//! [templates.GERAL]
//! positive = "..."
//! neutral = "..."
//! negative = "..."
//! ```
//!
//! Sectors are an array so their configured order survives parsing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analyze::Category;

pub const DEFAULT_BUSINESS_RULES_PATH: &str = "config/business_rules.toml";
pub const ENV_BUSINESS_RULES_PATH: &str = "BUSINESS_RULES_PATH";

/// Default routing sector and template fallback.
pub const GENERAL_SECTOR: &str = "GERAL";

const BUILTIN_RULES: &str = include_str!("../../config/business_rules.toml");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRules {
    #[serde(default)]
    pub critical_alerts: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<SectorRule>,
    #[serde(default)]
    pub templates: HashMap<String, ResponseTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorRule {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTemplate {
    pub positive: String,
    pub neutral: String,
    pub negative: String,
}

impl ResponseTemplate {
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Positive => &self.positive,
            Category::Neutral => &self.neutral,
            Category::Negative => &self.negative,
        }
    }
}

impl BusinessRules {
    /// Parse from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let rules: BusinessRules = toml::from_str(toml_str).context("parsing business rules")?;
        rules.log_summary();
        Ok(rules)
    }

    /// The copy compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_RULES).context("built-in business rules")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading business rules from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("loading business rules from {}", path.display()))
    }

    /// Resolve and load:
    /// 1) `$BUSINESS_RULES_PATH` (must exist)
    /// 2) `config/business_rules.toml`
    /// 3) built-in copy
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_BUSINESS_RULES_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                anyhow::bail!(
                    "{ENV_BUSINESS_RULES_PATH} points to non-existent path {}",
                    pb.display()
                );
            }
            return Self::load_from(&pb);
        }
        let default = PathBuf::from(DEFAULT_BUSINESS_RULES_PATH);
        if default.exists() {
            return Self::load_from(&default);
        }
        info!("no business rules file found, using built-in rules");
        Self::builtin()
    }

    /// Path the loader would read, if any (used to arm hot reload).
    pub fn resolved_path() -> Option<PathBuf> {
        if let Ok(p) = std::env::var(ENV_BUSINESS_RULES_PATH) {
            return Some(PathBuf::from(p));
        }
        let default = PathBuf::from(DEFAULT_BUSINESS_RULES_PATH);
        default.exists().then_some(default)
    }

    /// Template for a sector: exact name, then uppercase name, then GERAL.
    pub fn template_for(&self, sector: &str) -> Option<&ResponseTemplate> {
        self.templates
            .get(sector)
            .or_else(|| self.templates.get(&sector.to_uppercase()))
            .or_else(|| self.templates.get(GENERAL_SECTOR))
    }

    fn log_summary(&self) {
        info!(
            sectors = self.sectors.len(),
            critical_alerts = self.critical_alerts.len(),
            templates = self.templates.len(),
            "business rules loaded"
        );
        if !self.templates.contains_key(GENERAL_SECTOR) {
            warn!("business rules have no {GENERAL_SECTOR} template; unmatched sectors will fail");
        }
    }
}
