// tests/rules_config.rs
// Business-rule loading from files/env and runtime swaps.
// Self-contained: inline TOML fixtures written to temp dirs.

use std::{env, fs};

use feedback_sentiment_analyzer::config::rules::ENV_BUSINESS_RULES_PATH;
use feedback_sentiment_analyzer::{
    engine_from_env, BusinessRules, Category, Priority, RuleError, RulesHandle, SentimentResult,
};

const TEST_TOML: &str = r#"
critical_alerts = ["chargeback"]

[[sectors]]
name = "PAGAMENTOS"
keywords = ["fatura", "juros"]

[templates.PAGAMENTOS]
positive = "pag+"
neutral = "pag="
negative = "pag-"

[templates.GERAL]
positive = "ger+"
neutral = "ger="
negative = "ger-"
"#;

#[serial_test::serial]
#[test]
fn engine_from_env_reads_configured_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("rules.toml");
    fs::write(&path, TEST_TOML).unwrap();
    env::set_var(ENV_BUSINESS_RULES_PATH, path.display().to_string());

    let engine = engine_from_env().unwrap();
    let r = engine
        .analyze("Fatura com juros absurdos, vou pedir chargeback")
        .unwrap();
    assert_eq!(r.sentiment.category, Category::Negative);
    assert_eq!(r.enrichment.priority, Priority::Critical);
    assert_eq!(r.enrichment.sector, "PAGAMENTOS");
    assert_eq!(r.enrichment.tags, vec!["fatura", "juros"]);
    assert_eq!(r.enrichment.suggested_response, "pag-");

    env::remove_var(ENV_BUSINESS_RULES_PATH);
}

#[serial_test::serial]
#[test]
fn engine_from_env_rejects_broken_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("rules.toml");
    fs::write(&path, "[[sectors]]\nkeywords = 1\n").unwrap();
    env::set_var(ENV_BUSINESS_RULES_PATH, path.display().to_string());

    assert!(engine_from_env().is_err());

    env::remove_var(ENV_BUSINESS_RULES_PATH);
}

#[test]
fn reload_swaps_rules_for_new_snapshots_only() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("rules.toml");
    fs::write(&path, TEST_TOML).unwrap();

    let handle = RulesHandle::from_rules(BusinessRules::builtin().unwrap());
    let old = handle.snapshot();
    handle.reload_from_path(&path).unwrap();
    let new = handle.snapshot();

    assert_eq!(old.sector("segunda via da fatura"), "FINANCEIRO");
    assert_eq!(new.sector("segunda via da fatura"), "PAGAMENTOS");
}

#[test]
fn missing_fallback_template_surfaces_as_error() {
    let rules = BusinessRules::from_toml_str(
        r#"
[[sectors]]
name = "LOJA"
keywords = ["loja"]

[templates.LOJA]
positive = "l+"
neutral = "l="
negative = "l-"
"#,
    )
    .unwrap();
    let handle = RulesHandle::from_rules(rules);
    let engine = handle.snapshot();

    // matched sector has its own template
    let ok = engine
        .enrich("a loja é ótima", &SentimentResult::from_score(1.0))
        .unwrap();
    assert_eq!(ok.suggested_response, "l+");

    // unmatched text routes to GERAL, which is not configured
    let err = engine
        .enrich("sem palavra chave", &SentimentResult::neutral())
        .unwrap_err();
    assert_eq!(
        err,
        RuleError::MissingTemplate {
            sector: "GERAL".into()
        }
    );
    assert!(err.to_string().contains("GERAL"));
}
