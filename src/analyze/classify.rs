//! Score → category and confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const POSITIVE_THRESHOLD: f64 = 0.2;
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

const CONFIDENCE_BASE: f64 = 0.5;
const CONFIDENCE_STEP: f64 = 0.1;
const CONFIDENCE_SCORE_CAP: f64 = 5.0;
const HIGH_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Positive, Category::Neutral, Category::Negative];

    /// Map an external model label. Unknown labels fall back to Neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positivo" | "positive" => Category::Positive,
            "negativo" | "negative" => Category::Negative,
            _ => Category::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "POSITIVE",
            Category::Neutral => "NEUTRAL",
            Category::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one sentiment analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub category: Category,
    pub score: f64,
    pub confidence: f64,
}

impl SentimentResult {
    /// Confidence is clamped into `[0, 1]`.
    pub fn new(category: Category, score: f64, confidence: f64) -> Self {
        Self {
            category,
            score,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Result for blank input: no scoring happens.
    pub fn neutral() -> Self {
        Self::new(Category::Neutral, 0.0, CONFIDENCE_BASE)
    }

    /// Classify a final score.
    pub fn from_score(score: f64) -> Self {
        Self::new(classify(score), score, confidence(score))
    }

    pub fn has_high_confidence(&self) -> bool {
        self.confidence >= HIGH_CONFIDENCE
    }

    pub fn confidence_percentage(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Symmetric dead zone `[-0.2, 0.2]` is Neutral.
pub fn classify(score: f64) -> Category {
    if score > POSITIVE_THRESHOLD {
        Category::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Category::Negative
    } else {
        Category::Neutral
    }
}

/// `min(1, 0.5 + 0.1 * min(|score|, 5))`.
pub fn confidence(score: f64) -> f64 {
    let step = CONFIDENCE_STEP * score.abs().min(CONFIDENCE_SCORE_CAP);
    (CONFIDENCE_BASE + step).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(classify(0.2), Category::Neutral);
        assert_eq!(classify(0.21), Category::Positive);
        assert_eq!(classify(-0.2), Category::Neutral);
        assert_eq!(classify(-0.21), Category::Negative);
        assert_eq!(classify(0.0), Category::Neutral);
    }

    #[test]
    fn confidence_floor_and_ceiling() {
        assert!((confidence(0.0) - 0.5).abs() < 1e-9);
        assert!((confidence(2.0) - 0.7).abs() < 1e-9);
        assert!((confidence(-2.0) - 0.7).abs() < 1e-9);
        assert!((confidence(5.0) - 1.0).abs() < 1e-9);
        assert!((confidence(42.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn result_helpers() {
        let r = SentimentResult::from_score(3.0);
        assert_eq!(r.category, Category::Positive);
        assert!(r.has_high_confidence());
        assert!((r.confidence_percentage() - 80.0).abs() < 1e-9);
        assert!(!SentimentResult::from_score(1.0).has_high_confidence());

        let n = SentimentResult::neutral();
        assert_eq!(n.category, Category::Neutral);
        assert_eq!(n.score, 0.0);
        assert!(!n.has_high_confidence());

        assert_eq!(SentimentResult::new(Category::Neutral, 0.0, 3.0).confidence, 1.0);
    }

    #[test]
    fn labels_and_serde() {
        assert_eq!(Category::from_label(" Positivo "), Category::Positive);
        assert_eq!(Category::from_label("NEGATIVE"), Category::Negative);
        assert_eq!(Category::from_label("misto"), Category::Neutral);
        assert_eq!(serde_json::to_string(&Category::Negative).unwrap(), "\"NEGATIVE\"");
        assert_eq!(Category::Positive.to_string(), "POSITIVE");
    }
}
