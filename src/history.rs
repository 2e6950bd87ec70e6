//! Bounded in-memory log of analyses plus per-category statistics.
//!
//! Records are immutable once pushed; the only removal paths are the capacity
//! bound (oldest first) and `clear()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::analyze::{Category, EnrichmentResult, SentimentResult};
use crate::engine::AnalysisReport;

/// Default number of records for a "latest analyses" listing.
pub const DEFAULT_RECENT: usize = 10;
const MAX_CAPACITY: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: u64,
    pub text: String,
    pub sentiment: SentimentResult,
    pub enrichment: EnrichmentResult,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: Category,
    pub count: u64,
    /// Share of all records, 0..=100, two decimals.
    pub percentage: f64,
}

#[derive(Debug)]
pub struct History {
    inner: Mutex<State>,
    cap: usize,
}

#[derive(Debug, Default)]
struct State {
    records: VecDeque<AnalysisRecord>,
    next_id: u64,
}

impl History {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.clamp(1, MAX_CAPACITY);
        Self {
            inner: Mutex::new(State {
                records: VecDeque::with_capacity(cap.min(1_024)),
                next_id: 1,
            }),
            cap,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stamp and store one analysis; returns the stored record.
    pub fn push(&self, text: &str, report: &AnalysisReport) -> AnalysisRecord {
        let mut st = self.lock();
        let record = AnalysisRecord {
            id: st.next_id,
            text: text.to_string(),
            sentiment: report.sentiment,
            enrichment: report.enrichment.clone(),
            created_at: Utc::now(),
        };
        st.next_id += 1;
        st.records.push_back(record.clone());
        while st.records.len() > self.cap {
            st.records.pop_front();
        }
        record
    }

    /// Up to `n` records, newest first.
    pub fn recent(&self, n: usize) -> Vec<AnalysisRecord> {
        let st = self.lock();
        st.records.iter().rev().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bulk history clear. Ids keep increasing afterwards.
    pub fn clear(&self) {
        self.lock().records.clear();
    }

    /// One entry per category, in Positive, Neutral, Negative order.
    pub fn stats(&self) -> Vec<CategoryStats> {
        let st = self.lock();
        let total = st.records.len() as u64;
        Category::ALL
            .iter()
            .map(|&category| {
                let count = st
                    .records
                    .iter()
                    .filter(|r| r.sentiment.category == category)
                    .count() as u64;
                CategoryStats {
                    category,
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(2_000)
    }
}

/// `count * 100 / total`, rounded half-up to two decimals; 0 for an empty log.
fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    // hundredths of a percent
    let scaled = count as u128 * 10_000;
    let total = total as u128;
    let hundredths = (scaled * 2 + total) / (total * 2);
    hundredths as f64 / 100.0
}
