//! Scores every candidate against a task and picks the winner(s).
//!
//! One configurable behavior covers both observed modes:
//!   - BestMatch: rank, keep scores strictly above `threshold`, truncate.
//!   - TopN:      rank, truncate; no threshold on the shortlist.
//!
//! In either mode only a primary scoring strictly above `threshold`
//! counts as an assignment; see `MatchOutcome::assignee`.
//!
//! Ranking is a stable descending sort, so equal scores keep pool order
//! (employees before tools, each in insertion order).

use crate::{
    candidate::{Candidate, CandidatePool},
    types::{canonical, CandidateKind},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    BestMatch,
    TopN,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub mode:        MatchMode,
    /// Scores must be strictly greater than this in BestMatch mode.
    pub threshold:   f64,
    pub max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            mode:        MatchMode::BestMatch,
            threshold:   DEFAULT_THRESHOLD,
            max_results: 1,
        }
    }
}

impl MatcherConfig {
    /// The tool-aware variant: two best candidates, no threshold.
    pub fn top_two() -> Self {
        Self {
            mode:        MatchMode::TopN,
            threshold:   DEFAULT_THRESHOLD,
            max_results: 2,
        }
    }
}

/// One candidate's standing for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub name:  String,
    pub kind:  CandidateKind,
    pub score: f64,
}

impl RankedCandidate {
    /// Integer percentage, `round(score * 100)`.
    pub fn confidence(&self) -> u32 {
        confidence_percent(self.score)
    }
}

/// Halves round to even: 0.425 -> 42, 0.125 -> 12.
pub fn confidence_percent(score: f64) -> u32 {
    (score * 100.0).round_ties_even().max(0.0) as u32
}

/// Full ranking and the mode's shortlist from a single scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Every candidate, best first.
    pub ranked:   Vec<RankedCandidate>,
    /// Per-mode selection, truncated to `max_results`.
    pub accepted: Vec<RankedCandidate>,
    threshold:    f64,
}

impl MatchOutcome {
    /// The primary candidate, only if it clears the threshold.
    pub fn assignee(&self) -> Option<&RankedCandidate> {
        self.accepted.first().filter(|r| r.score > self.threshold)
    }

    pub fn best_score(&self) -> f64 {
        self.ranked.first().map(|r| r.score).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Every candidate, best first. Never filtered or truncated.
    pub fn rank(&self, task_description: &str, pool: &CandidatePool<'_>) -> Vec<RankedCandidate> {
        let query = canonical(task_description);
        let mut ranked: Vec<RankedCandidate> = pool
            .iter()
            .map(|c: Candidate<'_>| RankedCandidate {
                name:  c.name().to_string(),
                kind:  c.kind(),
                score: c.max_capability_score(&query),
            })
            .collect();
        // sort_by is stable: ties keep pool order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Score the pool once and apply the configured mode.
    pub fn evaluate(&self, task_description: &str, pool: &CandidatePool<'_>) -> MatchOutcome {
        let ranked = self.rank(task_description, pool);
        if let Some(top) = ranked.first() {
            log::debug!(
                "task '{task_description}': top candidate {} scored {:.3}",
                top.name, top.score
            );
        }
        let threshold = self.config.threshold;
        let accepted = ranked
            .iter()
            .filter(|r| match self.config.mode {
                MatchMode::BestMatch => r.score > threshold,
                MatchMode::TopN      => true,
            })
            .take(self.config.max_results)
            .cloned()
            .collect();
        MatchOutcome { ranked, accepted, threshold }
    }

    /// Ranked winners per the configured mode. Empty means "no match"
    /// in BestMatch mode; TopN may return sub-threshold candidates.
    pub fn find_best_match(
        &self,
        task_description: &str,
        pool:             &CandidatePool<'_>,
    ) -> Vec<RankedCandidate> {
        self.evaluate(task_description, pool).accepted
    }
}
