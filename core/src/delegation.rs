//! One delegation round: filter tasks, match each, record the winners.
//!
//! A round's records fully replace whatever a previous round produced;
//! nothing here ever appends to an existing history.

use crate::{
    candidate::CandidatePool,
    matcher::{confidence_percent, Matcher},
    task::Task,
    types::{CandidateKind, CategoryFilter},
};
use serde::{Deserialize, Serialize};

/// A single accepted assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    pub task_description: String,
    pub assignee_name:    String,
    pub assignee_kind:    CandidateKind,
    /// `round(score * 100)` of the winning score; never user-entered.
    pub confidence:       u32,
}

/// What happened to one task that passed the category filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TaskOutcome {
    Matched {
        record: DelegationRecord,
    },
    NoMatch {
        task_description: String,
        best_score:       f64,
    },
    NotDelegatable {
        task_description: String,
    },
}

/// Records plus a per-task outcome report for hosts that render messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DelegationRound {
    pub records:  Vec<DelegationRecord>,
    pub outcomes: Vec<TaskOutcome>,
}

impl DelegationRound {
    pub fn matched_count(&self) -> usize {
        self.records.len()
    }

    pub fn no_match_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TaskOutcome::NoMatch { .. }))
            .count()
    }
}

/// Run the matcher over every delegatable task admitted by `filter`.
/// `None` behaves like `CategoryFilter::All`. A task is recorded only when
/// its primary candidate scores strictly above the matcher's threshold,
/// whatever the mode.
pub fn run_delegation_round(
    tasks:   &[Task],
    pool:    &CandidatePool<'_>,
    filter:  Option<CategoryFilter>,
    matcher: &Matcher,
) -> Vec<DelegationRecord> {
    evaluate_round(tasks, pool, filter, matcher).records
}

/// Same as `run_delegation_round`, keeping the no-match and
/// not-delegatable outcomes alongside the records.
pub fn evaluate_round(
    tasks:   &[Task],
    pool:    &CandidatePool<'_>,
    filter:  Option<CategoryFilter>,
    matcher: &Matcher,
) -> DelegationRound {
    let filter = filter.unwrap_or_default();
    let mut round = DelegationRound::default();

    for task in tasks.iter().filter(|t| filter.admits(t.category)) {
        if !task.delegatable {
            round.outcomes.push(TaskOutcome::NotDelegatable {
                task_description: task.description.clone(),
            });
            continue;
        }

        let outcome = matcher.evaluate(&task.description, pool);
        match outcome.assignee() {
            Some(primary) => {
                let record = DelegationRecord {
                    task_description: task.description.clone(),
                    assignee_name:    primary.name.clone(),
                    assignee_kind:    primary.kind,
                    confidence:       confidence_percent(primary.score),
                };
                round.records.push(record.clone());
                round.outcomes.push(TaskOutcome::Matched { record });
            }
            None => {
                round.outcomes.push(TaskOutcome::NoMatch {
                    task_description: task.description.clone(),
                    best_score:       outcome.best_score(),
                });
            }
        }
    }

    log::info!(
        "delegation round: {} matched, {} without a strong match, {} tasks considered",
        round.matched_count(),
        round.no_match_count(),
        round.outcomes.len(),
    );
    round
}
