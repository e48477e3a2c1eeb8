//! Snapshot serialization: full session state to/from JSON.
//!
//! A snapshot captures everything needed to resume a session after a
//! host restart. The tool catalog is config, not state, and is excluded.

use crate::{
    candidate::{Employee, Tool},
    delegation::DelegationRecord,
    matcher::MatcherConfig,
    task::Task,
    types::SessionId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub saved_at:   DateTime<Utc>,
    pub matcher:    MatcherConfig,
    pub employees:  Vec<Employee>,
    pub tasks:      Vec<Task>,
    pub tools:      Vec<Tool>,
    pub history:    Vec<DelegationRecord>,
}
