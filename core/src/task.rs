use crate::{
    error::{DelegationError, DelegationResult},
    types::Category,
};
use serde::{Deserialize, Serialize};

/// A unit of work the user may hand off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Trimmed free text; the matching key.
    pub description: String,
    pub category:    Category,
    /// Estimated minutes. Informational only.
    pub time_spent:  u32,
    pub delegatable: bool,
}

impl Task {
    /// Rejects a blank description or a zero time estimate.
    pub fn new(
        description: &str,
        category:    Category,
        time_spent:  u32,
        delegatable: bool,
    ) -> DelegationResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DelegationError::InvalidTask {
                description: description.to_string(),
                reason:      "description is blank".into(),
            });
        }
        if time_spent == 0 {
            return Err(DelegationError::InvalidTask {
                description: description.to_string(),
                reason:      "time spent must be at least one minute".into(),
            });
        }
        Ok(Self {
            description: description.to_string(),
            category,
            time_spent,
            delegatable,
        })
    }
}
