use crate::{candidate::SkillRating, matcher::MatcherConfig};
use serde::{Deserialize, Serialize};

/// All host-issued session commands.
/// Labels and categories arrive raw; Session canonicalizes and parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SessionCommand {
    AddEmployee {
        name:       String,
        #[serde(default)]
        role:       String,
        #[serde(default)]
        strengths:  Vec<SkillRating>,
        #[serde(default)]
        weaknesses: Vec<String>,
    },
    AddTask {
        description: String,
        category:    String,
        time_spent:  u32,
        #[serde(default = "default_delegatable")]
        delegatable: bool,
    },
    AddTool {
        name:         String,
        capabilities: Vec<String>,
    },
    AddCatalogTool {
        name: String,
    },
    ClearEmployees,
    ClearTasks,
    ClearTools,
    Reset,
    SetMatcher {
        config: MatcherConfig,
    },
    /// `category` of None or "All" admits every task.
    RunMatch {
        #[serde(default)]
        category: Option<String>,
    },
}

fn default_delegatable() -> bool {
    true
}
