//! Shared primitive types used across the delegation engine.

use crate::error::{DelegationError, DelegationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A skill rating on the 1..=5 scale. Not range-checked by the matcher.
pub type Rating = u8;

/// The highest rating; weights are `rating / MAX_RATING`.
pub const MAX_RATING: Rating = 5;

/// Identifier of one host session (one per active user).
pub type SessionId = String;

/// Canonical form of every stored label and every query string.
pub fn canonical(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Closed set of task categories.
/// Variants are never reordered; `ALL` below relies on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Admin,
    Sales,
    Creative,
    Technical,
    Logistics,
    Finance,
    #[serde(rename = "Customer Service")]
    CustomerService,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Admin,
        Category::Sales,
        Category::Creative,
        Category::Technical,
        Category::Logistics,
        Category::Finance,
        Category::CustomerService,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Admin           => "Admin",
            Category::Sales           => "Sales",
            Category::Creative        => "Creative",
            Category::Technical       => "Technical",
            Category::Logistics       => "Logistics",
            Category::Finance         => "Finance",
            Category::CustomerService => "Customer Service",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DelegationError;

    fn from_str(s: &str) -> DelegationResult<Self> {
        let wanted = canonical(s);
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted)
            .ok_or_else(|| DelegationError::UnknownCategory { name: s.to_string() })
    }
}

/// Category selector for a delegation round. `All` is never stored on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All     => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DelegationError;

    fn from_str(s: &str) -> DelegationResult<Self> {
        if canonical(s) == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Which kind of candidate received an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Employee,
    Tool,
}

impl CandidateKind {
    pub fn label(&self) -> &'static str {
        match self {
            CandidateKind::Employee => "Employee",
            CandidateKind::Tool     => "Tool",
        }
    }
}
