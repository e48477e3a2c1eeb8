//! Candidates that can receive a delegated task: employees and tools.
//!
//! Every label is canonicalized on the way in, so the matcher can compare
//! stored labels against a canonical query without re-normalizing.

use crate::{
    similarity::similarity,
    types::{canonical, CandidateKind, Rating, MAX_RATING},
};
use serde::{Deserialize, Serialize};

/// One (label, rating) entry in an employee's strengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub label:  String,
    pub rating: Rating,
}

/// Insertion-ordered label -> rating mapping with unique labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Strengths(Vec<SkillRating>);

impl Strengths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An existing label keeps its original position.
    /// Blank labels are dropped.
    pub fn insert(&mut self, label: &str, rating: Rating) {
        let label = canonical(label);
        if label.is_empty() {
            return;
        }
        match self.0.iter_mut().find(|s| s.label == label) {
            Some(existing) => existing.rating = rating,
            None => self.0.push(SkillRating { label, rating }),
        }
    }

    pub fn get(&self, label: &str) -> Option<Rating> {
        let label = canonical(label);
        self.0.iter().find(|s| s.label == label).map(|s| s.rating)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRating> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Rating)> for Strengths {
    fn from_iter<I: IntoIterator<Item = (S, Rating)>>(iter: I) -> Self {
        let mut strengths = Strengths::new();
        for (label, rating) in iter {
            strengths.insert(label.as_ref(), rating);
        }
        strengths
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name:       String,
    /// Descriptive only; never scored.
    pub role:       String,
    pub strengths:  Strengths,
    /// Informational only; never consulted by the matcher.
    pub weaknesses: Vec<String>,
}

impl Employee {
    pub fn new<W, S>(name: &str, role: &str, strengths: Strengths, weaknesses: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name:       name.trim().to_string(),
            role:       role.trim().to_string(),
            strengths,
            weaknesses: canonical_labels(weaknesses),
        }
    }

    /// Best `similarity * rating / 5` over all strengths; 0.0 with none.
    pub fn max_capability_score(&self, task: &str) -> f64 {
        self.strengths
            .iter()
            .map(|s| similarity(task, &s.label) * (f64::from(s.rating) / f64::from(MAX_RATING)))
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name:         String,
    pub capabilities: Vec<String>,
}

impl Tool {
    pub fn new<C, S>(name: &str, capabilities: C) -> Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name:         name.trim().to_string(),
            capabilities: canonical_labels(capabilities),
        }
    }

    /// Best raw similarity over all capabilities (implicit full rating).
    pub fn max_capability_score(&self, task: &str) -> f64 {
        self.capabilities
            .iter()
            .map(|c| similarity(task, c))
            .fold(0.0, f64::max)
    }
}

/// Anything the matcher can assign a task to.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    Employee(&'a Employee),
    Tool(&'a Tool),
}

impl<'a> Candidate<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Candidate::Employee(e) => &e.name,
            Candidate::Tool(t)     => &t.name,
        }
    }

    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Employee(_) => CandidateKind::Employee,
            Candidate::Tool(_)     => CandidateKind::Tool,
        }
    }

    /// `task` must already be canonical.
    pub fn max_capability_score(&self, task: &str) -> f64 {
        match self {
            Candidate::Employee(e) => e.max_capability_score(task),
            Candidate::Tool(t)     => t.max_capability_score(task),
        }
    }
}

/// Borrowed view over everyone eligible for a round: employees first,
/// then tools, each in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidatePool<'a> {
    pub employees: &'a [Employee],
    pub tools:     &'a [Tool],
}

impl<'a> CandidatePool<'a> {
    pub fn new(employees: &'a [Employee], tools: &'a [Tool]) -> Self {
        Self { employees, tools }
    }

    pub fn employees_only(employees: &'a [Employee]) -> Self {
        Self { employees, tools: &[] }
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.tools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Candidate<'a>> + 'a {
        self.employees
            .iter()
            .map(Candidate::Employee)
            .chain(self.tools.iter().map(Candidate::Tool))
    }
}

fn canonical_labels<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|l| canonical(l.as_ref()))
        .filter(|l| !l.is_empty())
        .collect()
}
