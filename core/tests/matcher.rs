//! Matcher scoring, ranking and threshold behaviour.

use delegation_core::{
    candidate::{CandidatePool, Employee, Strengths, Tool},
    matcher::{confidence_percent, MatchMode, Matcher, MatcherConfig},
    similarity::similarity,
    types::CandidateKind,
};

fn employee(name: &str, strengths: &[(&str, u8)]) -> Employee {
    let strengths: Strengths = strengths.iter().copied().collect();
    Employee::new(name, "Staff", strengths, Vec::<String>::new())
}

#[test]
fn exact_skill_match_is_case_insensitive() {
    let employees = vec![employee("Priya", &[("CRM usage", 5)])];
    let pool = CandidatePool::employees_only(&employees);

    let results = Matcher::default().find_best_match("CRM Usage", &pool);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Priya");
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[0].confidence(), 100);
}

#[test]
fn low_rating_scales_the_raw_similarity() {
    let employees = vec![employee("Sam", &[("cold calling", 2)])];
    let pool = CandidatePool::employees_only(&employees);

    let ranked = Matcher::default().rank("cold calling follow-up", &pool);
    let raw = similarity("cold calling follow-up", "cold calling");

    assert!((ranked[0].score - raw * 0.4).abs() < 1e-12);
    assert!(ranked[0].score < raw);
}

#[test]
fn best_single_label_dominates() {
    // One outstanding skill beats many mediocre ones; no summing.
    let employees = vec![
        employee("Generalist", &[("managing inbox", 5), ("vendor communication", 5), ("data cleanup", 5)]),
        employee("Specialist", &[("travel booking", 5)]),
    ];
    let pool = CandidatePool::employees_only(&employees);

    let results = Matcher::default().find_best_match("Travel booking", &pool);
    assert_eq!(results[0].name, "Specialist");
}

#[test]
fn nothing_above_threshold_is_no_match() {
    let employees = vec![
        employee("Ana", &[("taking notes during meetings", 5), ("managing inbox", 5)]),
        employee("Ben", &[("vendor communication", 5), ("creating sops", 5)]),
    ];
    let pool = CandidatePool::employees_only(&employees);

    let matcher = Matcher::default();
    assert!(matcher.find_best_match("Bake a cake", &pool).is_empty());
    // The full ranking is still available for reporting.
    assert_eq!(matcher.rank("Bake a cake", &pool).len(), 2);
}

#[test]
fn threshold_is_strictly_greater_than() {
    // "crm" vs "crm usage" = 0.5 exactly.
    let employees = vec![employee("Cara", &[("crm usage", 5)])];
    let pool = CandidatePool::employees_only(&employees);

    let at_threshold = Matcher::new(MatcherConfig { threshold: 0.5, ..MatcherConfig::default() });
    assert!(at_threshold.find_best_match("crm", &pool).is_empty());

    let below = Matcher::new(MatcherConfig { threshold: 0.49, ..MatcherConfig::default() });
    assert_eq!(below.find_best_match("crm", &pool).len(), 1);
}

#[test]
fn empty_pool_and_empty_task_do_not_panic() {
    let matcher = Matcher::default();
    let no_one: Vec<Employee> = Vec::new();
    assert!(matcher.find_best_match("anything", &CandidatePool::employees_only(&no_one)).is_empty());

    let employees = vec![employee("Dee", &[("data cleanup", 5)])];
    let pool = CandidatePool::employees_only(&employees);
    assert!(matcher.find_best_match("   ", &pool).is_empty());
    assert_eq!(matcher.rank("", &pool)[0].score, 0.0);
}

#[test]
fn employee_without_strengths_scores_zero() {
    let employees = vec![employee("Empty", &[])];
    let pool = CandidatePool::employees_only(&employees);
    assert_eq!(Matcher::default().rank("data cleanup", &pool)[0].score, 0.0);
}

#[test]
fn ties_keep_input_order() {
    let employees = vec![
        employee("First", &[("travel booking", 5)]),
        employee("Second", &[("travel booking", 5)]),
        employee("First", &[("travel booking", 5)]),
    ];
    let pool = CandidatePool::employees_only(&employees);

    let ranked = Matcher::default().rank("travel booking", &pool);
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "First"]);

    let results = Matcher::default().find_best_match("travel booking", &pool);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "First");
}

#[test]
fn tools_score_at_full_rating() {
    let employees = vec![employee("Lee", &[("lead tracking", 4)])];
    let tools = vec![Tool::new("HubSpot", ["CRM", "Lead tracking", "Contact management"])];
    let pool = CandidatePool::new(&employees, &tools);

    let ranked = Matcher::default().rank("lead tracking", &pool);
    assert_eq!(ranked[0].name, "HubSpot");
    assert_eq!(ranked[0].kind, CandidateKind::Tool);
    assert_eq!(ranked[0].score, 1.0);
    assert!((ranked[1].score - 0.8).abs() < 1e-12);
}

#[test]
fn top_two_mode_ignores_threshold() {
    let employees = vec![
        employee("Ana", &[("managing inbox", 5)]),
        employee("Ben", &[("creating sops", 5)]),
        employee("Cy", &[("vendor communication", 5)]),
    ];
    let pool = CandidatePool::employees_only(&employees);

    let matcher = Matcher::new(MatcherConfig::top_two());
    assert_eq!(matcher.config().mode, MatchMode::TopN);

    let results = matcher.find_best_match("Bake a cake", &pool);
    assert_eq!(results.len(), 2);
    assert!(results[0].score >= results[1].score);
}

#[test]
fn out_of_range_rating_is_tolerated() {
    let employees = vec![employee("Overachiever", &[("data cleanup", 10)])];
    let pool = CandidatePool::employees_only(&employees);

    let ranked = Matcher::default().rank("data cleanup", &pool);
    assert_eq!(ranked[0].score, 2.0);
    assert_eq!(ranked[0].confidence(), 200);
}

#[test]
fn confidence_rounds_halves_to_even() {
    assert_eq!(confidence_percent(0.425), 42);
    assert_eq!(confidence_percent(0.125), 12);
    assert_eq!(confidence_percent(0.005), 0);
    assert_eq!(confidence_percent(0.435), 44, "odd halves still round up");
    assert_eq!(confidence_percent(34.0 / 80.0), 42);
}

#[test]
fn evaluate_ranks_once_and_shortlists() {
    let employees = vec![
        employee("Ana", &[("managing inbox", 5)]),
        employee("Ben", &[("creating sops", 5)]),
    ];
    let pool = CandidatePool::employees_only(&employees);

    let outcome = Matcher::default().evaluate("Bake a cake", &pool);
    assert_eq!(outcome.ranked.len(), 2);
    assert!(outcome.accepted.is_empty());
    assert!(outcome.assignee().is_none());
    assert_eq!(outcome.best_score(), outcome.ranked[0].score);

    let outcome = Matcher::default().evaluate("Managing inbox", &pool);
    let assignee = outcome.assignee().expect("exact label is accepted");
    assert_eq!(assignee.name, "Ana");
}
