//! Delegation round orchestration tests.

use delegation_core::{
    candidate::{CandidatePool, Employee, Strengths, Tool},
    delegation::{evaluate_round, run_delegation_round, TaskOutcome},
    matcher::{Matcher, MatcherConfig},
    task::Task,
    types::{CandidateKind, Category, CategoryFilter},
};

fn jane() -> Employee {
    let strengths: Strengths = [("Invoicing & payment follow-up", 5u8)].into_iter().collect();
    Employee::new("Jane", "Office Manager", strengths, ["Doesn't enjoy phone calls"])
}

fn marcus() -> Employee {
    let strengths: Strengths = [("Cold calling", 5u8), ("Warm lead nurturing", 3)].into_iter().collect();
    Employee::new("Marcus", "Sales Rep", strengths, Vec::<String>::new())
}

fn task(description: &str, category: Category, delegatable: bool) -> Task {
    Task::new(description, category, 30, delegatable).expect("valid task")
}

#[test]
fn invoicing_task_goes_to_jane() {
    let employees = vec![jane(), marcus()];
    let tasks = vec![task("Invoicing and payment follow-up for Q3 clients", Category::Finance, true)];

    let records = run_delegation_round(
        &tasks,
        &CandidatePool::employees_only(&employees),
        None,
        &Matcher::default(),
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].assignee_name, "Jane");
    assert_eq!(records[0].assignee_kind, CandidateKind::Employee);
    assert!(records[0].confidence >= 40, "confidence {}", records[0].confidence);
    assert_eq!(records[0].task_description, "Invoicing and payment follow-up for Q3 clients");
}

#[test]
fn unrelated_task_has_no_match() {
    let employees = vec![jane()];
    let tasks = vec![task("Bake a cake", Category::Admin, true)];
    let pool = CandidatePool::employees_only(&employees);

    let round = evaluate_round(&tasks, &pool, None, &Matcher::default());

    assert!(round.records.is_empty());
    match &round.outcomes[0] {
        TaskOutcome::NoMatch { task_description, best_score } => {
            assert_eq!(task_description, "Bake a cake");
            assert!(*best_score <= 0.4);
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }
}

#[test]
fn non_delegatable_task_is_never_recorded() {
    let employees = vec![marcus()];
    // Perfect textual match, but the user keeps this one.
    let tasks = vec![
        task("Cold calling", Category::Sales, false),
        task("Cold calling new leads", Category::Sales, true),
    ];
    let pool = CandidatePool::employees_only(&employees);

    let round = evaluate_round(&tasks, &pool, None, &Matcher::default());

    assert_eq!(round.records.len(), 1);
    assert_eq!(round.records[0].task_description, "Cold calling new leads");
    assert!(matches!(round.outcomes[0], TaskOutcome::NotDelegatable { .. }));
}

#[test]
fn category_filter_limits_the_round() {
    let employees = vec![jane(), marcus()];
    let tasks = vec![
        task("Invoicing and payment follow-up for Q3 clients", Category::Finance, true),
        task("Cold calling new leads", Category::Sales, true),
    ];
    let pool = CandidatePool::employees_only(&employees);
    let matcher = Matcher::default();

    let sales = run_delegation_round(&tasks, &pool, Some(CategoryFilter::Only(Category::Sales)), &matcher);
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].assignee_name, "Marcus");

    let all = run_delegation_round(&tasks, &pool, Some(CategoryFilter::All), &matcher);
    assert_eq!(all.len(), 2);

    let none = run_delegation_round(&tasks, &pool, Some(CategoryFilter::Only(Category::Creative)), &matcher);
    assert!(none.is_empty());
}

#[test]
fn records_follow_task_order() {
    let employees = vec![jane(), marcus()];
    let tasks = vec![
        task("Cold calling new leads", Category::Sales, true),
        task("Invoicing and payment follow-up for Q3 clients", Category::Finance, true),
    ];
    let records = run_delegation_round(
        &tasks,
        &CandidatePool::employees_only(&employees),
        None,
        &Matcher::default(),
    );
    let names: Vec<&str> = records.iter().map(|r| r.assignee_name.as_str()).collect();
    assert_eq!(names, ["Marcus", "Jane"]);
}

#[test]
fn top_two_mode_still_gates_recording_on_threshold() {
    let employees = vec![jane()];
    let tools = vec![Tool::new("HubSpot", ["crm", "email automation", "lead tracking", "contact management"])];
    let tasks = vec![task("Bake a cake", Category::Admin, true)];
    let pool = CandidatePool::new(&employees, &tools);
    let matcher = Matcher::new(MatcherConfig::top_two());

    // The shortlist keeps both candidates for display.
    assert_eq!(matcher.evaluate("Bake a cake", &pool).accepted.len(), 2);

    let round = evaluate_round(&tasks, &pool, None, &matcher);
    assert!(round.records.is_empty(), "weak primary must not be recorded: {:?}", round.records);
    match &round.outcomes[..] {
        [TaskOutcome::NoMatch { task_description, best_score }] => {
            assert_eq!(task_description, "Bake a cake");
            assert!(*best_score <= 0.4);
        }
        other => panic!("expected one NoMatch outcome, got {other:?}"),
    }
}

#[test]
fn top_two_mode_records_nothing_for_a_candidate_without_strengths() {
    let employees = vec![Employee::new("Nobody", "Staff", Strengths::new(), Vec::<String>::new())];
    let tasks = vec![task("Bake a cake", Category::Admin, true)];

    let round = evaluate_round(
        &tasks,
        &CandidatePool::employees_only(&employees),
        None,
        &Matcher::new(MatcherConfig::top_two()),
    );
    assert!(round.records.is_empty());
    assert_eq!(round.no_match_count(), 1);
    assert_eq!(round.matched_count(), 0);
}

#[test]
fn top_two_mode_records_a_strong_primary() {
    let employees = vec![jane(), marcus()];
    let tasks = vec![task("Cold calling new leads", Category::Sales, true)];

    let records = run_delegation_round(
        &tasks,
        &CandidatePool::employees_only(&employees),
        None,
        &Matcher::new(MatcherConfig::top_two()),
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].assignee_name, "Marcus");
    assert_eq!(records[0].assignee_kind, CandidateKind::Employee);
}

#[test]
fn empty_pool_produces_no_records() {
    let tasks = vec![task("Cold calling new leads", Category::Sales, true)];
    let round = evaluate_round(&tasks, &CandidatePool::default(), None, &Matcher::default());
    assert!(round.records.is_empty());
    assert_eq!(round.no_match_count(), 1);
}
