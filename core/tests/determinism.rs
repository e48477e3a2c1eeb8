//! Two sessions, same inputs, same rounds.
//! They must produce byte-identical histories and outcome reports.

use delegation_core::{
    candidate::{Employee, Strengths},
    config::DelegationConfig,
    delegation::DelegationRound,
    session::Session,
    task::Task,
    types::Category,
};

fn build_session(session_id: &str) -> Session {
    let config = DelegationConfig::default_test();
    let mut session = Session::new(session_id.to_string(), &config);

    // Every preset as a strength, with ratings cycling 1..=5.
    for (i, chunk) in config.strength_presets.chunks(5).enumerate() {
        let strengths: Strengths = chunk
            .iter()
            .enumerate()
            .map(|(j, label)| (label.as_str(), (j % 5 + 1) as u8))
            .collect();
        session.add_employee(Employee::new(&format!("employee-{i}"), "Staff", strengths, Vec::<String>::new()));
    }
    for name in ["HubSpot", "QuickBooks", "Calendly", "Trello"] {
        session.add_catalog_tool(name).expect("catalog tool");
    }

    let descriptions = [
        ("Invoicing and payment follow-up for Q3 clients", Category::Finance),
        ("Book travel for the Denver trade show", Category::Logistics),
        ("Clean up the CRM contact list", Category::Sales),
        ("Schedule next week's team meetings", Category::Admin),
        ("Write the SOP for onboarding", Category::Admin),
        ("Bake a cake", Category::Admin),
        ("Summarize competitor research", Category::Creative),
        ("Process backlog of orders", Category::Logistics),
    ];
    for (description, category) in descriptions {
        session.add_task(Task::new(description, category, 30, true).expect("valid task"));
    }
    session
}

fn serialize(round: &DelegationRound) -> String {
    serde_json::to_string(round).expect("serialize round")
}

#[test]
fn same_inputs_produce_identical_rounds() {
    let mut session_a = build_session("det-a");
    let mut session_b = build_session("det-b");

    for _ in 0..3 {
        let round_a = session_a.run_match(None);
        let round_b = session_b.run_match(None);
        assert_eq!(serialize(&round_a), serialize(&round_b));
    }

    assert_eq!(session_a.history(), session_b.history());
    assert!(!session_a.history().is_empty(), "expected at least one match");
}

#[test]
fn repeated_rounds_do_not_accumulate() {
    let mut session = build_session("det-repeat");
    let first = session.run_match(None);
    let second = session.run_match(None);

    assert_eq!(first, second);
    assert_eq!(session.history().len(), first.records.len());
}

#[test]
fn every_record_respects_the_threshold() {
    let mut session = build_session("det-threshold");
    let round = session.run_match(None);

    for record in &round.records {
        assert!(record.confidence >= 40, "{record:?} recorded below threshold");
    }
    assert_eq!(round.outcomes.len(), 8);
}
