//! delegation-runner: headless host for the delegation engine.
//!
//! Usage:
//!   delegation-runner --session team.json --category Sales
//!   delegation-runner --ipc-mode --db sessions.db --session-id alice
//!   delegation-runner --presets
//!
//! A session file is a JSON array of session commands, applied in order.

use anyhow::{Context, Result};
use delegation_core::{
    command::SessionCommand,
    config::DelegationConfig,
    delegation::{DelegationRecord, DelegationRound, TaskOutcome},
    export::{employees_csv, history_csv},
    matcher::{MatchMode, MatcherConfig},
    session::{Applied, Session},
    store::SessionStore,
    types::CategoryFilter,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Serialize)]
struct UiState<'a> {
    session_id: &'a str,
    employees:  usize,
    tasks:      usize,
    tools:      usize,
    history:    &'a [DelegationRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    outcomes:   Option<&'a [TaskOutcome]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning:    Option<&'static str>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let top_n = parse_arg(&args, "--top-n", 0usize);
    let data_dir = str_arg(&args, "--data-dir").unwrap_or("./data");
    let db = str_arg(&args, "--db");
    let session_file = str_arg(&args, "--session");
    let category = str_arg(&args, "--category").unwrap_or("All");
    let session_id = str_arg(&args, "--session-id")
        .map(String::from)
        .unwrap_or_else(|| format!("session-{}", uuid::Uuid::new_v4()));

    let config = DelegationConfig::load(data_dir)?;

    if args.iter().any(|a| a == "--presets") {
        print_presets(&config);
        return Ok(());
    }

    let store = match db {
        Some(path) => {
            let store = SessionStore::open(path)?;
            store.migrate()?;
            Some(store)
        }
        None => None,
    };

    let (mut session, restored) = match store.as_ref().map(|s| s.latest_snapshot(&session_id)).transpose()? {
        Some(Some(snapshot)) => {
            log::info!("restored session {session_id} from {}", snapshot.saved_at);
            (Session::restore(snapshot, &config), true)
        }
        _ => (Session::new(session_id.clone(), &config), false),
    };

    if top_n > 0 {
        let requested = MatcherConfig {
            mode: MatchMode::TopN,
            max_results: top_n,
            ..MatcherConfig::default()
        };
        if restored && *session.matcher_config() != requested {
            log::info!(
                "--top-n {top_n} overrides restored matcher config {:?}",
                session.matcher_config()
            );
        }
        session.set_matcher(requested);
    }

    if ipc_mode {
        run_ipc_loop(&mut session, store.as_ref())?;
    } else {
        if let Some(path) = session_file {
            load_session_file(&mut session, path)?;
        }
        let filter: CategoryFilter = category.parse()?;
        let round = session.run_match(Some(filter));
        if let Some(store) = &store {
            store.save_snapshot(&session.snapshot())?;
        }
        print_summary(&session, &round, filter);
    }

    Ok(())
}

fn load_session_file(session: &mut Session, path: &str) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {path}"))?;
    let commands: Vec<SessionCommand> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid session file {path}"))?;
    for command in commands {
        match session.apply(command) {
            Ok(applied) => {
                if let Some(warning) = applied.warning() {
                    log::warn!("{path}: {warning}");
                }
            }
            Err(e) => log::warn!("{path}: command skipped: {e}"),
        }
    }
    Ok(())
}

fn run_ipc_loop(session: &mut Session, store: Option<&SessionStore>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let command: SessionCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match session.apply(command) {
            Ok(applied) => {
                if let Some(store) = store {
                    store.save_snapshot(&session.snapshot())?;
                }
                let state = build_ui_state(session, &applied);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state<'a>(session: &'a Session, applied: &'a Applied) -> UiState<'a> {
    UiState {
        session_id: &session.session_id,
        employees:  session.employees().len(),
        tasks:      session.tasks().len(),
        tools:      session.tools().len(),
        history:    session.history(),
        outcomes:   applied.round().map(|r| r.outcomes.as_slice()),
        warning:    applied.warning(),
    }
}

fn print_presets(config: &DelegationConfig) {
    println!("=== STRENGTH PRESETS ===");
    for label in &config.strength_presets {
        println!("  {label}");
    }
    println!();
    println!("=== WEAKNESS PRESETS ===");
    for label in &config.weakness_presets {
        println!("  {label}");
    }
    println!();
    println!("=== TOOL CATALOG ===");
    for name in config.tool_catalog.names() {
        println!("  {name}");
    }
}

fn print_summary(session: &Session, round: &DelegationRound, filter: CategoryFilter) {
    println!("Delegation Assistant - delegation-runner");
    println!("  session:   {}", session.session_id);
    println!("  employees: {}", session.employees().len());
    println!("  tools:     {}", session.tools().len());
    println!("  tasks:     {}", session.tasks().len());
    match filter {
        CategoryFilter::All     => println!("  category:  All"),
        CategoryFilter::Only(c) => println!("  category:  {c}"),
    }
    println!();

    println!("=== MATCH RESULTS ===");
    if round.outcomes.is_empty() {
        println!("  (No tasks in this category)");
    }
    for outcome in &round.outcomes {
        match outcome {
            TaskOutcome::Matched { record } => println!(
                "  '{}' -> {} ({}) - Confidence: {}%",
                record.task_description,
                record.assignee_name,
                record.assignee_kind.label(),
                record.confidence
            ),
            TaskOutcome::NoMatch { task_description, best_score } => println!(
                "  No strong match for: {task_description} (best {:.0}%)",
                best_score * 100.0
            ),
            TaskOutcome::NotDelegatable { task_description } => {
                println!("  '{task_description}' is not marked for delegation.")
            }
        }
    }

    if !session.employees().is_empty() {
        println!();
        println!("=== EMPLOYEE LIST (CSV) ===");
        print!("{}", employees_csv(session.employees()));
    }

    if !session.history().is_empty() {
        println!();
        println!("=== DELEGATION HISTORY (CSV) ===");
        print!("{}", history_csv(session.history(), !session.tools().is_empty()));
    }
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
