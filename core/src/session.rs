//! Session state: the one owner of every pool and the history log.
//!
//! RULES:
//!   - One Session per active user; handlers receive it by reference.
//!   - Pools change only by whole-entry add or whole-collection clear.
//!   - `run_match` clears the history, then repopulates it.

use crate::{
    candidate::{CandidatePool, Employee, Strengths, Tool},
    command::SessionCommand,
    config::{DelegationConfig, ToolCatalog},
    delegation::{evaluate_round, DelegationRecord, DelegationRound},
    error::{DelegationError, DelegationResult},
    matcher::{Matcher, MatcherConfig},
    snapshot::SessionSnapshot,
    task::Task,
    types::{CategoryFilter, SessionId},
};

/// Result of a pool insertion that may be skipped without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Name already present; the pool is unchanged.
    Duplicate,
    /// Blank name; the pool is unchanged.
    Ignored,
}

impl AddOutcome {
    /// Non-fatal warning for the host, if the add was skipped.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            AddOutcome::Added     => None,
            AddOutcome::Duplicate => Some("name already in use; nothing added"),
            AddOutcome::Ignored   => Some("blank name; nothing added"),
        }
    }
}

/// What one applied command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// A clear, reset, task add or matcher change.
    Updated,
    /// An employee or tool add, possibly skipped.
    Added(AddOutcome),
    /// A delegation round ran and replaced the history.
    Matched(DelegationRound),
}

impl Applied {
    pub fn round(&self) -> Option<&DelegationRound> {
        match self {
            Applied::Matched(round) => Some(round),
            _ => None,
        }
    }

    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Applied::Added(outcome) => outcome.warning(),
            _ => None,
        }
    }
}

pub struct Session {
    pub session_id: SessionId,
    employees:      Vec<Employee>,
    tasks:          Vec<Task>,
    tools:          Vec<Tool>,
    history:        Vec<DelegationRecord>,
    matcher:        Matcher,
    catalog:        ToolCatalog,
}

impl Session {
    pub fn new(session_id: SessionId, config: &DelegationConfig) -> Self {
        Self {
            session_id,
            employees: Vec::new(),
            tasks:     Vec::new(),
            tools:     Vec::new(),
            history:   Vec::new(),
            matcher:   Matcher::new(config.matcher.clone()),
            catalog:   config.tool_catalog.clone(),
        }
    }

    /// Session wired with `DelegationConfig::default_test()`.
    pub fn build_test(session_id: &str) -> Self {
        Self::new(session_id.to_string(), &DelegationConfig::default_test())
    }

    /// Rebuild a session from a saved snapshot, keeping `config`'s catalog.
    pub fn restore(snapshot: SessionSnapshot, config: &DelegationConfig) -> Self {
        Self {
            session_id: snapshot.session_id,
            employees:  snapshot.employees,
            tasks:      snapshot.tasks,
            tools:      snapshot.tools,
            history:    snapshot.history,
            matcher:    Matcher::new(snapshot.matcher),
            catalog:    config.tool_catalog.clone(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            saved_at:   chrono::Utc::now(),
            matcher:    self.matcher.config().clone(),
            employees:  self.employees.clone(),
            tasks:      self.tasks.clone(),
            tools:      self.tools.clone(),
            history:    self.history.clone(),
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn employees(&self) -> &[Employee] { &self.employees }
    pub fn tasks(&self) -> &[Task] { &self.tasks }
    pub fn tools(&self) -> &[Tool] { &self.tools }
    pub fn history(&self) -> &[DelegationRecord] { &self.history }
    pub fn catalog(&self) -> &ToolCatalog { &self.catalog }
    pub fn matcher_config(&self) -> &MatcherConfig { self.matcher.config() }

    pub fn set_matcher(&mut self, config: MatcherConfig) {
        self.matcher = Matcher::new(config);
    }

    pub fn pool(&self) -> CandidatePool<'_> {
        CandidatePool::new(&self.employees, &self.tools)
    }

    // ── Pool mutation ───────────────────────────────────────────

    /// Duplicate employee names are allowed; a blank name is ignored.
    pub fn add_employee(&mut self, employee: Employee) -> AddOutcome {
        if employee.name.is_empty() {
            log::warn!("add_employee: blank name ignored");
            return AddOutcome::Ignored;
        }
        log::debug!(
            "added employee {} ({} strengths)",
            employee.name,
            employee.strengths.len()
        );
        self.employees.push(employee);
        AddOutcome::Added
    }

    pub fn add_task(&mut self, task: Task) {
        log::debug!("added task '{}' [{}]", task.description, task.category);
        self.tasks.push(task);
    }

    /// Tool names are unique; a repeat is a warning and a no-op.
    pub fn add_tool(&mut self, tool: Tool) -> AddOutcome {
        if tool.name.is_empty() {
            log::warn!("add_tool: blank name ignored");
            return AddOutcome::Ignored;
        }
        if self.tools.iter().any(|t| t.name == tool.name) {
            log::warn!("tool '{}' already added", tool.name);
            return AddOutcome::Duplicate;
        }
        self.tools.push(tool);
        AddOutcome::Added
    }

    /// Add a tool by name from the injected catalog.
    pub fn add_catalog_tool(&mut self, name: &str) -> DelegationResult<AddOutcome> {
        let tool = self
            .catalog
            .get(name)
            .cloned()
            .ok_or_else(|| DelegationError::UnknownTool { name: name.to_string() })?;
        Ok(self.add_tool(tool))
    }

    pub fn clear_employees(&mut self) { self.employees.clear(); }
    pub fn clear_tasks(&mut self) { self.tasks.clear(); }
    pub fn clear_tools(&mut self) { self.tools.clear(); }
    pub fn clear_history(&mut self) { self.history.clear(); }

    /// Drop every pool and the history. Matcher config and catalog stay.
    pub fn reset(&mut self) {
        self.clear_employees();
        self.clear_tasks();
        self.clear_tools();
        self.clear_history();
        log::info!("session {} reset", self.session_id);
    }

    // ── Matching ────────────────────────────────────────────────

    /// Run one round and replace the history with its records.
    pub fn run_match(&mut self, filter: Option<CategoryFilter>) -> DelegationRound {
        self.history.clear();
        let round = evaluate_round(&self.tasks, &self.pool(), filter, &self.matcher);
        self.history = round.records.clone();
        round
    }

    /// Apply one host command.
    pub fn apply(&mut self, command: SessionCommand) -> DelegationResult<Applied> {
        let applied = match command {
            SessionCommand::AddEmployee { name, role, strengths, weaknesses } => {
                let strengths: Strengths = strengths
                    .into_iter()
                    .map(|s| (s.label, s.rating))
                    .collect();
                Applied::Added(self.add_employee(Employee::new(&name, &role, strengths, weaknesses)))
            }
            SessionCommand::AddTask { description, category, time_spent, delegatable } => {
                let category = category.parse()?;
                self.add_task(Task::new(&description, category, time_spent, delegatable)?);
                Applied::Updated
            }
            SessionCommand::AddTool { name, capabilities } => {
                Applied::Added(self.add_tool(Tool::new(&name, capabilities)))
            }
            SessionCommand::AddCatalogTool { name } => Applied::Added(self.add_catalog_tool(&name)?),
            SessionCommand::ClearEmployees => { self.clear_employees(); Applied::Updated }
            SessionCommand::ClearTasks     => { self.clear_tasks(); Applied::Updated }
            SessionCommand::ClearTools     => { self.clear_tools(); Applied::Updated }
            SessionCommand::Reset          => { self.reset(); Applied::Updated }
            SessionCommand::SetMatcher { config } => { self.set_matcher(config); Applied::Updated }
            SessionCommand::RunMatch { category } => {
                let filter = category.as_deref().map(str::parse::<CategoryFilter>).transpose()?;
                Applied::Matched(self.run_match(filter))
            }
        };
        Ok(applied)
    }
}
