//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! Session code hands over snapshots and never executes SQL directly.

use crate::{error::DelegationResult, snapshot::SessionSnapshot};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Open (or create) the session database at `path`.
    pub fn open(path: &str) -> DelegationResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; in-memory ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DelegationResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> DelegationResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_sessions.sql"))?;
        Ok(())
    }

    // ── Session ────────────────────────────────────────────────

    /// Register a session id. Re-registering an existing id is a no-op.
    pub fn ensure_session(&self, session_id: &str, version: &str) -> DelegationResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO session (session_id, version, created_at)
             VALUES (?1, ?2, ?3)",
            params![session_id, version, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    // ── Snapshot ───────────────────────────────────────────────

    pub fn save_snapshot(&self, snapshot: &SessionSnapshot) -> DelegationResult<()> {
        self.ensure_session(&snapshot.session_id, env!("CARGO_PKG_VERSION"))?;
        let json = serde_json::to_string(snapshot)?;
        self.conn.execute(
            "INSERT INTO session_snapshot (session_id, saved_at, state_json)
             VALUES (?1, ?2, ?3)",
            params![snapshot.session_id, snapshot.saved_at.to_rfc3339(), json],
        )?;
        log::debug!("snapshot saved for session {}", snapshot.session_id);
        Ok(())
    }

    pub fn latest_snapshot(&self, session_id: &str) -> DelegationResult<Option<SessionSnapshot>> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT state_json FROM session_snapshot
                 WHERE session_id = ?1
                 ORDER BY id DESC LIMIT 1",
                params![session_id],
                |row| row.get(0),
            )
            .optional()?;
        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }

    pub fn snapshot_count(&self, session_id: &str) -> DelegationResult<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM session_snapshot WHERE session_id = ?1",
            params![session_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}
