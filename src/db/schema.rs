// Database schema — table creation and migrations.
//
// A `schema_version` table records the applied schema version so later
// migrations can be added without rebuilding existing databases.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// Idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- One row per completed analysis, in the order they were recorded.
        -- result_json holds the full result; the other columns are for
        -- ad-hoc querying only.
        CREATE TABLE IF NOT EXISTS analyses (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            target TEXT NOT NULL,
            kind TEXT NOT NULL,                -- phone / email / url
            threat_level TEXT NOT NULL,        -- safe / suspicious / malicious
            security_score INTEGER NOT NULL,   -- 0 to 100
            result_json TEXT NOT NULL,
            created_at TEXT NOT NULL           -- RFC 3339, UTC
        );

        CREATE INDEX IF NOT EXISTS idx_analyses_level
            ON analyses(threat_level);
        ",
    )
    .context("Failed to create database tables")?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    Ok(())
}
