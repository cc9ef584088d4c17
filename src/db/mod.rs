// Storage layer — persistence for the analysis history.
//
// We use rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever CYBERGUARD_DB_PATH points
// (defaults to ./cyberguard.db).

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod queries;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteHistoryStore;
pub use traits::HistoryStore;

use anyhow::Result;
use tracing::info;

use crate::history::AnalysisHistory;

/// Open (or create) the SQLite database and run migrations.
#[cfg(feature = "sqlite")]
pub fn initialize(db_path: &str) -> Result<rusqlite::Connection> {
    use anyhow::Context;
    use std::path::Path;

    // Create parent directories if needed
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {}", db_path))?;
        }
    }

    let conn = rusqlite::Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Open the SQLite-backed history store, creating it on first use.
#[cfg(feature = "sqlite")]
pub fn open_sqlite(db_path: &str) -> Result<Box<dyn HistoryStore>> {
    let conn = initialize(db_path)?;
    Ok(Box::new(SqliteHistoryStore::new(conn, db_path)))
}

/// Rebuild the in-memory history from everything a store holds.
pub fn load_history(store: &dyn HistoryStore) -> Result<AnalysisHistory> {
    let results = store.load_all()?;
    info!(
        count = results.len(),
        location = %store.location(),
        "Loaded analysis history"
    );
    Ok(results.into_iter().collect())
}
