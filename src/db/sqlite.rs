// SqliteHistoryStore — rusqlite backend implementing the HistoryStore trait.
//
// The analyzer is single-threaded, so the Connection is owned directly
// rather than behind a lock.

use anyhow::Result;
use rusqlite::Connection;

use super::traits::HistoryStore;
use crate::models::AnalysisResult;

pub struct SqliteHistoryStore {
    conn: Connection,
    location: String,
}

impl SqliteHistoryStore {
    /// Wrap an already-opened and migrated rusqlite Connection.
    pub fn new(conn: Connection, location: impl Into<String>) -> Self {
        Self {
            conn,
            location: location.into(),
        }
    }

    /// An in-memory database, mostly useful for tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        super::schema::create_tables(&conn)?;
        Ok(Self::new(conn, ":memory:"))
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn save(&self, result: &AnalysisResult) -> Result<()> {
        super::queries::insert_analysis(&self.conn, result)
    }

    fn load_all(&self) -> Result<Vec<AnalysisResult>> {
        super::queries::load_analyses(&self.conn)
    }

    fn count(&self) -> Result<usize> {
        super::queries::count_analyses(&self.conn)
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}
