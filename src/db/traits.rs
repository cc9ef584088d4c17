// History store trait — the persistence hook for the analysis log.
//
// The core `AnalysisHistory` never persists itself. Whoever owns it hands
// each new result to a store and, on startup, replays the store back into
// a fresh history. Implementors: SqliteHistoryStore, MemoryStore.

use anyhow::Result;

use crate::models::AnalysisResult;

pub trait HistoryStore {
    /// Persist one newly recorded result.
    fn save(&self, result: &AnalysisResult) -> Result<()>;

    /// Every stored result, in the order it was saved (oldest first).
    fn load_all(&self) -> Result<Vec<AnalysisResult>>;

    /// Number of stored results.
    fn count(&self) -> Result<usize>;

    /// Human-readable description of where results are kept.
    fn location(&self) -> String;
}
