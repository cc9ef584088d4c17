// MemoryStore — a HistoryStore that keeps results only for the life of the
// process. Used when persistence is switched off.

use std::cell::RefCell;

use anyhow::Result;

use super::traits::HistoryStore;
use crate::models::AnalysisResult;

#[derive(Debug, Default)]
pub struct MemoryStore {
    results: RefCell<Vec<AnalysisResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn save(&self, result: &AnalysisResult) -> Result<()> {
        let mut results = self.results.borrow_mut();
        if results.iter().any(|r| r.id() == result.id()) {
            anyhow::bail!("Analysis {} is already stored", result.id());
        }
        results.push(result.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<AnalysisResult>> {
        Ok(self.results.borrow().clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.results.borrow().len())
    }

    fn location(&self) -> String {
        "memory (not persisted)".to_string()
    }
}
