// Analysis history — the append-only, newest-first log of results.
//
// The log is owned by whoever drives the analyzer (the CLI here). It never
// touches storage itself; see `db::HistoryStore` for the persistence hook.

use std::collections::{HashMap, VecDeque};

use tracing::warn;

use crate::models::{AnalysisResult, ThreatLevel};

/// Newest-first log of analysis results with a "current result" pointer.
#[derive(Debug, Default)]
pub struct AnalysisHistory {
    entries: VecDeque<AnalysisResult>,
    current: Option<usize>,
}

/// Per-level tally of the log, for status output.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HistorySummary {
    pub total: usize,
    pub counts: HashMap<ThreatLevel, usize>,
}

impl HistorySummary {
    pub fn count(&self, level: ThreatLevel) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a result and make it the current one.
    ///
    /// Ids are unique within the log: a result whose id is already present
    /// is refused, the log is left unchanged and `false` is returned.
    pub fn record(&mut self, result: AnalysisResult) -> bool {
        if self.position(result.id().as_str()).is_some() {
            warn!(id = %result.id(), "Refusing to record duplicate analysis id");
            return false;
        }
        self.entries.push_front(result);
        self.current = Some(0);
        true
    }

    /// Look up a stored result by id.
    pub fn find_by_id(&self, id: &str) -> Option<&AnalysisResult> {
        self.position(id).map(|i| &self.entries[i])
    }

    /// Look up a stored result and make it the current one.
    /// A miss leaves the current pointer untouched.
    pub fn view(&mut self, id: &str) -> Option<&AnalysisResult> {
        let index = self.position(id)?;
        self.current = Some(index);
        self.entries.get(index)
    }

    /// The most recently recorded or viewed result.
    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.and_then(|i| self.entries.get(i))
    }

    /// Snapshot of every result, newest first.
    pub fn all(&self) -> Vec<&AnalysisResult> {
        self.entries.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> HistorySummary {
        let mut summary = HistorySummary {
            total: self.entries.len(),
            counts: HashMap::new(),
        };
        for entry in &self.entries {
            *summary.counts.entry(entry.threat_level()).or_insert(0) += 1;
        }
        summary
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.id().as_str() == id)
    }
}

impl FromIterator<AnalysisResult> for AnalysisHistory {
    /// Replay results in the order they were originally recorded
    /// (oldest first); the newest ends up current.
    fn from_iter<I: IntoIterator<Item = AnalysisResult>>(iter: I) -> Self {
        let mut history = Self::new();
        for result in iter {
            history.record(result);
        }
        history
    }
}
