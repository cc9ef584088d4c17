// CyberGuard: rule-based security analysis for phone numbers, email
// addresses and URLs.
//
// This is the library root. `target`, `classify` and `history` are the
// core; the remaining modules are the storage, config and terminal shell
// the CLI builds on top of it.

pub mod classify;
pub mod config;
pub mod db;
pub mod history;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod status;
pub mod target;

pub use classify::classify;
pub use history::AnalysisHistory;
pub use models::{AnalysisId, AnalysisResult, Details, ThreatLevel};
pub use target::{normalize, prepare, validate, TargetError, TargetKind};
