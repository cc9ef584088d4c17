use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default simulated analysis latency, matching the web front end.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite file holding the analysis history (CYBERGUARD_DB_PATH)
    pub db_path: String,
    /// Where exported reports are written (CYBERGUARD_EXPORT_DIR)
    pub export_dir: PathBuf,
    /// How long an analysis pretends to take (CYBERGUARD_ANALYSIS_DELAY_MS)
    pub analysis_delay: Duration,
    /// Whether history survives between runs (CYBERGUARD_PERSIST)
    pub persist: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./cyberguard.db".to_string(),
            export_dir: PathBuf::from("."),
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            persist: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Every setting has a
    /// default, so an empty environment is valid.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment, in
    /// production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let analysis_delay = match lookup("CYBERGUARD_ANALYSIS_DELAY_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().with_context(|| {
                    format!("CYBERGUARD_ANALYSIS_DELAY_MS must be a whole number of milliseconds, got '{raw}'")
                })?;
                Duration::from_millis(ms)
            }
            None => defaults.analysis_delay,
        };

        let persist = match lookup("CYBERGUARD_PERSIST").as_deref().map(str::trim) {
            None => defaults.persist,
            Some("1") | Some("true") | Some("yes") | Some("on") => true,
            Some("0") | Some("false") | Some("no") | Some("off") => false,
            Some(other) => anyhow::bail!(
                "CYBERGUARD_PERSIST must be true or false, got '{other}'"
            ),
        };

        Ok(Self {
            db_path: lookup("CYBERGUARD_DB_PATH").unwrap_or(defaults.db_path),
            export_dir: lookup("CYBERGUARD_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            analysis_delay,
            persist,
        })
    }
}
