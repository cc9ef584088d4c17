// System status display — where history lives, how much of it there is,
// and the most recent verdict.

use anyhow::Result;
use chrono::Local;

use crate::db::HistoryStore;
use crate::history::AnalysisHistory;
use crate::output::terminal;

/// Display system status to the terminal.
pub fn show(store: &dyn HistoryStore, history: &AnalysisHistory) -> Result<()> {
    let stored = store.count()?;
    println!("History store: {} ({} stored)", store.location(), stored);

    terminal::display_summary(&history.summary());

    match history.current() {
        Some(latest) => {
            println!(
                "Latest: {} ({}, {}) at {}",
                latest.target(),
                latest.kind(),
                latest.threat_level(),
                latest
                    .created_at()
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
            );
        }
        None => {
            println!("Latest: none");
            println!("  Run `cyberguard analyze <kind> <target>` to start");
        }
    }

    Ok(())
}
