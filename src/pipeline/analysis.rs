// Analysis pipeline: one submission from raw input to a recorded result.
//
// prepare (validate + normalize) -> simulated latency -> classify ->
// persist -> record in history. Input errors stop the pipeline before
// anything is classified or stored.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::classify::classify;
use crate::db::HistoryStore;
use crate::history::AnalysisHistory;
use crate::models::AnalysisResult;
use crate::target::{prepare, TargetKind};

/// Run a single analysis and return the recorded result.
///
/// A rejected submission comes back as a `TargetError` inside the
/// `anyhow::Error`, so callers can `downcast_ref` to tell bad input apart
/// from storage failures.
pub async fn run(
    kind: TargetKind,
    raw: &str,
    delay: Duration,
    history: &mut AnalysisHistory,
    store: &dyn HistoryStore,
) -> Result<AnalysisResult> {
    let target = prepare(kind, raw)?;
    debug!(kind = %kind, raw = raw, target = %target, "Input accepted");

    simulate_latency(&target, delay).await?;

    let result = classify(&target, kind);
    store.save(&result)?;
    info!(
        id = %result.id(),
        kind = %kind,
        level = %result.threat_level(),
        score = result.security_score(),
        "Analysis completed"
    );

    history.record(result.clone());
    Ok(result)
}

/// Stand-in for a remote lookup: show a spinner for `delay`.
async fn simulate_latency(target: &str, delay: Duration) -> Result<()> {
    if delay.is_zero() {
        return Ok(());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    pb.set_message(format!("Analyzing {target}..."));
    pb.enable_steady_tick(Duration::from_millis(100));

    tokio::time::sleep(delay).await;

    pb.finish_and_clear();
    Ok(())
}
