// Classification engine — turns a normalized target into a verdict.
//
// Classification is a pure function of (target, kind): only the result id
// and creation timestamp differ between two runs on the same input.

pub mod rules;

use tracing::debug;

use crate::models::AnalysisResult;
use crate::target::TargetKind;

use rules::{rules_for, Verdict};

/// Pick the verdict for a target: the first matching rule wins outright.
///
/// Falls back to the default verdict only if a table has no catch-all,
/// which the shipped tables always do.
pub fn evaluate(target: &str, kind: TargetKind) -> Verdict {
    rules_for(kind)
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matcher.matches(target))
        .map(|(index, rule)| {
            debug!(kind = %kind, rule = index, level = %rule.verdict.level, "Rule matched");
            rule.verdict.clone()
        })
        .unwrap_or_default()
}

/// Classify a normalized target. Never fails.
pub fn classify(target: &str, kind: TargetKind) -> AnalysisResult {
    let verdict = evaluate(target, kind);
    AnalysisResult::new(
        target.to_string(),
        kind,
        verdict.level,
        verdict.score,
        verdict.details,
        verdict
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect(),
    )
}
