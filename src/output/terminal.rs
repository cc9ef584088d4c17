// Colored terminal output for analysis results and the history table.
//
// This module handles all terminal-specific formatting. main.rs only
// decides *what* to show and delegates the *how* here.

use chrono::Local;
use colored::{ColoredString, Colorize};

use crate::history::HistorySummary;
use crate::models::{AnalysisResult, ThreatLevel};

const BAR_WIDTH: usize = 20;

/// Display a single analysis result in full.
pub fn display_result(result: &AnalysisResult) {
    println!(
        "\n{}",
        format!("=== Analysis for {} ===", result.target()).bold()
    );
    println!("  Type:           {}", result.kind());
    println!("  Id:             {}", result.id().as_str().dimmed());
    println!(
        "  Threat level:   {}  {}",
        colorize_level(result.threat_level()),
        threat_bar(result.security_score()),
    );
    println!(
        "  Security score: {}",
        colorize_score(result.security_score())
    );
    println!(
        "                  {}",
        level_description(result.threat_level()).dimmed()
    );
    println!("  Scan status:    {}", scan_badge(result.threat_level()));

    let entries = result.details().entries();
    if !entries.is_empty() {
        println!("\n  Scan details:");
        for (key, value) in entries {
            println!(
                "    {:<20} {}",
                format!("{}:", super::humanize_key(key)),
                value.to_string().bold()
            );
        }
    }

    if !result.recommendations().is_empty() {
        println!("\n  Recommendations:");
        for (i, rec) in result.recommendations().iter().enumerate() {
            println!("    {}. {}", i + 1, rec);
        }
    }
}

/// Display the history log as a table, newest first.
pub fn display_history<'a, I>(results: I)
where
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    let results: Vec<&AnalysisResult> = results.into_iter().collect();
    if results.is_empty() {
        println!("No analyses yet. Run `cyberguard analyze <kind> <target>` to start.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Analysis History ({} entries) ===", results.len()).bold()
    );
    println!();
    println!(
        "  {:<36}  {:<5}  {:<10}  {:<19}  {}",
        "Target".dimmed(),
        "Type".dimmed(),
        "Threat".dimmed(),
        "Date".dimmed(),
        "Id".dimmed(),
    );
    println!("  {}", "-".repeat(110).dimmed());

    for result in results {
        // Pad before coloring so ANSI codes don't throw off the columns
        let level = format!("{:<10}", result.threat_level().as_str());
        println!(
            "  {:<36}  {:<5}  {}  {:<19}  {}",
            super::truncate_chars(result.target(), 33),
            result.kind().as_str(),
            colorize_level_text(result.threat_level(), &level),
            result
                .created_at()
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S"),
            result.id().as_str().dimmed(),
        );
    }
}

/// Display per-level counts for the status view.
pub fn display_summary(summary: &HistorySummary) {
    println!("Analyses recorded: {}", summary.total);
    for level in ThreatLevel::ALL {
        let count = summary.count(level);
        println!("  {:<12} {}", colorize_level(level), count);
    }
}

/// One-line transient message, the terminal stand-in for a toast.
pub fn notice(message: &str) {
    println!("{} {}", "»".cyan().bold(), message);
}

/// Explanation shown under the score.
pub fn level_description(level: ThreatLevel) -> &'static str {
    match level {
        ThreatLevel::Safe => "No immediate threats detected. Standard security protocols in place.",
        ThreatLevel::Suspicious => "Some security concerns identified. Exercise caution.",
        ThreatLevel::Malicious => "High-risk threats detected. Immediate action recommended.",
    }
}

/// Short status badge for the scan panel.
pub fn scan_badge(level: ThreatLevel) -> ColoredString {
    match level {
        ThreatLevel::Safe => "✓ Clean".green(),
        ThreatLevel::Suspicious => "⚠ Warning".yellow(),
        ThreatLevel::Malicious => "✗ Threat".red().bold(),
    }
}

/// Risk bar: the filled portion is the inverse of the security score.
pub fn threat_bar(score: u8) -> String {
    let risk = 100usize.saturating_sub(score as usize);
    let filled = (risk * BAR_WIDTH + 50) / 100;
    let empty = BAR_WIDTH.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Color a score by band: 70+ is healthy, 40-69 is middling, below is poor.
fn colorize_score(score: u8) -> ColoredString {
    let text = format!("{score}/100");
    match score {
        70..=u8::MAX => text.green(),
        40..=69 => text.yellow(),
        _ => text.red().bold(),
    }
}

fn colorize_level(level: ThreatLevel) -> ColoredString {
    colorize_level_text(level, level.as_str())
}

fn colorize_level_text(level: ThreatLevel, text: &str) -> ColoredString {
    match level {
        ThreatLevel::Safe => text.green(),
        ThreatLevel::Suspicious => text.yellow(),
        ThreatLevel::Malicious => text.red().bold(),
    }
}
