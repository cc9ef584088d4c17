// Database queries — every SQL statement the store runs lives here.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::AnalysisResult;

/// Append one result. Ids are unique, so recording the same result twice
/// is an error rather than a silent overwrite.
pub fn insert_analysis(conn: &Connection, result: &AnalysisResult) -> Result<()> {
    let json = serde_json::to_string(result)?;
    conn.execute(
        "INSERT INTO analyses
            (id, target, kind, threat_level, security_score, result_json, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            result.id().as_str(),
            result.target(),
            result.kind().as_str(),
            result.threat_level().as_str(),
            result.security_score(),
            json,
            result.created_at().to_rfc3339(),
        ],
    )
    .with_context(|| format!("Failed to store analysis {}", result.id()))?;
    Ok(())
}

/// Load every stored result, oldest first.
pub fn load_analyses(conn: &Connection) -> Result<Vec<AnalysisResult>> {
    let mut stmt = conn.prepare("SELECT id, result_json FROM analyses ORDER BY seq ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut results = Vec::new();
    for row in rows {
        let (id, json) = row?;
        let result: AnalysisResult = serde_json::from_str(&json)
            .with_context(|| format!("Stored analysis {id} is not valid JSON"))?;
        results.push(result);
    }
    Ok(results)
}

pub fn count_analyses(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))?;
    Ok(count as usize)
}
