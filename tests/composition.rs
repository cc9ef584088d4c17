// Composition tests — verifying that the modules chain together correctly.
//
// These tests exercise the data flow a submission takes:
//   prepare -> classify -> history -> store -> export
// Storage uses in-memory stores or a temporary SQLite file, and exports
// are written into temporary directories.

use cyberguard::db::{load_history, HistoryStore, MemoryStore};
use cyberguard::output::export;
use cyberguard::{classify, prepare, AnalysisHistory, TargetKind, ThreatLevel};

// ============================================================
// Chain: prepare -> classify
// ============================================================

#[test]
fn formatted_north_american_number_is_flagged() {
    let target = prepare(TargetKind::Phone, "15551234567").unwrap();
    assert_eq!(target, "+1 (555) 123-4567");

    let result = classify(&target, TargetKind::Phone);
    assert_eq!(result.threat_level(), ThreatLevel::Suspicious);
    assert_eq!(result.security_score(), 40);
    assert_eq!(
        result.recommendations(),
        [
            "Exercise caution when answering",
            "Do not share personal information"
        ]
    );
}

#[test]
fn url_without_scheme_is_rejected_before_classifying() {
    let err = prepare(TargetKind::Url, "example.com/login").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid url");

    let target = prepare(TargetKind::Url, "https://example.com/login").unwrap();
    let result = classify(&target, TargetKind::Url);
    assert_eq!(result.threat_level(), ThreatLevel::Safe);
    assert_eq!(result.security_score(), 85);
}

#[test]
fn uppercase_email_keywords_are_caught_after_normalization() {
    let target = prepare(TargetKind::Email, "TEMP.Inbox@Example.com").unwrap();
    let result = classify(&target, TargetKind::Email);
    assert_eq!(result.target(), "temp.inbox@example.com");
    assert_eq!(result.threat_level(), ThreatLevel::Suspicious);
    assert_eq!(result.security_score(), 45);
}

// ============================================================
// Chain: classify -> history
// ============================================================

#[test]
fn history_lists_newest_first() {
    let mut history = AnalysisHistory::new();
    let first = classify("https://example.com", TargetKind::Url);
    let second = classify("malware@example.com", TargetKind::Email);

    history.record(first.clone());
    history.record(second.clone());

    let ids: Vec<_> = history.all().iter().map(|r| r.id().clone()).collect();
    assert_eq!(ids, vec![second.id().clone(), first.id().clone()]);
    assert_eq!(history.current().unwrap().id(), second.id());
}

#[test]
fn viewing_an_older_result_moves_current_only() {
    let mut history = AnalysisHistory::new();
    let first = classify("https://example.com", TargetKind::Url);
    let second = classify("+44 20 7946 0958", TargetKind::Phone);
    history.record(first.clone());
    history.record(second.clone());

    let viewed = history.view(first.id().as_str()).unwrap();
    assert_eq!(viewed.target(), "https://example.com");
    assert_eq!(history.current().unwrap().id(), first.id());

    // Order is unaffected by viewing.
    assert_eq!(history.all()[0].id(), second.id());
    assert_eq!(history.len(), 2);
}

#[test]
fn unknown_id_is_not_found_and_keeps_current() {
    let mut history = AnalysisHistory::new();
    let result = classify("https://example.com", TargetKind::Url);
    history.record(result.clone());

    assert!(history.find_by_id("does-not-exist").is_none());
    assert!(history.view("does-not-exist").is_none());
    assert_eq!(history.current().unwrap().id(), result.id());
}

#[test]
fn summary_counts_each_level() {
    let history: AnalysisHistory = [
        classify("https://example.com", TargetKind::Url),
        classify("http://example.com", TargetKind::Url),
        classify("phishing@example.com", TargetKind::Email),
        classify("+15550000000", TargetKind::Phone),
    ]
    .into_iter()
    .collect();

    let summary = history.summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.count(ThreatLevel::Safe), 2);
    assert_eq!(summary.count(ThreatLevel::Suspicious), 2);
    assert_eq!(summary.count(ThreatLevel::Malicious), 0);
}

// ============================================================
// Chain: history -> store -> history
// ============================================================

#[test]
fn memory_store_replays_into_same_order() {
    let store = MemoryStore::new();
    let first = classify("https://example.com", TargetKind::Url);
    let second = classify("test@example.com", TargetKind::Email);
    store.save(&first).unwrap();
    store.save(&second).unwrap();

    let history = load_history(&store).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.all()[0], &second);
    assert_eq!(history.all()[1], &first);
    assert_eq!(history.current().unwrap().id(), second.id());
}

#[test]
fn memory_store_rejects_duplicate_ids() {
    let store = MemoryStore::new();
    let result = classify("https://example.com", TargetKind::Url);
    store.save(&result).unwrap();
    assert!(store.save(&result).is_err());
    assert_eq!(store.count().unwrap(), 1);
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_store_round_trips_results() {
    use cyberguard::db::SqliteHistoryStore;

    let store = SqliteHistoryStore::in_memory().unwrap();
    let phone = classify("+1 (555) 123-4567", TargetKind::Phone);
    let url = classify("http://example.com", TargetKind::Url);
    store.save(&phone).unwrap();
    store.save(&url).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, vec![phone, url]);
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("history.db");
    let db_path = db_path.to_str().unwrap();

    let result = classify("suspicious@example.com", TargetKind::Email);
    {
        let store = cyberguard::db::open_sqlite(db_path).unwrap();
        store.save(&result).unwrap();
    }

    let store = cyberguard::db::open_sqlite(db_path).unwrap();
    assert_eq!(store.count().unwrap(), 1);

    let history = load_history(store.as_ref()).unwrap();
    let restored = history.find_by_id(result.id().as_str()).unwrap();
    assert_eq!(restored, &result);
    assert_eq!(restored.threat_level(), ThreatLevel::Malicious);
}

// ============================================================
// Chain: classify -> export
// ============================================================

#[test]
fn export_writes_report_into_export_dir() {
    let dir = tempfile::tempdir().unwrap();
    let result = classify("http://example.com", TargetKind::Url);

    let path = export::write_report(&result, dir.path(), None).unwrap();
    assert_eq!(path.parent().unwrap(), dir.path());

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("cyberguard-analysis-url-"), "{name}");
    assert!(name.ends_with(".json"), "{name}");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "details",
            "generatedBy",
            "recommendations",
            "securityScore",
            "target",
            "threatLevel",
            "timestamp",
            "type",
        ]
    );
    assert_eq!(object["type"], "url");
    assert_eq!(object["threatLevel"], "suspicious");
    assert_eq!(object["securityScore"], 55);
    assert_eq!(object["generatedBy"], export::GENERATED_BY);
    assert_eq!(object["details"]["sslStatus"], "Not secure (HTTP)");
    assert_eq!(object["details"]["malwareDetected"], false);
}

#[test]
fn export_honors_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("reports").join("latest.json");
    let result = classify("+44 20 7946 0958", TargetKind::Phone);

    let path = export::write_report(&result, dir.path(), Some(&output)).unwrap();
    assert_eq!(path, output);
    assert!(output.exists());
}
