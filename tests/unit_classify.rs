// Unit tests for the rule engine.
//
// Covers rule priority within each table, the level/score pairing every
// verdict must respect, determinism across repeated calls, and the detail
// sets attached to each verdict.

use cyberguard::classify::evaluate;
use cyberguard::classify::rules::{rules_for, Matcher, DEFAULT_SCORE};
use cyberguard::models::DetailValue;
use cyberguard::{classify, ThreatLevel, TargetKind};

fn expected_score(level: ThreatLevel, kind: TargetKind) -> u8 {
    match (level, kind) {
        (ThreatLevel::Malicious, TargetKind::Email) => 15,
        (ThreatLevel::Malicious, TargetKind::Url) => 10,
        (ThreatLevel::Suspicious, TargetKind::Email) => 45,
        (ThreatLevel::Suspicious, TargetKind::Url) => 55,
        (ThreatLevel::Suspicious, TargetKind::Phone) => 40,
        (ThreatLevel::Safe, _) => DEFAULT_SCORE,
        (level, kind) => panic!("no rule yields {level} for {kind}"),
    }
}

// ============================================================
// Rule tables — shape
// ============================================================

#[test]
fn every_table_ends_in_a_catch_all() {
    for kind in TargetKind::ALL {
        let rules = rules_for(kind);
        let last = rules.last().expect("table is not empty");
        assert_eq!(last.matcher, Matcher::Always, "{kind}");
        assert_eq!(last.verdict.level, ThreatLevel::Safe, "{kind}");
    }
}

#[test]
fn every_verdict_has_two_recommendations_and_details() {
    for kind in TargetKind::ALL {
        for rule in rules_for(kind) {
            assert_eq!(rule.verdict.recommendations.len(), 2);
            assert!(!rule.verdict.details.is_empty());
        }
    }
}

#[test]
fn every_verdict_pairs_level_with_its_score() {
    for kind in TargetKind::ALL {
        for rule in rules_for(kind) {
            assert_eq!(
                rule.verdict.score,
                expected_score(rule.verdict.level, kind),
                "{kind} {}",
                rule.verdict.level
            );
        }
    }
}

// ============================================================
// Email rules
// ============================================================

#[test]
fn email_malware_keyword_is_malicious() {
    let result = classify("malware@example.com", TargetKind::Email);
    assert_eq!(result.threat_level(), ThreatLevel::Malicious);
    assert_eq!(result.security_score(), 15);
    assert_eq!(
        result.details().get("breachStatus"),
        Some(DetailValue::Text("Found in data breaches"))
    );
}

#[test]
fn email_malicious_keyword_beats_suspicious_keyword() {
    let result = classify("test-suspicious@example.com", TargetKind::Email);
    assert_eq!(result.threat_level(), ThreatLevel::Malicious);
}

#[test]
fn email_keyword_match_is_case_sensitive() {
    // Normalization lowercases emails first, so raw uppercase never reaches
    // the rules in practice; the rules themselves do not fold case.
    let result = classify("TEST@example.com", TargetKind::Email);
    assert_eq!(result.threat_level(), ThreatLevel::Safe);
}

#[test]
fn email_keyword_anywhere_in_address_counts() {
    let result = classify("alice@contest.org", TargetKind::Email);
    assert_eq!(result.threat_level(), ThreatLevel::Suspicious);
    assert_eq!(
        result.recommendations(),
        ["Exercise caution when interacting", "Verify sender identity"]
    );
}

// ============================================================
// URL rules
// ============================================================

#[test]
fn url_keyword_beats_missing_https() {
    let result = classify("http://phishing.example.com", TargetKind::Url);
    assert_eq!(result.threat_level(), ThreatLevel::Malicious);
    assert_eq!(
        result.details().get("malwareDetected"),
        Some(DetailValue::Flag(true))
    );
}

#[test]
fn url_uppercase_https_scheme_is_not_secure() {
    let result = classify("HTTPS://example.com", TargetKind::Url);
    assert_eq!(result.threat_level(), ThreatLevel::Suspicious);
    assert_eq!(result.security_score(), 55);
}

#[test]
fn url_https_is_safe_with_valid_ssl() {
    let result = classify("https://example.com", TargetKind::Url);
    assert_eq!(result.threat_level(), ThreatLevel::Safe);
    assert_eq!(
        result.details().get("sslStatus"),
        Some(DetailValue::Text("Valid SSL certificate"))
    );
}

// ============================================================
// Phone rules
// ============================================================

#[test]
fn phone_with_555_anywhere_is_suspicious() {
    let result = classify("+1 (212) 555-0100", TargetKind::Phone);
    assert_eq!(result.threat_level(), ThreatLevel::Suspicious);
    assert_eq!(
        result.details().get("spamReports"),
        Some(DetailValue::Text("Multiple reports"))
    );
}

#[test]
fn phone_without_555_is_safe() {
    let result = classify("+44 20 7946 0958", TargetKind::Phone);
    assert_eq!(result.threat_level(), ThreatLevel::Safe);
    assert_eq!(result.security_score(), DEFAULT_SCORE);
}

// ============================================================
// Determinism and identity
// ============================================================

#[test]
fn repeated_classification_gives_same_verdict_new_id() {
    let first = classify("http://example.com", TargetKind::Url);
    let second = classify("http://example.com", TargetKind::Url);

    assert_eq!(first.threat_level(), second.threat_level());
    assert_eq!(first.security_score(), second.security_score());
    assert_eq!(first.details(), second.details());
    assert_eq!(first.recommendations(), second.recommendations());
    assert_ne!(first.id(), second.id());
}

#[test]
fn evaluate_matches_classify() {
    let verdict = evaluate("temp@example.com", TargetKind::Email);
    let result = classify("temp@example.com", TargetKind::Email);

    assert_eq!(verdict.level, result.threat_level());
    assert_eq!(verdict.score, result.security_score());
    assert_eq!(&verdict.details, result.details());
}

#[test]
fn result_keeps_target_and_kind() {
    let result = classify("+1 (555) 123-4567", TargetKind::Phone);
    assert_eq!(result.target(), "+1 (555) 123-4567");
    assert_eq!(result.kind(), TargetKind::Phone);
}
