// Data models — the types that flow between the classifier, the history
// log, the store and the terminal/export output.
//
// These live outside `db` so the core can be used without any storage
// backend compiled in.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::target::TargetKind;

/// Opaque identifier of a single analysis. Unique for the lifetime of a
/// history log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(String);

impl AnalysisId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The primary verdict of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Safe,
    Suspicious,
    Malicious,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 3] = [
        ThreatLevel::Safe,
        ThreatLevel::Suspicious,
        ThreatLevel::Malicious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Safe => "safe",
            ThreatLevel::Suspicious => "suspicious",
            ThreatLevel::Malicious => "malicious",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detail set for an email analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDetails {
    pub domain_reputation: Cow<'static, str>,
    pub breach_status: Cow<'static, str>,
}

/// Detail set for a URL analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDetails {
    pub malware_detected: bool,
    pub phishing_risk: Cow<'static, str>,
    pub ssl_status: Cow<'static, str>,
}

/// Detail set for a phone analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneDetails {
    pub carrier: Cow<'static, str>,
    pub region: Cow<'static, str>,
    pub spam_reports: Cow<'static, str>,
}

/// Kind-specific auxiliary facts attached to a result.
///
/// Serializes to a flat camelCase object (`{"sslStatus": ...}`), which is the
/// shape the export report promises. `Empty` only exists as the starting
/// point before any rule has matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Details {
    Email(EmailDetails),
    Url(UrlDetails),
    Phone(PhoneDetails),
    Empty {},
}

/// A single detail value as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl fmt::Display for DetailValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Text(text) => f.write_str(text),
            DetailValue::Flag(true) => f.write_str("Yes"),
            DetailValue::Flag(false) => f.write_str("No"),
        }
    }
}

impl Details {
    /// Key/value pairs in their canonical order, keyed by the camelCase
    /// names used in the export report.
    pub fn entries(&self) -> Vec<(&'static str, DetailValue<'_>)> {
        match self {
            Details::Email(d) => vec![
                ("domainReputation", DetailValue::Text(&d.domain_reputation)),
                ("breachStatus", DetailValue::Text(&d.breach_status)),
            ],
            Details::Url(d) => vec![
                ("malwareDetected", DetailValue::Flag(d.malware_detected)),
                ("phishingRisk", DetailValue::Text(&d.phishing_risk)),
                ("sslStatus", DetailValue::Text(&d.ssl_status)),
            ],
            Details::Phone(d) => vec![
                ("carrier", DetailValue::Text(&d.carrier)),
                ("region", DetailValue::Text(&d.region)),
                ("spamReports", DetailValue::Text(&d.spam_reports)),
            ],
            Details::Empty {} => Vec::new(),
        }
    }

    /// Look up a single detail by its camelCase key.
    pub fn get(&self, key: &str) -> Option<DetailValue<'_>> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Details::Empty {})
    }
}

/// The outcome of classifying one target.
///
/// Fields are private: level and score are only ever produced together by
/// the rule tables in `classify::rules`, and a result never changes after
/// it is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    id: AnalysisId,
    target: String,
    #[serde(rename = "type")]
    kind: TargetKind,
    threat_level: ThreatLevel,
    security_score: u8,
    details: Details,
    recommendations: Vec<String>,
    created_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub(crate) fn new(
        target: String,
        kind: TargetKind,
        threat_level: ThreatLevel,
        security_score: u8,
        details: Details,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            id: AnalysisId::generate(),
            target,
            kind,
            threat_level,
            security_score,
            details,
            recommendations,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &AnalysisId {
        &self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn threat_level(&self) -> ThreatLevel {
        self.threat_level
    }

    /// 0-100, lower is more dangerous.
    pub fn security_score(&self) -> u8 {
        self.security_score
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
