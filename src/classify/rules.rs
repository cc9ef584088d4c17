// Rule tables — one ordered list of (matcher, verdict) pairs per target kind.
//
// The first rule whose matcher accepts the target decides the whole verdict.
// Every table ends in a catch-all, so classification always lands somewhere.

use std::borrow::Cow;

use crate::models::{Details, EmailDetails, PhoneDetails, ThreatLevel, UrlDetails};
use crate::target::TargetKind;

/// Score given to targets that trip no warning rule.
pub const DEFAULT_SCORE: u8 = 85;

/// Predicate over the normalized target text. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Target contains at least one of the needles.
    ContainsAny(&'static [&'static str]),
    /// Target does not start with the prefix.
    LacksPrefix(&'static str),
    Always,
}

impl Matcher {
    pub fn matches(&self, target: &str) -> bool {
        match self {
            Matcher::ContainsAny(needles) => needles.iter().any(|n| target.contains(n)),
            Matcher::LacksPrefix(prefix) => !target.starts_with(prefix),
            Matcher::Always => true,
        }
    }
}

/// Everything a rule decides about a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub level: ThreatLevel,
    pub score: u8,
    pub details: Details,
    pub recommendations: &'static [&'static str],
}

impl Default for Verdict {
    fn default() -> Self {
        Self {
            level: ThreatLevel::Safe,
            score: DEFAULT_SCORE,
            details: Details::Empty {},
            recommendations: &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub matcher: Matcher,
    pub verdict: Verdict,
}

const fn text(s: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(s)
}

pub static EMAIL_RULES: [Rule; 3] = [
    Rule {
        matcher: Matcher::ContainsAny(&["suspicious", "malware"]),
        verdict: Verdict {
            level: ThreatLevel::Malicious,
            score: 15,
            details: Details::Email(EmailDetails {
                domain_reputation: text("Poor"),
                breach_status: text("Found in data breaches"),
            }),
            recommendations: &["Do not interact with this email", "Report as spam/phishing"],
        },
    },
    Rule {
        matcher: Matcher::ContainsAny(&["test", "temp"]),
        verdict: Verdict {
            level: ThreatLevel::Suspicious,
            score: 45,
            details: Details::Email(EmailDetails {
                domain_reputation: text("Unknown"),
                breach_status: text("Not found in known breaches"),
            }),
            recommendations: &["Exercise caution when interacting", "Verify sender identity"],
        },
    },
    Rule {
        matcher: Matcher::Always,
        verdict: Verdict {
            level: ThreatLevel::Safe,
            score: DEFAULT_SCORE,
            details: Details::Email(EmailDetails {
                domain_reputation: text("Good"),
                breach_status: text("Not found in known breaches"),
            }),
            recommendations: &[
                "Continue monitoring for unusual activity",
                "Enable two-factor authentication if available",
            ],
        },
    },
];

pub static URL_RULES: [Rule; 3] = [
    Rule {
        matcher: Matcher::ContainsAny(&["malware", "phishing", "suspicious"]),
        verdict: Verdict {
            level: ThreatLevel::Malicious,
            score: 10,
            details: Details::Url(UrlDetails {
                malware_detected: true,
                phishing_risk: text("High"),
                ssl_status: text("Invalid/Missing"),
            }),
            recommendations: &[
                "Do not visit this website",
                "Block this URL in your security software",
            ],
        },
    },
    Rule {
        matcher: Matcher::LacksPrefix("https://"),
        verdict: Verdict {
            level: ThreatLevel::Suspicious,
            score: 55,
            details: Details::Url(UrlDetails {
                malware_detected: false,
                phishing_risk: text("Medium"),
                ssl_status: text("Not secure (HTTP)"),
            }),
            recommendations: &[
                "Avoid entering sensitive information",
                "Look for HTTPS version of the site",
            ],
        },
    },
    Rule {
        matcher: Matcher::Always,
        verdict: Verdict {
            level: ThreatLevel::Safe,
            score: DEFAULT_SCORE,
            details: Details::Url(UrlDetails {
                malware_detected: false,
                phishing_risk: text("Low"),
                ssl_status: text("Valid SSL certificate"),
            }),
            recommendations: &[
                "Website appears safe to visit",
                "Always verify URLs before clicking",
            ],
        },
    },
];

pub static PHONE_RULES: [Rule; 2] = [
    Rule {
        matcher: Matcher::ContainsAny(&["555"]),
        verdict: Verdict {
            level: ThreatLevel::Suspicious,
            score: 40,
            details: Details::Phone(PhoneDetails {
                carrier: text("Unknown"),
                region: text("North America"),
                spam_reports: text("Multiple reports"),
            }),
            recommendations: &[
                "Exercise caution when answering",
                "Do not share personal information",
            ],
        },
    },
    Rule {
        matcher: Matcher::Always,
        verdict: Verdict {
            level: ThreatLevel::Safe,
            score: DEFAULT_SCORE,
            details: Details::Phone(PhoneDetails {
                carrier: text("Verified carrier"),
                region: text("North America"),
                spam_reports: text("No reports found"),
            }),
            recommendations: &["Number appears legitimate", "Monitor for unusual activity"],
        },
    },
];

/// The rule table for a kind, highest priority first.
pub fn rules_for(kind: TargetKind) -> &'static [Rule] {
    match kind {
        TargetKind::Email => &EMAIL_RULES,
        TargetKind::Url => &URL_RULES,
        TargetKind::Phone => &PHONE_RULES,
    }
}
