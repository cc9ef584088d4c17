// Syntactic validation of submitted targets.
//
// These checks reject obvious garbage without pretending to be full RFC
// validators.

use std::sync::LazyLock;

use regex_lite::Regex;
use url::Url;

use super::TargetKind;

/// Optional leading `+`, a nonzero digit, then up to 15 more digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Decide whether `raw` is an acceptable target of the given kind.
///
/// Total over all inputs: malformed values are `false`, never an error.
pub fn validate(kind: TargetKind, raw: &str) -> bool {
    match kind {
        TargetKind::Phone => PHONE_PATTERN.is_match(&phone_digits(raw)),
        TargetKind::Email => EMAIL_PATTERN.is_match(raw),
        TargetKind::Url => Url::parse(raw).is_ok(),
    }
}

/// Keep only ASCII digits and `+` signs.
pub(crate) fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
