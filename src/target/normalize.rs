// Canonical display forms for validated targets.

use super::validate::phone_digits;
use super::TargetKind;

/// Rewrite a target into the form that gets analyzed and displayed.
///
/// Callers should only pass values that already passed `validate`.
pub fn normalize(kind: TargetKind, raw: &str) -> String {
    match kind {
        TargetKind::Phone => normalize_phone(raw),
        TargetKind::Email => raw.to_lowercase(),
        TargetKind::Url => normalize_url(raw),
    }
}

/// North American numbers written as 11 digits with a leading country code
/// become `+1 (AAA) BBB-CCCC`. Everything else is returned exactly as typed.
fn normalize_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    if digits.len() == 11 && digits.starts_with('1') {
        return format!(
            "+1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        );
    }
    raw.to_string()
}

fn normalize_url(raw: &str) -> String {
    if has_prefix_ignore_case(raw, "http://") || has_prefix_ignore_case(raw, "https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
