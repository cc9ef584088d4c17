// Target handling — what a user can submit for analysis, and the
// validate-then-normalize pipeline every submission goes through.

pub mod normalize;
pub mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use normalize::normalize;
pub use validate::validate;

/// The three kinds of target the analyzer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Phone,
    Email,
    Url,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [TargetKind::Phone, TargetKind::Email, TargetKind::Url];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Phone => "phone",
            TargetKind::Email => "email",
            TargetKind::Url => "url",
        }
    }

    /// Capitalized name, used at the start of user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Phone => "Phone",
            TargetKind::Email => "Email",
            TargetKind::Url => "Url",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a submission was rejected before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("{} is required", .kind.label())]
    Missing { kind: TargetKind },

    #[error("Please enter a valid {kind}")]
    Invalid { kind: TargetKind },
}

/// Run a raw submission through the full input pipeline.
///
/// The value is taken exactly as submitted. An empty value is `Missing`, a
/// value that fails `validate` (whitespace-only input included) is `Invalid`,
/// and anything else comes back in its normalized form, ready for `classify`.
pub fn prepare(kind: TargetKind, raw: &str) -> Result<String, TargetError> {
    if raw.is_empty() {
        return Err(TargetError::Missing { kind });
    }
    if !validate(kind, raw) {
        return Err(TargetError::Invalid { kind });
    }
    Ok(normalize(kind, raw))
}
