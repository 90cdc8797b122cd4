//! Duplicate registration policy

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a second registration under an already bound key does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateKey` and keep the first registration
    #[default]
    Reject,
    /// Overwrite the earlier registration; the last one wins
    Replace,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Replace => write!(f, "replace"),
        }
    }
}
