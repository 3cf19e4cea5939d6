//! Tracker configuration.

use serde::{Deserialize, Serialize};

/// Rule deciding which modules can be selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockPolicy {
    /// Authored lock flags, plus any module whose predecessor is completed
    #[default]
    Sequential,
    /// Authored lock flags only; completions never unlock anything
    Static,
}

impl std::str::FromStr for UnlockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(UnlockPolicy::Sequential),
            "static" => Ok(UnlockPolicy::Static),
            other => Err(format!("unknown unlock policy: {other}")),
        }
    }
}

impl std::fmt::Display for UnlockPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnlockPolicy::Sequential => f.write_str("sequential"),
            UnlockPolicy::Static => f.write_str("static"),
        }
    }
}

/// Tracker configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Unlock rule
    pub unlock_policy: UnlockPolicy,
}
