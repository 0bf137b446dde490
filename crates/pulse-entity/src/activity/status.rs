//! Coarse activity-status classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minutes at or above which a user counts as active.
pub const ACTIVE_THRESHOLD_MINUTES: i64 = 100;
/// Minutes at or above which a user counts as highly active.
pub const HIGHLY_ACTIVE_THRESHOLD_MINUTES: i64 = 150;

/// Coarse classification of a user derived from total activity minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Fewer than 100 total minutes (includes zero and negative totals).
    Inactive,
    /// At least 100 but fewer than 150 total minutes.
    Active,
    /// 150 total minutes or more.
    HighlyActive,
}

impl ActivityStatus {
    /// Classify a total-activity figure against the fixed thresholds.
    pub fn from_total_minutes(total_minutes: i64) -> Self {
        if total_minutes >= HIGHLY_ACTIVE_THRESHOLD_MINUTES {
            Self::HighlyActive
        } else if total_minutes >= ACTIVE_THRESHOLD_MINUTES {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "Inactive"),
            Self::Active => write!(f, "Active"),
            Self::HighlyActive => write!(f, "Highly active"),
        }
    }
}
