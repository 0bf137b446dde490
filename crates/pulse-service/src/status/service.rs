//! User status classification built on the analytics engine.

use std::sync::Arc;

use pulse_core::AppError;
use pulse_core::types::UserId;
use pulse_entity::activity::ActivityStatus;

use crate::analytics::AnalyticsService;

/// Maps a user's total activity time to a coarse status label.
#[derive(Debug, Clone)]
pub struct StatusService {
    /// Analytics engine supplying the total-activity figure.
    analytics: Arc<AnalyticsService>,
}

impl StatusService {
    /// Creates a new status service.
    pub fn new(analytics: Arc<AnalyticsService>) -> Self {
        Self { analytics }
    }

    /// Classify the user by total activity minutes.
    ///
    /// A `NotFound` from the total-activity computation propagates
    /// untouched; the classifier itself cannot fail.
    pub fn user_status(&self, id: &UserId) -> Result<ActivityStatus, AppError> {
        let total = self.analytics.total_activity_minutes(id)?;
        Ok(ActivityStatus::from_total_minutes(total))
    }
}
