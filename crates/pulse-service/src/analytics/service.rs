//! Activity analytics over the in-memory stores.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

use pulse_core::AppError;
use pulse_core::types::UserId;
use pulse_entity::activity::YearMonth;
use pulse_entity::session::Session;
use pulse_store::{SessionStore, UserRegistry};

/// Derives activity statistics from the registry and session store.
///
/// Owns no mutable state of its own; every query is a pure function of
/// the stored data plus call-time arguments.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    /// User registry.
    registry: Arc<UserRegistry>,
    /// Session store.
    sessions: Arc<SessionStore>,
}

impl AnalyticsService {
    /// Creates a new analytics service over the shared stores.
    pub fn new(registry: Arc<UserRegistry>, sessions: Arc<SessionStore>) -> Self {
        Self { registry, sessions }
    }

    /// Registers a user, overwriting any previous name for the id.
    pub fn register_user(&self, id: UserId, name: impl Into<String>) -> bool {
        self.registry.register(id, name)
    }

    /// Records a login/logout interval for the user.
    ///
    /// The interval is stored as given; a logout earlier than the login
    /// is not rejected and later contributes a negative duration term.
    pub fn record_session(&self, id: UserId, login_time: NaiveDateTime, logout_time: NaiveDateTime) {
        self.sessions.record(id, Session::new(login_time, logout_time));
    }

    /// Total activity in whole minutes across all of the user's sessions.
    ///
    /// Fails with `NotFound` when the user has zero sessions; an
    /// unregistered user and a registered-but-session-less one are
    /// indistinguishable here.
    pub fn total_activity_minutes(&self, id: &UserId) -> Result<i64, AppError> {
        let sessions = self.sessions.sessions_for(id);
        if sessions.is_empty() {
            return Err(AppError::not_found("No sessions found for user"));
        }
        Ok(sessions.iter().map(Session::duration_minutes).sum())
    }

    /// Activity in whole minutes restricted to sessions whose *login*
    /// falls in the given calendar month.
    ///
    /// Returns 0 when the user has sessions but none that month; fails
    /// with `NotFound` when the user has no sessions at all.
    pub fn monthly_activity_minutes(&self, id: &UserId, month: &YearMonth) -> Result<i64, AppError> {
        let sessions = self.sessions.sessions_for(id);
        if sessions.is_empty() {
            return Err(AppError::not_found("No sessions found for user"));
        }
        Ok(sessions
            .iter()
            .filter(|session| session.login_in_month(month))
            .map(Session::duration_minutes)
            .sum())
    }

    /// Calendar date of the session with the maximum logout timestamp,
    /// regardless of insertion order.
    ///
    /// Fails with `NoSessions` when the user has no sessions.
    pub fn last_session_date(&self, id: &UserId) -> Result<NaiveDate, AppError> {
        self.sessions
            .sessions_for(id)
            .iter()
            .map(|session| session.logout_time)
            .max()
            .map(|logout| logout.date())
            .ok_or_else(|| AppError::no_sessions("no sessions recorded for user"))
    }

    /// Registered users whose last logout date is strictly earlier than
    /// `today - threshold_days`.
    ///
    /// A negative threshold moves the cutoff into the future and so
    /// includes every user with sessions. Users with zero sessions never
    /// qualify. The result is sorted for deterministic output.
    ///
    /// Thresholds that push the cutoff past `NaiveDate`'s representable
    /// range saturate: a cutoff before all time matches nobody, one
    /// after all time matches everyone with sessions.
    pub fn inactive_users(&self, threshold_days: i64) -> Vec<UserId> {
        let cutoff = Duration::try_days(threshold_days)
            .and_then(|delta| Local::now().date_naive().checked_sub_signed(delta))
            .unwrap_or(if threshold_days > 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });
        let mut inactive: Vec<UserId> = self
            .registry
            .user_ids()
            .into_iter()
            .filter(|id| {
                self.last_session_date(id)
                    .map(|date| date < cutoff)
                    .unwrap_or(false)
            })
            .collect();
        inactive.sort();
        debug!(threshold_days, count = inactive.len(), "inactive users computed");
        inactive
    }
}
