//! Session entity model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::activity::YearMonth;

/// One recorded login/logout interval for a user.
///
/// Sessions are immutable once recorded and are kept per user in
/// insertion order. No temporal ordering is enforced between the two
/// timestamps: a logout earlier than the login is stored as given and
/// contributes a negative duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// When the user logged in (local wall-clock time).
    pub login_time: NaiveDateTime,
    /// When the user logged out (local wall-clock time).
    pub logout_time: NaiveDateTime,
}

impl Session {
    /// Create a new session interval.
    pub fn new(login_time: NaiveDateTime, logout_time: NaiveDateTime) -> Self {
        Self {
            login_time,
            logout_time,
        }
    }

    /// Session length in whole minutes, as a raw difference.
    ///
    /// Negative when the logout precedes the login; fixed-duration
    /// arithmetic with truncation, no calendar rounding.
    pub fn duration_minutes(&self) -> i64 {
        (self.logout_time - self.login_time).num_minutes()
    }

    /// Calendar date of the logout timestamp.
    pub fn logout_date(&self) -> NaiveDate {
        self.logout_time.date()
    }

    /// Whether the *login* timestamp falls within the given calendar month.
    ///
    /// Monthly aggregation considers login-month membership only; the
    /// logout month is irrelevant.
    pub fn login_in_month(&self, month: &YearMonth) -> bool {
        month.contains(&self.login_time)
    }
}
