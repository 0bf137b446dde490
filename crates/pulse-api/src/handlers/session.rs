//! Session recording handlers.

use axum::extract::{Query, State};
use chrono::NaiveDateTime;
use serde::Deserialize;

use pulse_core::AppError;
use pulse_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `/recordSession`.
#[derive(Debug, Deserialize)]
pub struct RecordSessionParams {
    /// User identifier.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// ISO-8601 local date-time of the login.
    #[serde(rename = "loginTime")]
    pub login_time: Option<String>,
    /// ISO-8601 local date-time of the logout.
    #[serde(rename = "logoutTime")]
    pub logout_time: Option<String>,
}

/// POST /recordSession
pub async fn record_session(
    State(state): State<AppState>,
    Query(params): Query<RecordSessionParams>,
) -> Result<String, ApiError> {
    let (Some(user_id), Some(login_time), Some(logout_time)) =
        (params.user_id, params.login_time, params.logout_time)
    else {
        return Err(AppError::missing_parameter("Missing parameters").into());
    };

    let login_time: NaiveDateTime = login_time.parse().map_err(AppError::from)?;
    let logout_time: NaiveDateTime = logout_time.parse().map_err(AppError::from)?;

    state
        .analytics
        .record_session(UserId::new(user_id), login_time, logout_time);
    Ok("Session recorded".to_string())
}
