//! Derived user-status handlers.

use axum::extract::{Query, State};
use serde::Deserialize;

use pulse_core::AppError;
use pulse_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the status and last-session routes.
#[derive(Debug, Deserialize)]
pub struct UserParams {
    /// User identifier.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// GET /userStatus
pub async fn user_status(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<String, ApiError> {
    let Some(user_id) = params.user_id else {
        return Err(AppError::missing_parameter("Missing userId").into());
    };

    let status = state.status.user_status(&UserId::new(user_id))?;
    Ok(format!("User status: {status}"))
}

/// GET /lastSessionDate
pub async fn last_session_date(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
) -> Result<String, ApiError> {
    let Some(user_id) = params.user_id else {
        return Err(AppError::missing_parameter("Missing userId").into());
    };

    let date = state.analytics.last_session_date(&UserId::new(user_id))?;
    Ok(format!("Last session: {date}"))
}
