//! User registration handlers.

use axum::extract::{Query, State};
use serde::Deserialize;

use pulse_core::AppError;
use pulse_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    /// User identifier; the empty string is a present, valid value.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// Display name.
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Query(params): Query<RegisterParams>,
) -> Result<String, ApiError> {
    let (Some(user_id), Some(user_name)) = (params.user_id, params.user_name) else {
        return Err(AppError::missing_parameter("Missing parameters").into());
    };

    let registered = state.analytics.register_user(UserId::new(user_id), user_name);
    Ok(format!("User registered: {registered}"))
}
