//! Activity analytics handlers.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use pulse_core::AppError;
use pulse_core::types::UserId;
use pulse_entity::activity::YearMonth;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for `/totalActivity`.
#[derive(Debug, Deserialize)]
pub struct TotalActivityParams {
    /// User identifier.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// GET /totalActivity
pub async fn total_activity(
    State(state): State<AppState>,
    Query(params): Query<TotalActivityParams>,
) -> Result<String, ApiError> {
    let Some(user_id) = params.user_id else {
        return Err(AppError::missing_parameter("Missing userId").into());
    };

    let minutes = state
        .analytics
        .total_activity_minutes(&UserId::new(user_id))?;
    Ok(format!("Total activity: {minutes} minutes"))
}

/// Query parameters for `/inactiveUsers`.
#[derive(Debug, Deserialize)]
pub struct InactiveUsersParams {
    /// Inactivity threshold in days; negative values are accepted and
    /// move the cutoff into the future.
    pub days: Option<String>,
}

/// GET /inactiveUsers
pub async fn inactive_users(
    State(state): State<AppState>,
    Query(params): Query<InactiveUsersParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Some(days) = params.days else {
        return Err(AppError::missing_parameter("Missing days parameter").into());
    };

    let days: i64 = days
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid number format for days"))?;

    let inactive = state
        .analytics
        .inactive_users(days)
        .into_iter()
        .map(UserId::into_string)
        .collect();
    Ok(Json(inactive))
}

/// Query parameters for `/monthlyActivity`.
#[derive(Debug, Deserialize)]
pub struct MonthlyActivityParams {
    /// User identifier.
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    /// Target calendar month in `YYYY-MM` format.
    pub month: Option<String>,
}

/// GET /monthlyActivity
pub async fn monthly_activity(
    State(state): State<AppState>,
    Query(params): Query<MonthlyActivityParams>,
) -> Result<Json<BTreeMap<String, i64>>, ApiError> {
    let (Some(user_id), Some(month)) = (params.user_id, params.month) else {
        return Err(AppError::missing_parameter("Missing parameters").into());
    };

    let month: YearMonth = month.parse().map_err(ApiError::from)?;
    let minutes = state
        .analytics
        .monthly_activity_minutes(&UserId::new(user_id), &month)?;

    let mut aggregated = BTreeMap::new();
    aggregated.insert(month.to_string(), minutes);
    Ok(Json(aggregated))
}
