use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;

use crate::calendar::time::{is_valid_offset, MAX_OFFSET_MINUTES};
use crate::calendar::MonthGrid;
use crate::handlers::AppState;
use crate::models::calendar::{CalendarQuery, MonthGridResponse};
use crate::utils::error::AppError;

pub async fn month_grid(
    State(state): State<AppState>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<Json<MonthGridResponse>, AppError> {
    let Query(query) = query?;
    if !is_valid_offset(query.offset) {
        return Err(AppError::InvalidInput(format!(
            "Offset must be within ±{} minutes",
            MAX_OFFSET_MINUTES
        )));
    }
    let reference = NaiveDate::from_ymd_opt(query.year, query.month, 1).ok_or_else(|| {
        AppError::InvalidInput(format!("Invalid month {}-{}", query.year, query.month))
    })?;

    let events = state.events.list_events().await?;
    let grid = MonthGrid::build(reference, &events, query.offset);

    Ok(Json(MonthGridResponse::from_grid(reference, &grid)))
}
