use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::handlers::AppState;
use crate::models::event::{
    CreateEventRequest, CreateEventResponse, EventId, GetEventsResponse, UpdateEventRequest,
};
use crate::utils::error::AppError;

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<GetEventsResponse>, AppError> {
    let events = state.events.list_events().await?;
    Ok(Json(GetEventsResponse { events }))
}

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<CreateEventResponse>, AppError> {
    let Json(request) = payload?;
    let id = state.events.create_event(request).await?;
    Ok(Json(CreateEventResponse { id }))
}

/// The path id is authoritative; a body id, when present, must agree with it.
pub async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<EventId>, PathRejection>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;
    state.events.update_event(id, request).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<EventId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.events.delete_event(id).await?;
    Ok(StatusCode::OK)
}
