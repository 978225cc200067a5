use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::services::EventService;
use crate::utils::response::success;

pub mod calendar;
pub mod events;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventService>,
}

impl AppState {
    pub fn new(events: EventService) -> Self {
        Self {
            events: Arc::new(events),
        }
    }
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "calendar-api",
    };

    success(payload, "Health check successful").into_response()
}
