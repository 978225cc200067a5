use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, security_header_layers, Config};
use crate::handlers::calendar::month_grid;
use crate::handlers::events::{create_event, delete_event, list_events, update_event};
use crate::handlers::{health_check, AppState};

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/:id", put(update_event).delete(delete_event))
        .route("/api/calendar", get(month_grid))
        .with_state(state);

    for layer in security_header_layers(config.production) {
        router = router.layer(layer);
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
}
