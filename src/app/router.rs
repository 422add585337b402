use super::AppState;
use crate::handler::events::events_handler;
use crate::handler::health::{HEALTH_PATH, health_handler};
use axum::Router;
use axum::routing::{get, post};

/// Build the main HTTP router (health + event ingress).
pub fn main_router(state: AppState) -> Router {
    let v1_health_router = Router::new().route(HEALTH_PATH, get(health_handler));

    let v1_events_router = Router::new()
        .route("/v1/events", post(events_handler))
        .with_state(state.dispatcher);

    Router::new()
        .merge(v1_health_router)
        .merge(v1_events_router)
}
