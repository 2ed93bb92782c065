use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{
        DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
    },
};
use tracing::Level;

use common::types::Health;
use service::people::PeopleStore;

pub mod people;

/// Shared state handed to every handler: the record store behind its trait.
#[derive(Clone)]
pub struct ServerState {
    pub people: Arc<dyn PeopleStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    // Public routes (health)
    let public = Router::new().route("/health", get(health));

    // Record CRUD; every verb on /people lands on the same dispatch table,
    // anything outside it falls through to the 405 handler.
    let api = Router::new().route(
        "/people",
        post(people::create_person)
            .get(people::read_person)
            .delete(people::delete_person)
            .patch(people::update_person)
            .fallback(people::method_not_allowed),
    );

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
