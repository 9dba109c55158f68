use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::request_id::{
    make_span_with_request_id, propagate_request_id_layer, set_request_id_layer,
};
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(propagate_request_id_layer())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/taxonomy", get(handlers::taxonomy))
        // Library
        .route(
            "/library",
            get(handlers::list_library).post(handlers::import_library),
        )
        .route("/library/:id", get(handlers::get_game))
        // Recommendations
        .route("/recommendations", post(handlers::recommend))
        .route("/cache/clear", post(handlers::clear_cache))
}
