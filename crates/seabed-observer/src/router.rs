//! Axum router construction for the Seabed API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin front-end access.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the API server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/world` -- land and water tiles
/// - `GET /api/layers` -- loaded layers with day counts
/// - `GET /api/drill/{day}` -- drill scenario replayed through a day
/// - `GET /api/{resource}/{day}` -- one daily snapshot, or `average`
///
/// The static `drill` segment takes priority over the `{resource}`
/// capture, so no layer can shadow the drill endpoint.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/world", get(handlers::get_world))
        .route("/api/layers", get(handlers::list_layers))
        .route("/api/drill/{day}", get(handlers::get_drill))
        .route("/api/{resource}/{day}", get(handlers::get_layer))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
