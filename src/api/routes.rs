//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_item_handler, create_cache_handler, delete_item_handler, destroy_cache_handler,
    get_items_handler, health_handler, list_caches_handler, set_item_handler,
    update_item_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /caches` - Create a named cache
/// - `GET /caches` - List caches with their item counts
/// - `DELETE /caches/:name` - Destroy a cache
/// - `POST /caches/:name/items` - Add an item (no overwrite)
/// - `PUT /caches/:name/items` - Set an item
/// - `PATCH /caches/:name/items` - Update an existing item
/// - `GET /caches/:name/items?keys=a,b` - Get live values
/// - `DELETE /caches/:name/items/:key` - Delete an item
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/caches", post(create_cache_handler).get(list_caches_handler))
        .route("/caches/:name", delete(destroy_cache_handler))
        .route(
            "/caches/:name/items",
            post(add_item_handler)
                .put(set_item_handler)
                .patch(update_item_handler)
                .get(get_items_handler),
        )
        .route("/caches/:name/items/:key", delete(delete_item_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
