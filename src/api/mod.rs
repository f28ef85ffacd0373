//! API Module
//!
//! HTTP handlers and routing for the cache registry REST API.
//!
//! # Endpoints
//! - `POST /caches`, `GET /caches`, `DELETE /caches/:name` - Registry
//! - `POST|PUT|PATCH|GET /caches/:name/items` - Add, set, update, get items
//! - `DELETE /caches/:name/items/:key` - Delete an item
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
