//! API Handlers
//!
//! HTTP request handlers for registry and item endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::{CacheRegistry, Ttl};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    CreateCacheRequest, CreateCacheResponse, DestroyCacheResponse, GetItemsQuery,
    GetItemsResponse, HealthResponse, ItemRequest, ItemResponse, ListCachesResponse,
};

/// Application state shared across all handlers.
///
/// Values are stored as opaque JSON values.
#[derive(Clone)]
pub struct AppState {
    /// Named caches
    pub registry: Arc<CacheRegistry<Value>>,
    /// Defaults for caches created without explicit settings
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with an empty registry.
    pub fn new(config: Config) -> Self {
        Self {
            registry: Arc::new(CacheRegistry::new()),
            config: Arc::new(config),
        }
    }
}

/// Handler for POST /caches
///
/// Creates a named cache. An existing cache with the same name is kept and
/// reported with `created: false`.
pub async fn create_cache_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCacheRequest>,
) -> Result<Json<CreateCacheResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let config = state.config.cache_config(req.default_ttl, req.sweep_interval);
    let created = state.registry.create(&req.name, config).await;

    Ok(Json(CreateCacheResponse::new(req.name, created)))
}

/// Handler for GET /caches
pub async fn list_caches_handler(State(state): State<AppState>) -> Json<ListCachesResponse> {
    Json(ListCachesResponse {
        caches: state.registry.list().await,
    })
}

/// Handler for DELETE /caches/:name
pub async fn destroy_cache_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DestroyCacheResponse>> {
    if state.registry.destroy(&name).await {
        Ok(Json(DestroyCacheResponse::new(name)))
    } else {
        Err(CacheError::CacheNotFound(name))
    }
}

/// Handler for POST /caches/:name/items
///
/// Adds a new item; fails if the key is already stored.
pub async fn add_item_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<ItemResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let cache = state.registry.require(&name).await?;
    let ttl = req.ttl_or(Ttl::UseDefault);
    cache.add(req.key.clone(), req.value, ttl).await?;

    Ok(Json(ItemResponse::new(req.key, "added")))
}

/// Handler for PUT /caches/:name/items
///
/// Stores an item, replacing any previous value.
pub async fn set_item_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<ItemResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let cache = state.registry.require(&name).await?;
    let ttl = req.ttl_or(Ttl::UseDefault);
    cache.set(req.key.clone(), req.value, ttl).await;

    Ok(Json(ItemResponse::new(req.key, "set")))
}

/// Handler for PATCH /caches/:name/items
///
/// Replaces the value of an existing item. Without a `ttl` the current
/// expiry is kept.
pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<ItemResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let cache = state.registry.require(&name).await?;
    let ttl = req.ttl_or(Ttl::KeepExisting);
    cache.update(&req.key, req.value, ttl).await?;

    Ok(Json(ItemResponse::new(req.key, "updated")))
}

/// Handler for GET /caches/:name/items?keys=a,b
pub async fn get_items_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<GetItemsQuery>,
) -> Result<Json<GetItemsResponse>> {
    let cache = state.registry.require(&name).await?;
    let values = cache.get(&query.keys()).await;

    Ok(Json(GetItemsResponse::new(values)))
}

/// Handler for DELETE /caches/:name/items/:key
///
/// Deleting an absent key succeeds.
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<ItemResponse>> {
    let cache = state.registry.require(&name).await?;
    cache.delete(&key).await;

    Ok(Json(ItemResponse::new(key, "deleted")))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
