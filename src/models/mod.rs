//! Request and Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateCacheRequest, GetItemsQuery, ItemRequest};
pub use responses::{
    CreateCacheResponse, DestroyCacheResponse, GetItemsResponse, HealthResponse, ItemResponse,
    ListCachesResponse,
};
