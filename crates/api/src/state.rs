use std::sync::Arc;

use filmgrain_core::visibility::VisibilityToggle;
use filmgrain_imagehost::ImageHostClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: filmgrain_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Client for the external image-hosting endpoint.
    pub image_host: Arc<ImageHostClient>,
    /// Persisted, observable explicit-content toggle. Listing handlers fall
    /// back to it when a request does not carry `include_explicit`.
    pub visibility: Arc<VisibilityToggle>,
}
