use std::sync::Arc;

use brinquedos_core::links::LinkBuilder;
use brinquedos_db::store::DynToyStore;

use crate::config::ServerConfig;
use crate::handlers::toy::COLLECTION_PATH;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store for toys (Postgres or in-memory).
    pub store: DynToyStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Link resolver for the `/brinquedos` collection.
    pub links: Arc<LinkBuilder>,
}

impl AppState {
    pub fn new(store: DynToyStore, config: Arc<ServerConfig>) -> Self {
        let links = Arc::new(LinkBuilder::new(&config.public_base_url, COLLECTION_PATH));
        Self {
            store,
            config,
            links,
        }
    }
}
