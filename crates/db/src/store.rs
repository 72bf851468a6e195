//! The record store contract for toys.

use std::sync::Arc;

use async_trait::async_trait;
use brinquedos_core::types::DbId;

use crate::models::toy::{Toy, ToyFields};

/// Keyed storage of toy records.
///
/// Each call is atomic on its own; nothing spans calls. Implementations:
/// - [`crate::repositories::ToyRepo`] backed by Postgres
/// - [`crate::repositories::InMemoryToyRepo`] for tests and database-less runs
#[async_trait]
pub trait ToyStore: Send + Sync {
    /// All records, ordered by id.
    async fn find_all(&self) -> Result<Vec<Toy>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Toy>, sqlx::Error>;

    /// Persist `fields`.
    ///
    /// With `id = None` a new record is inserted and the store assigns its id.
    /// With `Some(id)` every column of that record is overwritten; a missing
    /// row yields `sqlx::Error::RowNotFound`.
    async fn save(&self, id: Option<DbId>, fields: &ToyFields) -> Result<Toy, sqlx::Error>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Verify the backing storage is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Shared handle used by the HTTP layer.
pub type DynToyStore = Arc<dyn ToyStore>;
