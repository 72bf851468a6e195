//! In-memory toy store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use brinquedos_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::toy::{Toy, ToyFields};
use crate::store::ToyStore;

#[derive(Debug)]
struct Table {
    /// Next id to hand out. Ids are never reused, like a BIGSERIAL sequence.
    next_id: DbId,
    rows: BTreeMap<DbId, ToyFields>,
}

/// Toy store kept in process memory, with the same observable behaviour as
/// [`crate::repositories::ToyRepo`]: ascending-id listing, generated ids
/// starting at 1, and `RowNotFound` when overwriting a missing row.
#[derive(Debug)]
pub struct InMemoryToyRepo {
    table: RwLock<Table>,
}

impl Default for InMemoryToyRepo {
    fn default() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryToyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ToyStore for InMemoryToyRepo {
    async fn find_all(&self) -> Result<Vec<Toy>, sqlx::Error> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .map(|(&id, fields)| Toy {
                id,
                fields: fields.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Toy>, sqlx::Error> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).map(|fields| Toy {
            id,
            fields: fields.clone(),
        }))
    }

    async fn save(&self, id: Option<DbId>, fields: &ToyFields) -> Result<Toy, sqlx::Error> {
        let mut table = self.table.write().await;
        let id = match id {
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(sqlx::Error::RowNotFound),
        };
        table.rows.insert(id, fields.clone());
        Ok(Toy {
            id,
            fields: fields.clone(),
        })
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
