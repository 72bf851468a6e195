//! Repository for the `brinquedos` table.

use async_trait::async_trait;
use brinquedos_core::types::DbId;
use sqlx::PgPool;

use crate::models::toy::{Toy, ToyFields};
use crate::schema::TOY_SCHEMA;
use crate::store::ToyStore;

/// Postgres-backed toy store. Statements are derived from [`TOY_SCHEMA`].
#[derive(Clone)]
pub struct ToyRepo {
    pool: PgPool,
}

impl ToyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, fields: &ToyFields) -> Result<Toy, sqlx::Error> {
        let query = TOY_SCHEMA.insert_sql();
        sqlx::query_as::<_, Toy>(&query)
            .bind(&fields.name)
            .bind(&fields.toy_type)
            .bind(&fields.classification)
            .bind(&fields.size)
            .bind(fields.price)
            .fetch_one(&self.pool)
            .await
    }

    async fn overwrite(&self, id: DbId, fields: &ToyFields) -> Result<Toy, sqlx::Error> {
        let query = TOY_SCHEMA.update_sql();
        sqlx::query_as::<_, Toy>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.toy_type)
            .bind(&fields.classification)
            .bind(&fields.size)
            .bind(fields.price)
            .fetch_one(&self.pool)
            .await
    }
}

#[async_trait]
impl ToyStore for ToyRepo {
    async fn find_all(&self) -> Result<Vec<Toy>, sqlx::Error> {
        let query = TOY_SCHEMA.select_all_sql();
        sqlx::query_as::<_, Toy>(&query).fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Toy>, sqlx::Error> {
        let query = TOY_SCHEMA.select_by_id_sql();
        sqlx::query_as::<_, Toy>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, id: Option<DbId>, fields: &ToyFields) -> Result<Toy, sqlx::Error> {
        match id {
            None => self.insert(fields).await,
            Some(id) => self.overwrite(id, fields).await,
        }
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let query = TOY_SCHEMA.exists_sql();
        sqlx::query_scalar::<_, bool>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let query = TOY_SCHEMA.delete_sql();
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
