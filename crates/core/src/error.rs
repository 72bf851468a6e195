use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    /// Shorthand for the toy resource's not-found outcome.
    pub fn toy_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: "Brinquedo",
            id,
        }
    }
}
