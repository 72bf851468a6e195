//! Toy (brinquedo) entity model and DTO.

use brinquedos_core::links::Identified;
use brinquedos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `brinquedos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Toy {
    pub id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fields: ToyFields,
}

impl Identified for Toy {
    fn id(&self) -> DbId {
        self.id
    }
}

/// The client-writable attributes of a toy.
///
/// Used as-is for create, replace and partial-update bodies. There is no `id`
/// field, so an `id` sent by a client is silently dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ToyFields {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub toy_type: Option<String>,
    pub classification: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
}

impl ToyFields {
    /// Overwrite each field for which `patch` carries a value. Fields that are
    /// `None` in `patch` keep their current value.
    pub fn merge(&mut self, patch: ToyFields) {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.toy_type.is_some() {
            self.toy_type = patch.toy_type;
        }
        if patch.classification.is_some() {
            self.classification = patch.classification;
        }
        if patch.size.is_some() {
            self.size = patch.size;
        }
        if patch.price.is_some() {
            self.price = patch.price;
        }
    }
}
