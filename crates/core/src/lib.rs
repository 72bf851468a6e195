//! Domain building blocks shared by the store and the HTTP layer.

pub mod error;
pub mod links;
pub mod types;
