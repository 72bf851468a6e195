//! Repository layer.
//!
//! Concrete [`crate::store::ToyStore`] implementations.

pub mod memory_toy_repo;
pub mod toy_repo;

pub use memory_toy_repo::InMemoryToyRepo;
pub use toy_repo::ToyRepo;
