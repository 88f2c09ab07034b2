//! Recipe module: domain value, store contract, and two store backends.

pub mod domain;
pub mod errors;
pub mod key;
pub mod memory;
pub mod repo;
pub mod store;

pub use domain::Recipe;
pub use errors::StoreError;
pub use key::{derive_key, KeyPolicy};
pub use memory::InMemoryRecipeStore;
pub use repo::seaorm::SeaOrmRecipeStore;
pub use store::{shared, RecipeStore, SharedStore};
