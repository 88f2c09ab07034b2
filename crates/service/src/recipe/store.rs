use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::domain::Recipe;
use super::errors::StoreError;

/// Store abstraction for recipes, keyed by derived key.
///
/// Reads borrow `&self`; writes borrow `&mut self`. Implementations carry no
/// lock of their own, so whoever owns a store decides how concurrent callers
/// are serialized (see [`SharedStore`]).
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Backend label for logs and metrics.
    fn backend(&self) -> &'static str;

    /// Insert a new entry; `AlreadyExists` if the key is taken.
    async fn add(&mut self, key: &str, recipe: Recipe) -> Result<(), StoreError>;
    async fn get(&self, key: &str) -> Result<Recipe, StoreError>;
    /// Snapshot of all entries. Iteration order is unspecified.
    async fn list(&self) -> Result<HashMap<String, Recipe>, StoreError>;
    /// Replace the whole entry; never creates one.
    async fn update(&mut self, key: &str, recipe: Recipe) -> Result<(), StoreError>;
    async fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// A store as the HTTP layer holds it: readers share, writers are serialized.
pub type SharedStore = Arc<RwLock<Box<dyn RecipeStore>>>;

pub fn shared<S: RecipeStore + 'static>(store: S) -> SharedStore {
    Arc::new(RwLock::new(Box::new(store)))
}
