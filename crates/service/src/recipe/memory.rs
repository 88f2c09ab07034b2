use std::collections::{hash_map::Entry, HashMap};

use async_trait::async_trait;
use tracing::debug;

use super::domain::Recipe;
use super::errors::StoreError;
use super::store::RecipeStore;

/// Process-local recipe store. Entries live as long as the value does.
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    recipes: HashMap<String, Recipe>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn add(&mut self, key: &str, recipe: Recipe) -> Result<(), StoreError> {
        match self.recipes.entry(key.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                debug!(%key, "recipe added");
                slot.insert(recipe);
                Ok(())
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Recipe, StoreError> {
        self.recipes.get(key).cloned().ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> Result<HashMap<String, Recipe>, StoreError> {
        Ok(self.recipes.clone())
    }

    async fn update(&mut self, key: &str, recipe: Recipe) -> Result<(), StoreError> {
        let slot = self.recipes.get_mut(key).ok_or(StoreError::NotFound)?;
        *slot = recipe;
        debug!(%key, "recipe replaced");
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.recipes.remove(key).ok_or(StoreError::NotFound)?;
        debug!(%key, "recipe removed");
        Ok(())
    }
}
