use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::{debug, warn};

use crate::recipe::domain::Recipe;
use crate::recipe::errors::StoreError;
use crate::recipe::store::RecipeStore;

/// Recipe store over the `recipe` table. Every operation is one SQL statement;
/// absence is detected from the result (no row, or zero rows affected).
///
/// The key is written to the `name` column, which is the primary key, so
/// `update` rewrites only `description`.
pub struct SeaOrmRecipeStore {
    db: DatabaseConnection,
}

impl SeaOrmRecipeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn backend_err(op: &'static str, key: &str, e: models::errors::ModelError) -> StoreError {
    warn!(op, %key, error = %e, "recipe store query failed");
    StoreError::from(e)
}

#[async_trait]
impl RecipeStore for SeaOrmRecipeStore {
    fn backend(&self) -> &'static str {
        "database"
    }

    async fn add(&mut self, key: &str, recipe: Recipe) -> Result<(), StoreError> {
        let inserted = models::recipe::insert_if_absent(&self.db, key, &recipe.description)
            .await
            .map_err(|e| backend_err("add", key, e))?;
        if !inserted {
            return Err(StoreError::AlreadyExists);
        }
        debug!(%key, "recipe row inserted");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Recipe, StoreError> {
        models::recipe::find(&self.db, key)
            .await
            .map_err(|e| backend_err("get", key, e))?
            .map(Recipe::from)
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> Result<HashMap<String, Recipe>, StoreError> {
        let rows = models::recipe::list(&self.db)
            .await
            .map_err(|e| backend_err("list", "*", e))?;
        Ok(rows.into_iter().map(|m| (m.name.clone(), Recipe::from(m))).collect())
    }

    async fn update(&mut self, key: &str, recipe: Recipe) -> Result<(), StoreError> {
        let affected = models::recipe::update_description(&self.db, key, &recipe.description)
            .await
            .map_err(|e| backend_err("update", key, e))?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        debug!(%key, "recipe row updated");
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let affected = models::recipe::delete(&self.db, key)
            .await
            .map_err(|e| backend_err("remove", key, e))?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        debug!(%key, "recipe row deleted");
        Ok(())
    }
}
