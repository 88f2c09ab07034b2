//! Service layer for recipes: the store contract and its backends.
//! - `recipe::store::RecipeStore` is the only seam handlers talk to.
//! - `InMemoryRecipeStore` keeps a process-local map.
//! - `SeaOrmRecipeStore` keeps rows in the `recipe` table via `models`.

pub mod recipe;
#[cfg(test)]
pub mod test_support;
