//! SeaORM entities and connection bootstrap for the recipe service.

pub mod errors;
pub mod db;
pub mod recipe;

#[cfg(test)]
mod tests;
