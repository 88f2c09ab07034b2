//! Shared helpers for the recipe service crates: logging bootstrap, runtime
//! environment checks, key derivation and small response types.

pub mod types;
pub mod utils;
pub mod env;

pub use utils::slug::slugify;
