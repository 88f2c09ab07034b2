use thiserror::Error;

/// Failures of the recipe store contract. `NotFound` and `AlreadyExists` are
/// decided by the store; every other failure is carried as `Backend`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("already exists")]
    AlreadyExists,
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            StoreError::NotFound => 2001,
            StoreError::AlreadyExists => 2002,
            StoreError::Backend(_) => 2200,
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound => "not_found",
            StoreError::AlreadyExists => "already_exists",
            StoreError::Backend(_) => "backend",
        }
    }
}

impl From<models::errors::ModelError> for StoreError {
    fn from(e: models::errors::ModelError) -> Self {
        StoreError::Backend(e.to_string())
    }
}
