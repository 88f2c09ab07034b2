//! Environment/runtime helpers

use tracing::{info, warn};

/// Load `.env` if present; a missing file is not an error.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        info!(path = %path.display(), "loaded .env");
    }
}

/// Read an env var, treating blank values as unset.
pub fn var_non_empty(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        Ok(_) => {
            warn!(%name, "environment variable is set but blank; ignoring");
            None
        }
        Err(_) => None,
    }
}
