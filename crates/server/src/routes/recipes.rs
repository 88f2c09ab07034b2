use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use common::types::StatusMessage;
use service::recipe::{derive_key, Recipe};
use tracing::info;

use crate::{errors::ApiError, observability, state::AppState};

/// Presence is the only check on a submitted body.
fn check_recipe(recipe: &Recipe) -> Result<(), ApiError> {
    if recipe.name.trim().is_empty() {
        return Err(ApiError::bad_request("name is required"));
    }
    Ok(())
}

#[utoipa::path(
    get, path = "/recipes", tag = "recipes",
    responses(
        (status = 200, description = "All recipes keyed by id"),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<HashMap<String, Recipe>>, ApiError> {
    let store = state.store.read().await;
    let result = store.list().await;
    observability::record("list", store.backend(), &result);
    Ok(Json(result?))
}

#[utoipa::path(
    post, path = "/recipes", tag = "recipes",
    request_body = crate::openapi::RecipeDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::StatusBody),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorBody),
        (status = 409, description = "Key already taken", body = crate::openapi::ErrorBody),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<StatusMessage>, ApiError> {
    let Json(recipe) = payload?;
    check_recipe(&recipe)?;
    let key = derive_key(state.key_policy, &recipe.name);
    if key.is_empty() {
        return Err(ApiError::bad_request("name must contain at least one letter or digit"));
    }

    let mut store = state.store.write().await;
    let result = store.add(&key, recipe).await;
    observability::record("add", store.backend(), &result);
    result?;
    info!(%key, "recipe created");
    Ok(Json(StatusMessage::success()))
}

#[utoipa::path(
    get, path = "/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe key")),
    responses(
        (status = 200, description = "Recipe", body = crate::openapi::RecipeDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Recipe>, ApiError> {
    let store = state.store.read().await;
    let result = store.get(&id).await;
    observability::record("get", store.backend(), &result);
    Ok(Json(result?))
}

#[utoipa::path(
    put, path = "/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe key")),
    request_body = crate::openapi::RecipeDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::StatusBody),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorBody),
        (status = 404, description = "Not found", body = crate::openapi::ErrorBody),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<StatusMessage>, ApiError> {
    let Json(recipe) = payload?;
    check_recipe(&recipe)?;

    let mut store = state.store.write().await;
    let result = store.update(&id, recipe).await;
    observability::record("update", store.backend(), &result);
    result?;
    info!(key = %id, "recipe updated");
    Ok(Json(StatusMessage::success()))
}

#[utoipa::path(
    delete, path = "/recipes/{id}", tag = "recipes",
    params(("id" = String, Path, description = "Recipe key")),
    responses(
        (status = 200, description = "Removed", body = crate::openapi::StatusBody),
        (status = 404, description = "Not found", body = crate::openapi::ErrorBody),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete_recipe(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<StatusMessage>, ApiError> {
    let mut store = state.store.write().await;
    let result = store.remove(&id).await;
    observability::record("remove", store.backend(), &result);
    result?;
    info!(key = %id, "recipe removed");
    Ok(Json(StatusMessage::success()))
}
