//! Category HTTP handlers

use super::model::{Category, CategoryInput, ImageInput};
use super::store::CategoryStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoryAppState {
    pub store: Arc<dyn CategoryStore>,
}

pub async fn create_category(
    State(state): State<CategoryAppState>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> ApiResult<Category> {
    let category = state
        .store
        .create_category(input)
        .await
        .map_err(|e| ApiError::from_store("error_create_category", e))?;

    tracing::info!(category_id = category.id, "category created");
    Ok(Envelope::ok("success_category_created", category))
}

pub async fn list_categories(State(state): State<CategoryAppState>) -> ApiResult<Vec<Category>> {
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(|e| ApiError::from_store("error_get_all_categories", e))?;

    Ok(Envelope::ok("success_categories_retrieved", categories))
}

pub async fn get_category(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
) -> ApiResult<Category> {
    let id = parse_id(&id, "category")?;

    let category = state
        .store
        .get_category(id)
        .await
        .map_err(|e| ApiError::from_store("error_get_category", e))?
        .ok_or_else(|| ApiError::not_found("category"))?;

    Ok(Envelope::ok("success_category_retrieved", category))
}

pub async fn update_category(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> ApiResult<Category> {
    let id = parse_id(&id, "category")?;

    let category = state
        .store
        .update_category(id, input)
        .await
        .map_err(|e| ApiError::from_store("error_update_category", e))?
        .ok_or_else(|| ApiError::not_found("category"))?;

    tracing::info!(category_id = id, "category updated");
    Ok(Envelope::ok("success_category_updated", category))
}

pub async fn delete_category(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id, "category")?;

    if !state
        .store
        .delete_category(id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_category", e))?
    {
        return Err(ApiError::not_found("category"));
    }

    tracing::info!(category_id = id, "category deleted");
    Ok(Envelope::empty("success_category_deleted"))
}

pub async fn set_category_image(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ImageInput>,
) -> ApiResult<Category> {
    let id = parse_id(&id, "category")?;

    let category = state
        .store
        .set_category_image(id, &input.image)
        .await
        .map_err(|e| ApiError::from_store("error_set_image", e))?
        .ok_or_else(|| ApiError::not_found("category"))?;

    Ok(Envelope::ok("success_category_image_set", category))
}

pub async fn remove_category_image(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
) -> ApiResult<Category> {
    let id = parse_id(&id, "category")?;

    let category = state
        .store
        .remove_category_image(id)
        .await
        .map_err(|e| ApiError::from_store("error_remove_image", e))?
        .ok_or_else(|| ApiError::not_found("category"))?;

    Ok(Envelope::ok("success_category_image_removed", category))
}
