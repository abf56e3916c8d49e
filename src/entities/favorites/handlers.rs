//! Favorite HTTP handlers

use super::model::{Favorite, FavoriteCheck, FavoriteInput};
use super::store::FavoriteStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct FavoriteAppState {
    pub store: Arc<dyn FavoriteStore>,
}

pub async fn add_to_favorites(
    State(state): State<FavoriteAppState>,
    JsonBody(input): JsonBody<FavoriteInput>,
) -> ApiResult<Favorite> {
    let favorite = state
        .store
        .add_favorite(input.user_id, input.product_id)
        .await
        .map_err(|e| ApiError::from_store("error_add_to_favorites", e))?;

    tracing::info!(
        user_id = input.user_id,
        product_id = input.product_id,
        "item added to favorites"
    );
    Ok(Envelope::ok("success_item_added_to_favorites", favorite))
}

pub async fn get_user_favorites(
    State(state): State<FavoriteAppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<Favorite>> {
    let user_id = parse_id(&user_id, "user")?;

    let favorites = state
        .store
        .list_favorites(user_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_user_favorites", e))?;

    Ok(Envelope::ok("success_user_favorites_retrieved", favorites))
}

pub async fn check_favorite(
    State(state): State<FavoriteAppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> ApiResult<FavoriteCheck> {
    let user_id = parse_id(&user_id, "user")?;
    let product_id = parse_id(&product_id, "product")?;

    let exists = state
        .store
        .is_favorite(user_id, product_id)
        .await
        .map_err(|e| ApiError::from_store("error_check_favorite", e))?;

    Ok(Envelope::ok("success_favorite_checked", FavoriteCheck { exists }))
}

pub async fn remove_from_favorites(
    State(state): State<FavoriteAppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let user_id = parse_id(&user_id, "user")?;
    let product_id = parse_id(&product_id, "product")?;

    if !state
        .store
        .remove_favorite(user_id, product_id)
        .await
        .map_err(|e| ApiError::from_store("error_remove_from_favorites", e))?
    {
        return Err(ApiError::not_found("favorite"));
    }

    tracing::info!(user_id, product_id, "item removed from favorites");
    Ok(Envelope::empty("success_item_removed_from_favorites"))
}
