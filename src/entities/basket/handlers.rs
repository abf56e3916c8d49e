//! Basket HTTP handlers

use super::model::{BasketEntry, BasketItem};
use super::store::BasketStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, Removed, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct BasketAppState {
    pub store: Arc<dyn BasketStore>,
}

fn check_quantity(entry: &BasketEntry) -> Result<(), ApiError> {
    if entry.quantity <= 0 {
        return Err(ApiError::bad_request(
            "error_invalid_quantity",
            "Quantity must be positive",
        ));
    }
    Ok(())
}

pub async fn add_to_basket(
    State(state): State<BasketAppState>,
    JsonBody(entry): JsonBody<BasketEntry>,
) -> ApiResult<BasketItem> {
    check_quantity(&entry)?;

    let item = state
        .store
        .add_basket_item(entry)
        .await
        .map_err(|e| ApiError::from_store("error_add_to_basket", e))?;

    tracing::info!(
        user_id = item.user_id,
        product_id = item.product_id,
        quantity = item.quantity,
        "item added to basket"
    );
    Ok(Envelope::ok("success_item_added_to_basket", item))
}

pub async fn get_user_basket(
    State(state): State<BasketAppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<BasketItem>> {
    let user_id = parse_id(&user_id, "user")?;

    let items = state
        .store
        .list_basket(user_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_user_basket", e))?;

    Ok(Envelope::ok("success_user_basket_retrieved", items))
}

pub async fn update_basket_item(
    State(state): State<BasketAppState>,
    JsonBody(entry): JsonBody<BasketEntry>,
) -> ApiResult<BasketItem> {
    check_quantity(&entry)?;

    let item = state
        .store
        .update_basket_item(entry)
        .await
        .map_err(|e| ApiError::from_store("error_update_basket_item", e))?
        .ok_or_else(|| ApiError::not_found("basket_item"))?;

    Ok(Envelope::ok("success_basket_item_updated", item))
}

pub async fn remove_from_basket(
    State(state): State<BasketAppState>,
    Path((user_id, product_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let user_id = parse_id(&user_id, "user")?;
    let product_id = parse_id(&product_id, "product")?;

    if !state
        .store
        .remove_basket_item(user_id, product_id)
        .await
        .map_err(|e| ApiError::from_store("error_remove_from_basket", e))?
    {
        return Err(ApiError::not_found("basket_item"));
    }

    tracing::info!(user_id, product_id, "item removed from basket");
    Ok(Envelope::empty("success_item_removed_from_basket"))
}

pub async fn clear_basket(
    State(state): State<BasketAppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Removed> {
    let user_id = parse_id(&user_id, "user")?;

    let removed = state
        .store
        .clear_basket(user_id)
        .await
        .map_err(|e| ApiError::from_store("error_clear_basket", e))?;

    tracing::info!(user_id, removed, "basket cleared");
    Ok(Envelope::ok("success_basket_cleared", Removed { removed }))
}
