//! Price HTTP handlers

use super::model::{NewPrice, Price, UpdatePrice, UpdatePriceCount, is_valid};
use super::store::PriceStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, Removed, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct PriceAppState {
    pub store: Arc<dyn PriceStore>,
}

fn invalid_data() -> ApiError {
    ApiError::bad_request("error_invalid_data", "Count and Price must be non-negative")
}

pub async fn create_price(
    State(state): State<PriceAppState>,
    JsonBody(input): JsonBody<NewPrice>,
) -> ApiResult<Price> {
    if !is_valid(input.count, input.price) {
        return Err(invalid_data());
    }

    let price = state
        .store
        .create_price(input)
        .await
        .map_err(|e| ApiError::from_store("error_create_price", e))?;

    tracing::info!(price_id = price.id, product_id = price.product_id, "price created");
    Ok(Envelope::ok("success_price_created", price))
}

pub async fn get_price(
    State(state): State<PriceAppState>,
    Path(id): Path<String>,
) -> ApiResult<Price> {
    let id = parse_id(&id, "price")?;

    let price = state
        .store
        .get_price(id)
        .await
        .map_err(|e| ApiError::from_store("error_get_price", e))?
        .ok_or_else(|| ApiError::not_found("price"))?;

    Ok(Envelope::ok("success_price_retrieved", price))
}

pub async fn list_prices_for_product(
    State(state): State<PriceAppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Vec<Price>> {
    let product_id = parse_id(&product_id, "product")?;

    let prices = state
        .store
        .list_prices_for_product(product_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_prices_by_product", e))?;

    Ok(Envelope::ok("success_prices_retrieved", prices))
}

pub async fn update_price(
    State(state): State<PriceAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdatePrice>,
) -> ApiResult<Price> {
    let id = parse_id(&id, "price")?;
    if !is_valid(input.count, input.price) {
        return Err(invalid_data());
    }

    let price = state
        .store
        .update_price(id, input)
        .await
        .map_err(|e| ApiError::from_store("error_update_price", e))?
        .ok_or_else(|| ApiError::not_found("price"))?;

    tracing::info!(price_id = id, "price updated");
    Ok(Envelope::ok("success_price_updated", price))
}

pub async fn update_price_count(
    State(state): State<PriceAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdatePriceCount>,
) -> ApiResult<Price> {
    let id = parse_id(&id, "price")?;
    if input.new_count < 0 {
        return Err(invalid_data());
    }

    let price = state
        .store
        .update_price_count(id, input.new_count)
        .await
        .map_err(|e| ApiError::from_store("error_update_price_count", e))?
        .ok_or_else(|| ApiError::not_found("price"))?;

    Ok(Envelope::ok("success_price_count_updated", price))
}

pub async fn delete_price(
    State(state): State<PriceAppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id, "price")?;

    if !state
        .store
        .delete_price(id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_price", e))?
    {
        return Err(ApiError::not_found("price"));
    }

    tracing::info!(price_id = id, "price deleted");
    Ok(Envelope::empty("success_price_deleted"))
}

pub async fn delete_prices_for_product(
    State(state): State<PriceAppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Removed> {
    let product_id = parse_id(&product_id, "product")?;

    let removed = state
        .store
        .delete_prices_for_product(product_id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_prices_by_product", e))?;

    tracing::info!(product_id, removed, "prices deleted for product");
    Ok(Envelope::ok("success_prices_deleted", Removed { removed }))
}
