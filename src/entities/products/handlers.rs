//! Product HTTP handlers

use super::model::{
    CountInput, ImageInput, ImagesInput, NewProduct, Product, StockInput, UpdateProduct,
};
use super::store::ProductStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductAppState {
    pub store: Arc<dyn ProductStore>,
}

fn found(product: Option<Product>) -> Result<Product, ApiError> {
    product.ok_or_else(|| ApiError::not_found("product"))
}

pub async fn create_product(
    State(state): State<ProductAppState>,
    JsonBody(input): JsonBody<NewProduct>,
) -> ApiResult<Product> {
    if input.stock < 0 || input.sell_count < 0 {
        return Err(ApiError::bad_request(
            "error_invalid_data",
            "Stock and sell count must be non-negative",
        ));
    }

    let product = state
        .store
        .create_product(input)
        .await
        .map_err(|e| ApiError::from_store("error_create_product", e))?;

    tracing::info!(product_id = product.id, "product created");
    Ok(Envelope::ok("success_product_created", product))
}

pub async fn list_products(State(state): State<ProductAppState>) -> ApiResult<Vec<Product>> {
    let products = state
        .store
        .list_products()
        .await
        .map_err(|e| ApiError::from_store("error_get_all_products", e))?;

    Ok(Envelope::ok("success_products_retrieved", products))
}

pub async fn get_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;

    let product = state
        .store
        .get_product(id)
        .await
        .map_err(|e| ApiError::from_store("error_get_product", e))?;

    Ok(Envelope::ok("success_product_retrieved", found(product)?))
}

pub async fn update_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;
    if input.stock < 0 {
        return Err(ApiError::bad_request(
            "error_invalid_data",
            "Stock must be non-negative",
        ));
    }

    let product = state
        .store
        .update_product(id, input)
        .await
        .map_err(|e| ApiError::from_store("error_update_product", e))?;

    tracing::info!(product_id = id, "product updated");
    Ok(Envelope::ok("success_product_updated", found(product)?))
}

pub async fn delete_product(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id, "product")?;

    if !state
        .store
        .delete_product(id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_product", e))?
    {
        return Err(ApiError::not_found("product"));
    }

    tracing::info!(product_id = id, "product deleted");
    Ok(Envelope::empty("success_product_deleted"))
}

pub async fn add_product_image(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ImageInput>,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;

    let product = state
        .store
        .add_product_image(id, &input.image)
        .await
        .map_err(|e| ApiError::from_store("error_add_product_image", e))?;

    Ok(Envelope::ok("success_product_image_added", found(product)?))
}

pub async fn remove_product_image(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ImageInput>,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;

    let product = state
        .store
        .remove_product_image(id, &input.image)
        .await
        .map_err(|e| ApiError::from_store("error_remove_product_image", e))?;

    Ok(Envelope::ok("success_product_image_removed", found(product)?))
}

pub async fn set_product_images(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ImagesInput>,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;

    let product = state
        .store
        .set_product_images(id, input.images)
        .await
        .map_err(|e| ApiError::from_store("error_set_product_images", e))?;

    Ok(Envelope::ok("success_product_images_set", found(product)?))
}

pub async fn increment_sell_count(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CountInput>,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;
    if input.count <= 0 {
        return Err(ApiError::bad_request(
            "error_invalid_data",
            "Count must be positive",
        ));
    }

    let product = state
        .store
        .increment_sell_count(id, input.count)
        .await
        .map_err(|e| ApiError::from_store("error_increment_sell_count", e))?;

    tracing::info!(product_id = id, count = input.count, "sell count incremented");
    Ok(Envelope::ok("success_sell_count_incremented", found(product)?))
}

pub async fn update_stock(
    State(state): State<ProductAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<StockInput>,
) -> ApiResult<Product> {
    let id = parse_id(&id, "product")?;
    if input.stock < 0 {
        return Err(ApiError::bad_request(
            "error_invalid_data",
            "Stock must be non-negative",
        ));
    }

    let product = state
        .store
        .update_stock(id, input.stock)
        .await
        .map_err(|e| ApiError::from_store("error_update_stock", e))?;

    Ok(Envelope::ok("success_stock_updated", found(product)?))
}
