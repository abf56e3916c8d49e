//! Mark HTTP handlers

use super::model::{Mark, MarkInput};
use super::store::MarkStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use crate::entities::avg_marks::AvgMarkService;
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct MarkAppState {
    pub store: Arc<dyn MarkStore>,
    pub averages: AvgMarkService,
}

fn user_and_product(raw: (String, String)) -> Result<(i64, i64), ApiError> {
    Ok((parse_id(&raw.0, "user")?, parse_id(&raw.1, "product")?))
}

pub async fn get_user_marks(
    State(state): State<MarkAppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<Mark>> {
    let user_id = parse_id(&user_id, "user")?;

    let marks = state
        .store
        .list_user_marks(user_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_marks", e))?;

    Ok(Envelope::ok("success_get_user_marks", marks))
}

pub async fn get_product_user_mark(
    State(state): State<MarkAppState>,
    Path(raw): Path<(String, String)>,
) -> ApiResult<Mark> {
    let (user_id, product_id) = user_and_product(raw)?;

    let mark = state
        .store
        .get_mark(user_id, product_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_mark", e))?
        .ok_or_else(|| ApiError::not_found("mark"))?;

    Ok(Envelope::ok("success_get_product_user_marks", mark))
}

pub async fn add_mark(
    State(state): State<MarkAppState>,
    Path(raw): Path<(String, String)>,
    JsonBody(input): JsonBody<MarkInput>,
) -> ApiResult<Mark> {
    let (user_id, product_id) = user_and_product(raw)?;

    let mark = state
        .store
        .upsert_mark(user_id, product_id, input.mark)
        .await
        .map_err(|e| ApiError::from_store("error_add_mark", e))?;

    tracing::info!(user_id, product_id, mark = mark.mark, "mark stored");
    state.averages.refresh(product_id).await;

    Ok(Envelope::ok("success_add_mark", mark))
}

pub async fn delete_mark(
    State(state): State<MarkAppState>,
    Path(raw): Path<(String, String)>,
) -> ApiResult<()> {
    let (user_id, product_id) = user_and_product(raw)?;

    if !state
        .store
        .delete_mark(user_id, product_id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_mark", e))?
    {
        return Err(ApiError::not_found("mark"));
    }

    tracing::info!(user_id, product_id, "mark deleted");
    state.averages.refresh(product_id).await;

    Ok(Envelope::empty("success_delete_mark"))
}
