//! Average-mark HTTP handlers

use super::model::AvgMark;
use super::service::AvgMarkService;
use crate::core::{ApiError, ApiResult, Envelope, parse_id};
use axum::extract::{Path, State};

#[derive(Clone)]
pub struct AvgMarkAppState {
    pub service: AvgMarkService,
}

pub async fn get_avg_mark(
    State(state): State<AvgMarkAppState>,
    Path(product_id): Path<String>,
) -> ApiResult<AvgMark> {
    let product_id = parse_id(&product_id, "product")?;

    let avg = state
        .service
        .store()
        .get_avg_mark(product_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_avg_mark", e))?
        .ok_or_else(|| ApiError::not_found("avg_mark"))?;

    Ok(Envelope::ok("success_get_avg_mark", avg))
}

pub async fn get_all_avg_marks(State(state): State<AvgMarkAppState>) -> ApiResult<Vec<AvgMark>> {
    let averages = state
        .service
        .store()
        .list_avg_marks()
        .await
        .map_err(|e| ApiError::from_store("error_get_all_avg_marks", e))?;

    Ok(Envelope::ok("success_get_all_avg_marks", averages))
}

pub async fn recalculate_avg_mark(
    State(state): State<AvgMarkAppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Option<AvgMark>> {
    let product_id = parse_id(&product_id, "product")?;

    let avg = state
        .service
        .recalculate(product_id)
        .await
        .map_err(|e| ApiError::from_store("error_recalculate_avg_mark", e))?;

    tracing::info!(product_id, "average mark recalculated on request");
    Ok(Envelope::ok("success_recalculate", avg))
}
