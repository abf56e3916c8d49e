//! Firm HTTP handlers

use super::model::{Firm, FirmInput};
use super::store::FirmStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct FirmAppState {
    pub store: Arc<dyn FirmStore>,
}

pub async fn create_firm(
    State(state): State<FirmAppState>,
    JsonBody(input): JsonBody<FirmInput>,
) -> ApiResult<Firm> {
    let firm = state
        .store
        .create_firm(&input.name)
        .await
        .map_err(|e| ApiError::from_store("error_create_firm", e))?;

    tracing::info!(firm_id = firm.id, "firm created");
    Ok(Envelope::ok("success_firm_created", firm))
}

pub async fn list_firms(State(state): State<FirmAppState>) -> ApiResult<Vec<Firm>> {
    let firms = state
        .store
        .list_firms()
        .await
        .map_err(|e| ApiError::from_store("error_get_all_firms", e))?;

    Ok(Envelope::ok("success_all_firms_retrieved", firms))
}

pub async fn get_firm(
    State(state): State<FirmAppState>,
    Path(id): Path<String>,
) -> ApiResult<Firm> {
    let id = parse_id(&id, "firm")?;

    let firm = state
        .store
        .get_firm(id)
        .await
        .map_err(|e| ApiError::from_store("error_get_firm", e))?
        .ok_or_else(|| ApiError::not_found("firm"))?;

    Ok(Envelope::ok("success_firm_retrieved", firm))
}

pub async fn update_firm(
    State(state): State<FirmAppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<FirmInput>,
) -> ApiResult<Firm> {
    let id = parse_id(&id, "firm")?;

    let firm = state
        .store
        .update_firm(id, &input.name)
        .await
        .map_err(|e| ApiError::from_store("error_update_firm", e))?
        .ok_or_else(|| ApiError::not_found("firm"))?;

    tracing::info!(firm_id = id, "firm updated");
    Ok(Envelope::ok("success_firm_updated", firm))
}

pub async fn delete_firm(
    State(state): State<FirmAppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id, "firm")?;

    if !state
        .store
        .delete_firm(id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_firm", e))?
    {
        return Err(ApiError::not_found("firm"));
    }

    tracing::info!(firm_id = id, "firm deleted");
    Ok(Envelope::empty("success_firm_deleted"))
}
