//! Order HTTP handlers

use super::model::{NewOrder, Order};
use super::service::OrderService;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use axum::extract::{Path, State};

#[derive(Clone)]
pub struct OrderAppState {
    pub service: OrderService,
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    JsonBody(input): JsonBody<NewOrder>,
) -> ApiResult<Order> {
    let order = state
        .service
        .place(input)
        .await
        .map_err(|e| ApiError::from_store("error_create_order", e))?;

    Ok(Envelope::ok("success_order_created", order))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
) -> ApiResult<Order> {
    let id = parse_id(&id, "order")?;

    let order = state
        .service
        .store()
        .get_order(id)
        .await
        .map_err(|e| ApiError::from_store("error_get_order", e))?
        .ok_or_else(|| ApiError::not_found("order"))?;

    Ok(Envelope::ok("success_order_retrieved", order))
}

pub async fn get_user_orders(
    State(state): State<OrderAppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<Order>> {
    let user_id = parse_id(&user_id, "user")?;

    let orders = state
        .service
        .store()
        .list_user_orders(user_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_user_orders", e))?;

    Ok(Envelope::ok("success_user_orders_retrieved", orders))
}

pub async fn get_all_orders(State(state): State<OrderAppState>) -> ApiResult<Vec<Order>> {
    let orders = state
        .service
        .store()
        .list_orders()
        .await
        .map_err(|e| ApiError::from_store("error_get_all_orders", e))?;

    Ok(Envelope::ok("success_all_orders_retrieved", orders))
}
