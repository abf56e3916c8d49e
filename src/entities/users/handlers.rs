//! User HTTP handlers

use super::model::{NewUser, UpdateUser, User};
use super::store::UserStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserAppState {
    pub store: Arc<dyn UserStore>,
}

pub async fn create_user(
    State(state): State<UserAppState>,
    JsonBody(input): JsonBody<NewUser>,
) -> ApiResult<User> {
    let user = state
        .store
        .create_user(input)
        .await
        .map_err(|e| ApiError::from_store("error_create_user", e))?;

    tracing::info!(user_id = user.id, telegram_id = user.telegram_id, "user created");
    Ok(Envelope::ok("success_user_created", user))
}

pub async fn list_users(State(state): State<UserAppState>) -> ApiResult<Vec<User>> {
    let users = state
        .store
        .list_users()
        .await
        .map_err(|e| ApiError::from_store("error_get_all_users", e))?;

    Ok(Envelope::ok("success_all_users_retrieved", users))
}

pub async fn get_user(
    State(state): State<UserAppState>,
    Path(telegram_id): Path<String>,
) -> ApiResult<User> {
    let telegram_id = parse_id(&telegram_id, "user")?;

    let user = state
        .store
        .get_user(telegram_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_user", e))?
        .ok_or_else(|| ApiError::not_found("user"))?;

    Ok(Envelope::ok("success_user_retrieved", user))
}

pub async fn get_user_by_username(
    State(state): State<UserAppState>,
    Path(username): Path<String>,
) -> ApiResult<User> {
    let user = state
        .store
        .get_user_by_username(&username)
        .await
        .map_err(|e| ApiError::from_store("error_get_user", e))?
        .ok_or_else(|| ApiError::not_found("user"))?;

    Ok(Envelope::ok("success_user_retrieved", user))
}

pub async fn update_user(
    State(state): State<UserAppState>,
    Path(telegram_id): Path<String>,
    JsonBody(input): JsonBody<UpdateUser>,
) -> ApiResult<User> {
    let telegram_id = parse_id(&telegram_id, "user")?;

    let user = state
        .store
        .update_username(telegram_id, &input.username)
        .await
        .map_err(|e| ApiError::from_store("error_update_user", e))?
        .ok_or_else(|| ApiError::not_found("user"))?;

    tracing::info!(telegram_id, "user updated");
    Ok(Envelope::ok("success_user_updated", user))
}

pub async fn delete_user(
    State(state): State<UserAppState>,
    Path(telegram_id): Path<String>,
) -> ApiResult<()> {
    let telegram_id = parse_id(&telegram_id, "user")?;

    let deleted = state
        .store
        .delete_user(telegram_id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_user", e))?;
    if !deleted {
        return Err(ApiError::not_found("user"));
    }

    tracing::info!(telegram_id, "user deleted");
    Ok(Envelope::empty("success_user_deleted"))
}
