//! Comment HTTP handlers

use super::model::{Comment, CommentInput};
use super::store::CommentStore;
use crate::core::{ApiError, ApiResult, Envelope, JsonBody, parse_id};
use axum::extract::{Path, State};
use std::sync::Arc;

#[derive(Clone)]
pub struct CommentAppState {
    pub store: Arc<dyn CommentStore>,
}

fn user_and_product(raw: (String, String)) -> Result<(i64, i64), ApiError> {
    Ok((parse_id(&raw.0, "user")?, parse_id(&raw.1, "product")?))
}

fn check_text(input: &CommentInput) -> Result<(), ApiError> {
    if input.comment.trim().is_empty() {
        return Err(ApiError::bad_request(
            "error_invalid_comment",
            "Comment must not be empty",
        ));
    }
    Ok(())
}

pub async fn add_comment(
    State(state): State<CommentAppState>,
    Path(raw): Path<(String, String)>,
    JsonBody(input): JsonBody<CommentInput>,
) -> ApiResult<Comment> {
    let (user_id, product_id) = user_and_product(raw)?;
    check_text(&input)?;

    let comment = state
        .store
        .add_comment(user_id, product_id, &input.comment)
        .await
        .map_err(|e| ApiError::from_store("error_add_comment", e))?;

    tracing::info!(comment_id = comment.id, user_id, product_id, "comment added");
    Ok(Envelope::ok("success_add_comment", comment))
}

pub async fn edit_comment(
    State(state): State<CommentAppState>,
    Path(raw): Path<(String, String)>,
    JsonBody(input): JsonBody<CommentInput>,
) -> ApiResult<Comment> {
    let (user_id, product_id) = user_and_product(raw)?;
    check_text(&input)?;

    let comment = state
        .store
        .edit_comment(user_id, product_id, &input.comment)
        .await
        .map_err(|e| ApiError::from_store("error_edit_comment", e))?
        .ok_or_else(|| ApiError::not_found("comment"))?;

    Ok(Envelope::ok("success_edit_comment", comment))
}

pub async fn delete_comment(
    State(state): State<CommentAppState>,
    Path(raw): Path<(String, String)>,
) -> ApiResult<()> {
    let (user_id, product_id) = user_and_product(raw)?;

    if !state
        .store
        .delete_comment(user_id, product_id)
        .await
        .map_err(|e| ApiError::from_store("error_delete_comment", e))?
    {
        return Err(ApiError::not_found("comment"));
    }

    tracing::info!(user_id, product_id, "comment deleted");
    Ok(Envelope::empty("success_delete_comment"))
}

pub async fn get_comments_by_product(
    State(state): State<CommentAppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Vec<Comment>> {
    let product_id = parse_id(&product_id, "product")?;

    let comments = state
        .store
        .list_product_comments(product_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_comments", e))?;

    Ok(Envelope::ok("success_get_comments_by_product", comments))
}

pub async fn get_comments_by_user(
    State(state): State<CommentAppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<Comment>> {
    let user_id = parse_id(&user_id, "user")?;

    let comments = state
        .store
        .list_user_comments(user_id)
        .await
        .map_err(|e| ApiError::from_store("error_get_comments", e))?;

    Ok(Envelope::ok("success_get_comments_by_user", comments))
}
