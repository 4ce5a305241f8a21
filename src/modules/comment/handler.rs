use std::sync::Arc;
use axum::{
    Extension,
    Json,
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use log::{error, info};
use validator::Validate;
use crate::{
    AppState,
    dto::{HttpResult, Pagination},
    error::{ErrorMessage, FieldError, HttpError, JsonParser, QueryParser},
    modules::comment::{
        dto::{CommentIdentityParams, CommentListParams, CommentRequest, PaginatedComments},
        model::CommentRepository,
    },
    router::not_allowed,
    utils::uri,
};

pub fn comment_router() -> Router {
    Router::new()
        .route("/comments", get(comment_list).post(comment_create).head(not_allowed))
}

async fn comment_list(
    Extension(app_state): Extension<Arc<AppState>>,
    QueryParser(params): QueryParser<CommentListParams>,
) -> HttpResult<impl IntoResponse> {
    let uri_encoded = uri::resolve(&params.uri, &params.uri_encoded, true);
    let pagination = Pagination::normalize(params.page.as_deref(), params.page_size.as_deref());
    let comments = app_state.db_client.get_comments_by_uri(&uri_encoded, pagination).await
        .map_err(|e| {
            error!("Failed to list comments for {:?}: {}", uri_encoded, e);
            HttpError::not_found_empty()
        })?;
    Ok(Json(PaginatedComments {
        comments,
        page: pagination.page,
        page_size: pagination.page_size,
    }))
}

async fn comment_create(
    Extension(app_state): Extension<Arc<AppState>>,
    QueryParser(identity): QueryParser<CommentIdentityParams>,
    JsonParser(body): JsonParser<CommentRequest>,
) -> HttpResult<impl IntoResponse> {
    let body = body.with_identity(identity);
    if !body.has_identity() {
        return Err(HttpError::bad_request(ErrorMessage::UriRequired.to_string()));
    }
    body.validate()
        .map_err(|e| FieldError::first_error(e, &CommentRequest::REQUIRED_FIELDS))?;
    let new_comment = body.into_new_comment(Utc::now());
    let comment = app_state.db_client.save_comment(new_comment).await
        .map_err(|e| {
            error!("Failed to create comment: {}", e);
            HttpError::bad_request(ErrorMessage::FailedCreateComment.to_string())
        })?;
    info!("Created comment {} for {}", comment.id, comment.uri);
    Ok((StatusCode::CREATED, Json(comment)))
}
