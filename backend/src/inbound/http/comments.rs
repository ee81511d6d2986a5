//! Comment endpoints.
//!
//! ```text
//! GET /api/articles/{article_id}/comments?limit=&p=
//! POST /api/articles/{article_id}/comments
//! DELETE /api/comments/{comment_id}
//! PATCH /api/comments/{comment_id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::query::Pagination;
use crate::domain::{ArticleId, Comment, CommentId, Error, NewComment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::articles::IncVotesParams;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::topics::PageParams;
use crate::inbound::http::validation::{decode_post_body, resolve_vote_delta};

/// Response payload for a comment listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// Response payload for a single comment.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: Comment,
}

/// List an article's comments, newest first.
///
/// Requires the parent article to exist; an article without comments lists
/// as `{"comments": []}`.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Article identifier"), PageParams),
    responses(
        (status = 200, description = "Comments, newest first", body = CommentsResponse),
        (status = 400, description = "Malformed identifier or pagination", body = ErrorBody),
        (status = 404, description = "No such article", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["comments"],
    operation_id = "getCommentsByArticleId"
)]
#[get("/articles/{article_id}/comments")]
pub async fn get_comments_by_article_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<PageParams>,
) -> ApiResult<web::Json<CommentsResponse>> {
    let id = ArticleId::parse(&path.into_inner())?;
    let page = Pagination::resolve(params.limit.as_deref(), params.p.as_deref())?;
    if !state.articles.exists(id).await? {
        return Err(Error::non_existent_article_id());
    }
    let comments = state.comments.list_for_article(id, &page).await?;
    Ok(web::Json(CommentsResponse { comments }))
}

/// Create a comment on an article.
///
/// The payload must carry a non-empty `body` and an `author` naming an
/// existing user; the parent article must exist.
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Article identifier")),
    request_body(content = serde_json::Value, description = "`{\"author\": string, \"body\": string}`"),
    responses(
        (status = 201, description = "Stored comment", body = CommentResponse),
        (status = 400, description = "Malformed identifier or POST body", body = ErrorBody),
        (status = 404, description = "No such article", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["comments"],
    operation_id = "postCommentByArticleId"
)]
#[post("/articles/{article_id}/comments")]
pub async fn post_comment_by_article_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = ArticleId::parse(&path.into_inner())?;
    let payload = decode_post_body(&body)?;
    let new_comment = NewComment::from_json(&payload)?;
    if !state.articles.exists(id).await? {
        return Err(Error::non_existent_article_id());
    }
    // An unknown author is a payload fault, not a missing resource.
    if !state.users.exists(new_comment.author()).await? {
        return Err(Error::invalid_post_body());
    }
    let comment = state.comments.insert(id, &new_comment).await?;
    Ok(HttpResponse::Created().json(CommentResponse { comment }))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Deleted; empty body"),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 404, description = "No such comment", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["comments"],
    operation_id = "deleteCommentByCommentId"
)]
#[delete("/comments/{comment_id}")]
pub async fn delete_comment_by_comment_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = CommentId::parse(&path.into_inner())?;
    if !state.comments.delete(id).await? {
        return Err(Error::non_existent_comment_id());
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Apply a vote delta to a comment.
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(
        ("comment_id" = String, Path, description = "Comment identifier"),
        IncVotesParams
    ),
    request_body(content = serde_json::Value, description = "`{\"inc_votes\": integer}`"),
    responses(
        (status = 200, description = "Updated comment", body = CommentResponse),
        (status = 400, description = "Malformed identifier or PATCH body", body = ErrorBody),
        (status = 404, description = "No such comment", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["comments"],
    operation_id = "patchCommentById"
)]
#[patch("/comments/{comment_id}")]
pub async fn patch_comment_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<IncVotesParams>,
    body: web::Bytes,
) -> ApiResult<web::Json<CommentResponse>> {
    let id = CommentId::parse(&path.into_inner())?;
    let delta = resolve_vote_delta(&body, params.inc_votes.as_deref())?;
    let comment = state
        .comments
        .increment_votes(id, delta)
        .await?
        .ok_or_else(Error::non_existent_comment_id)?;
    Ok(web::Json(CommentResponse { comment }))
}
