//! Article endpoints.
//!
//! ```text
//! GET /api/articles?sort_by=&order=&topic=&limit=&p=
//! GET /api/articles/{article_id}
//! PATCH /api/articles/{article_id}
//! ```

use actix_web::{get, patch, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::query::ArticleListQuery;
use crate::domain::{Article, ArticleId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::resolve_vote_delta;

/// Raw article listing parameters; everything optional, resolved by the
/// domain query layer.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    /// Sort column; whitelisted, defaults to `created_at`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`; defaults to `desc`.
    pub order: Option<String>,
    /// Equality filter on the topic slug.
    pub topic: Option<String>,
    /// Page size; defaults to 10.
    pub limit: Option<String>,
    /// Page number, 1-based; defaults to 1.
    pub p: Option<String>,
}

/// `inc_votes` supplied through the query string instead of the body.
#[derive(Debug, Deserialize, IntoParams)]
pub struct IncVotesParams {
    pub inc_votes: Option<String>,
}

/// Response payload for the article listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    /// Count of rows matching the topic filter, ignoring pagination.
    pub total_count: i64,
}

/// Response payload for a single article.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: Article,
}

/// List articles with optional filtering, sorting, and pagination.
#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles plus filter-wide total", body = ArticlesResponse),
        (status = 400, description = "Invalid sort, order, or pagination", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["articles"],
    operation_id = "getArticles"
)]
#[get("/articles")]
pub async fn get_articles(
    state: web::Data<HttpState>,
    params: web::Query<ArticleListParams>,
) -> ApiResult<web::Json<ArticlesResponse>> {
    let query = ArticleListQuery::resolve(
        params.sort_by.as_deref(),
        params.order.as_deref(),
        params.topic.clone(),
        params.limit.as_deref(),
        params.p.as_deref(),
    )?;
    let page = state.articles.list(&query).await?;
    Ok(web::Json(ArticlesResponse {
        articles: page.articles,
        total_count: page.total_count,
    }))
}

/// Fetch a single article, including its derived comment count.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article", body = ArticleResponse),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 404, description = "No such article", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["articles"],
    operation_id = "getArticleById"
)]
#[get("/articles/{article_id}")]
pub async fn get_article_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ArticleResponse>> {
    let id = ArticleId::parse(&path.into_inner())?;
    let article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or_else(Error::non_existent_article_id)?;
    Ok(web::Json(ArticleResponse { article }))
}

/// Apply a vote delta to an article.
///
/// `inc_votes` is read from the JSON body, falling back to the query string
/// when the body is empty. Identifier validation precedes payload
/// validation, which precedes the existence check.
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(
        ("article_id" = String, Path, description = "Article identifier"),
        IncVotesParams
    ),
    request_body(content = serde_json::Value, description = "`{\"inc_votes\": integer}`"),
    responses(
        (status = 200, description = "Updated article", body = ArticleResponse),
        (status = 400, description = "Malformed identifier or PATCH body", body = ErrorBody),
        (status = 404, description = "No such article", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["articles"],
    operation_id = "patchArticleById"
)]
#[patch("/articles/{article_id}")]
pub async fn patch_article_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<IncVotesParams>,
    body: web::Bytes,
) -> ApiResult<web::Json<ArticleResponse>> {
    let id = ArticleId::parse(&path.into_inner())?;
    let delta = resolve_vote_delta(&body, params.inc_votes.as_deref())?;
    let article = state
        .articles
        .increment_votes(id, delta)
        .await?
        .ok_or_else(Error::non_existent_article_id)?;
    Ok(web::Json(ArticleResponse { article }))
}
