//! Topic endpoints.
//!
//! ```text
//! GET /api/topics?limit=&p=
//! GET /api/topics/{slug}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::query::Pagination;
use crate::domain::{Error, Topic};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Optional pagination parameters shared by listing endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageParams {
    /// Page size; defaults to 10.
    pub limit: Option<String>,
    /// Page number, 1-based; defaults to 1.
    pub p: Option<String>,
}

/// Response payload for the topic listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// Response payload for a single topic.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicResponse {
    pub topic: Topic,
}

/// List topics.
#[utoipa::path(
    get,
    path = "/api/topics",
    params(PageParams),
    responses(
        (status = 200, description = "Topics", body = TopicsResponse),
        (status = 400, description = "Invalid pagination", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["topics"],
    operation_id = "getTopics"
)]
#[get("/topics")]
pub async fn get_topics(
    state: web::Data<HttpState>,
    params: web::Query<PageParams>,
) -> ApiResult<web::Json<TopicsResponse>> {
    let page = Pagination::resolve(params.limit.as_deref(), params.p.as_deref())?;
    let topics = state.topics.list(&page).await?;
    Ok(web::Json(TopicsResponse { topics }))
}

/// Fetch a single topic by slug.
///
/// The slug is an opaque string; there is no format validation, only the
/// existence check.
#[utoipa::path(
    get,
    path = "/api/topics/{slug}",
    params(("slug" = String, Path, description = "Topic slug")),
    responses(
        (status = 200, description = "Topic", body = TopicResponse),
        (status = 404, description = "No such topic", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["topics"],
    operation_id = "getTopicBySlug"
)]
#[get("/topics/{slug}")]
pub async fn get_topic_by_slug(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TopicResponse>> {
    let slug = path.into_inner();
    let topic = state
        .topics
        .find_by_slug(&slug)
        .await?
        .ok_or_else(Error::non_existent_slug)?;
    Ok(web::Json(TopicResponse { topic }))
}
