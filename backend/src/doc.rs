//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every REST
//! endpoint and the response payload schemas. Swagger UI serves it in debug
//! builds at `/docs`.

use utoipa::OpenApi;

use crate::domain::{Article, Comment, Topic, User};
use crate::inbound::http::articles::{ArticleResponse, ArticlesResponse};
use crate::inbound::http::comments::{CommentResponse, CommentsResponse};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::topics::{TopicResponse, TopicsResponse};
use crate::inbound::http::users::UsersResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Discussion board content API",
        description = "REST interface over topics, articles, comments, and users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::topics::get_topics,
        crate::inbound::http::topics::get_topic_by_slug,
        crate::inbound::http::articles::get_articles,
        crate::inbound::http::articles::get_article_by_id,
        crate::inbound::http::articles::patch_article_by_id,
        crate::inbound::http::comments::get_comments_by_article_id,
        crate::inbound::http::comments::post_comment_by_article_id,
        crate::inbound::http::comments::delete_comment_by_comment_id,
        crate::inbound::http::comments::patch_comment_by_id,
        crate::inbound::http::users::get_users,
    ),
    components(schemas(
        Topic,
        Article,
        Comment,
        User,
        ErrorBody,
        TopicsResponse,
        TopicResponse,
        ArticlesResponse,
        ArticleResponse,
        CommentsResponse,
        CommentResponse,
        UsersResponse,
    )),
    tags(
        (name = "topics", description = "Topic resources"),
        (name = "articles", description = "Article resources"),
        (name = "comments", description = "Comment resources"),
        (name = "users", description = "User resources")
    )
)]
pub struct ApiDoc;
