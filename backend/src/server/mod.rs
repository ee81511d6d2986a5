//! Server construction and route wiring.
//!
//! `build_app` is the single wiring path shared by the binary and the
//! integration tests, so both exercise the same routes and state shape.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::articles::{get_article_by_id, get_articles, patch_article_by_id};
use crate::inbound::http::comments::{
    delete_comment_by_comment_id, get_comments_by_article_id, patch_comment_by_id,
    post_comment_by_article_id,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::topics::{get_topic_by_slug, get_topics};
use crate::inbound::http::users::get_users;
use crate::outbound::persistence::{
    DbPool, DieselArticleRepository, DieselCommentRepository, DieselTopicRepository,
    DieselUserRepository,
};

/// Assemble the Diesel-backed handler state from a connection pool.
pub fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState {
        topics: Arc::new(DieselTopicRepository::new(pool.clone())),
        articles: Arc::new(DieselArticleRepository::new(pool.clone())),
        comments: Arc::new(DieselCommentRepository::new(pool.clone())),
        users: Arc::new(DieselUserRepository::new(pool.clone())),
    }
}

/// Build the application with all REST routes registered under `/api`.
pub fn build_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(get_topics)
        .service(get_topic_by_slug)
        .service(get_articles)
        .service(get_article_by_id)
        .service(patch_article_by_id)
        .service(get_comments_by_article_id)
        .service(post_comment_by_article_id)
        .service(delete_comment_by_comment_id)
        .service(patch_comment_by_id)
        .service(get_users);

    let mut app = App::new()
        .app_data(web::Data::new(state))
        .service(api);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Run the HTTP server until shutdown.
///
/// # Errors
/// Propagates bind and accept-loop failures from the runtime.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let ServerConfig { bind_addr, db_pool } = config;
    HttpServer::new(move || build_app(build_http_state(&db_pool)))
        .bind(bind_addr)?
        .run()
        .await
}
