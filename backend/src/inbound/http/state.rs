//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data`, so they depend
//! only on the domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ArticleRepository, CommentRepository, TopicRepository, UserRepository,
};

/// Dependency bundle for HTTP handlers, one port per resource.
#[derive(Clone)]
pub struct HttpState {
    pub topics: Arc<dyn TopicRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
}
