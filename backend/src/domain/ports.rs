//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with the data store.
//! Every adapter maps its failures into [`StoreError`] so the controllers
//! can treat storage uniformly; existence decisions (`Option`/`bool`) stay
//! with the caller, which owns the 404 contract.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::domain::query::{ArticleListQuery, Pagination};
use crate::domain::{Article, ArticleId, Comment, CommentId, NewComment, Topic, User, VoteDelta};

/// Errors surfaced by store adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum StoreError {
    /// Connectivity or pool checkout failures.
    #[error("store connection failed: {message}")]
    Connection { message: String },
    /// Query construction or execution failures.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Helper for connection-level failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query-level failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// One page of articles plus the filter-wide total.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePage {
    /// Rows for the requested page, already sorted.
    pub articles: Vec<Article>,
    /// Count of all rows matching the topic filter, ignoring pagination.
    pub total_count: i64,
}

/// Read access to topics.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// List topics, paginated, ordered by slug.
    async fn list(&self, page: &Pagination) -> Result<Vec<Topic>, StoreError>;

    /// Look up a single topic by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, StoreError>;
}

/// Read and vote-mutation access to articles.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Execute a resolved listing specification.
    async fn list(&self, query: &ArticleListQuery) -> Result<ArticlePage, StoreError>;

    /// Fetch one article with its derived comment count.
    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, StoreError>;

    /// Cheap existence probe used by the comment endpoints' 404 contract.
    async fn exists(&self, id: ArticleId) -> Result<bool, StoreError>;

    /// Apply a vote delta in a single statement and return the updated row,
    /// or `None` when the article does not exist.
    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> Result<Option<Article>, StoreError>;
}

/// Read, creation, deletion, and vote-mutation access to comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List an article's comments, newest first, paginated.
    async fn list_for_article(
        &self,
        article: ArticleId,
        page: &Pagination,
    ) -> Result<Vec<Comment>, StoreError>;

    /// Insert a comment and return the stored row.
    async fn insert(&self, article: ArticleId, new: &NewComment) -> Result<Comment, StoreError>;

    /// Delete a comment; `false` means no row matched.
    async fn delete(&self, id: CommentId) -> Result<bool, StoreError>;

    /// Apply a vote delta in a single statement and return the updated row,
    /// or `None` when the comment does not exist.
    async fn increment_votes(
        &self,
        id: CommentId,
        delta: VoteDelta,
    ) -> Result<Option<Comment>, StoreError>;
}

/// Read access to users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Existence probe used to validate comment authors.
    async fn exists(&self, username: &str) -> Result<bool, StoreError>;
}
