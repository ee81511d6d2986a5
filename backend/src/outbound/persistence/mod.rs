//! Diesel/PostgreSQL persistence adapters.

mod diesel_article_repository;
mod diesel_comment_repository;
mod diesel_helpers;
mod diesel_topic_repository;
mod diesel_user_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_article_repository::DieselArticleRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_topic_repository::DieselTopicRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
