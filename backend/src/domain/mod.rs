//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed resource models, the query-resolution
//! layer, the error taxonomy, and the ports the adapters implement. Raw
//! client strings stop at this module's constructors; everything downstream
//! sees validated values.

pub mod article;
pub mod comment;
pub mod error;
pub mod ports;
pub mod query;
pub mod topic;
pub mod user;
pub mod votes;

pub use self::article::{Article, ArticleId};
pub use self::comment::{Comment, CommentId, NewComment};
pub use self::error::{Error, ErrorCode};
pub use self::topic::Topic;
pub use self::user::User;
pub use self::votes::VoteDelta;

/// Convenient result alias for controller operations.
pub type ApiResult<T> = Result<T, Error>;
