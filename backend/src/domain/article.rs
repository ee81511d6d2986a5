//! Article resource representation and identifier parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;

/// Validated article identifier.
///
/// ## Invariants
/// - Always a positive integer. Parsing rejects anything else before a
///   repository is consulted, so malformed identifiers never reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(i64);

impl ArticleId {
    /// Parse a raw path segment into an identifier.
    ///
    /// # Errors
    /// Returns the `Invalid article_id` domain error when `raw` is not a
    /// positive integer.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        parse_positive(raw)
            .map(ArticleId)
            .ok_or_else(Error::invalid_article_id)
    }

    /// Underlying integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a raw decimal string as a positive integer, rejecting signs,
/// fractions, and non-numeric input.
pub(crate) fn parse_positive(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|value| *value > 0)
}

/// An article, including the derived `comment_count`.
///
/// `comment_count` is never stored; read paths recompute it from the related
/// comments, so it is `0` (not absent) for articles without any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    /// Unique identifier.
    #[schema(example = 1)]
    pub article_id: i64,
    /// Author username, references an existing user.
    #[schema(example = "butter_bridge")]
    pub author: String,
    /// Headline.
    #[schema(example = "Living in the shadow of a great man")]
    pub title: String,
    /// Article text.
    pub body: String,
    /// Topic slug, references an existing topic.
    #[schema(example = "mitch")]
    pub topic: String,
    /// Creation timestamp (RFC 3339).
    #[schema(value_type = String, example = "2020-07-09T20:11:00Z")]
    pub created_at: DateTime<Utc>,
    /// Current vote tally, mutated only through vote-increment requests.
    #[schema(example = 100)]
    pub votes: i64,
    /// Number of comments attached to this article.
    #[schema(example = 11)]
    pub comment_count: i64,
}
