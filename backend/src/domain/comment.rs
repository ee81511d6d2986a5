//! Comment resource representation, identifier parsing, and creation payload
//! validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::article::parse_positive;

/// Validated comment identifier.
///
/// ## Invariants
/// - Always a positive integer; see [`crate::domain::ArticleId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(i64);

impl CommentId {
    /// Parse a raw path segment into an identifier.
    ///
    /// # Errors
    /// Returns the `Invalid comment_id` domain error when `raw` is not a
    /// positive integer.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        parse_positive(raw)
            .map(CommentId)
            .ok_or_else(Error::invalid_comment_id)
    }

    /// Underlying integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment on an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    /// Unique identifier.
    #[schema(example = 4)]
    pub comment_id: i64,
    /// The article this comment belongs to.
    #[schema(example = 1)]
    pub article_id: i64,
    /// Author username, references an existing user.
    #[schema(example = "icellusedkars")]
    pub author: String,
    /// Comment text.
    pub body: String,
    /// Current vote tally.
    #[schema(example = 16)]
    pub votes: i64,
    /// Creation timestamp (RFC 3339).
    #[schema(value_type = String, example = "2020-04-06T12:17:00Z")]
    pub created_at: DateTime<Utc>,
}

/// Validated comment-creation payload.
///
/// Both fields are required; `body` must be non-empty after trimming. The
/// referenced author's existence is checked against the user repository by
/// the controller, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    author: String,
    body: String,
}

impl NewComment {
    /// Validate a decoded JSON payload into a creation request.
    ///
    /// # Errors
    /// Returns the `Invalid POST body` domain error when either field is
    /// missing, not a string, or `body` is blank.
    pub fn from_json(payload: &Value) -> Result<Self, Error> {
        let author = payload
            .get("author")
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(Error::invalid_post_body)?;
        let body = payload
            .get("body")
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(Error::invalid_post_body)?;
        Ok(Self {
            author: author.to_owned(),
            body: body.to_owned(),
        })
    }

    /// Author username.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Comment text.
    pub fn body(&self) -> &str {
        self.body.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn accepts_a_complete_payload() {
        let payload = json!({"author": "butter_bridge", "body": "nice article"});
        let comment = NewComment::from_json(&payload).expect("valid payload");
        assert_eq!(comment.author(), "butter_bridge");
        assert_eq!(comment.body(), "nice article");
    }

    #[rstest]
    #[case(json!({"body": "no author"}))]
    #[case(json!({"author": "butter_bridge"}))]
    #[case(json!({"author": "butter_bridge", "body": "   "}))]
    #[case(json!({"author": 7, "body": "numeric author"}))]
    #[case(json!({}))]
    fn rejects_incomplete_payloads(#[case] payload: Value) {
        let err = NewComment::from_json(&payload).expect_err("must reject");
        assert_eq!(err.msg(), "Invalid POST body");
    }

    #[rstest]
    #[case("7", 7)]
    #[case("123", 123)]
    fn comment_id_parses_positive_integers(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(CommentId::parse(raw).expect("valid").get(), expected);
    }

    #[rstest]
    #[case("seven")]
    #[case("-1")]
    #[case("3.0")]
    fn comment_id_rejects_other_input(#[case] raw: &str) {
        let err = CommentId::parse(raw).expect_err("must reject");
        assert_eq!(err.msg(), "Invalid comment_id");
    }
}
