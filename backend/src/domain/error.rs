//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and the `{"msg": …}` response envelope; nothing in this module knows
//! about Actix.

use crate::domain::ports::StoreError;

/// Stable machine-readable code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A path identifier failed to parse as a positive integer.
    InvalidIdentifier,
    /// The PATCH payload is missing `inc_votes` or it is not an integer.
    InvalidPatchBody,
    /// The comment-creation payload is missing or malformed.
    InvalidPostBody,
    /// `sort_by` named a column outside the whitelist.
    InvalidSortColumn,
    /// `order` was neither `asc` nor `desc`.
    InvalidOrder,
    /// `limit` or `p` failed to parse as a positive integer.
    InvalidPagination,
    /// The requested resource does not exist.
    NotFound,
    /// The data store failed; details are logged, never returned to clients.
    StoreFailure,
}

/// Domain error carrying the code and the client-facing message.
///
/// ## Invariants
/// - `msg` holds the exact text rendered into the `{"msg": …}` envelope for
///   every code except [`ErrorCode::StoreFailure`], whose message is redacted
///   by the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    msg: String,
}

impl Error {
    /// Create a new error from a code and message.
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message.
    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }

    /// A non-numeric `article_id` path segment.
    pub fn invalid_article_id() -> Self {
        Self::new(ErrorCode::InvalidIdentifier, "Invalid article_id")
    }

    /// A non-numeric `comment_id` path segment.
    pub fn invalid_comment_id() -> Self {
        Self::new(ErrorCode::InvalidIdentifier, "Invalid comment_id")
    }

    /// An absent or non-integer `inc_votes` value.
    pub fn invalid_patch_body() -> Self {
        Self::new(ErrorCode::InvalidPatchBody, "Invalid PATCH body")
    }

    /// A missing or malformed comment-creation payload.
    pub fn invalid_post_body() -> Self {
        Self::new(ErrorCode::InvalidPostBody, "Invalid POST body")
    }

    /// A `sort_by` value outside the whitelist.
    pub fn invalid_sort_by() -> Self {
        Self::new(ErrorCode::InvalidSortColumn, "Invalid sort_by query")
    }

    /// An `order` value other than `asc`/`desc`.
    pub fn invalid_order() -> Self {
        Self::new(ErrorCode::InvalidOrder, "Invalid order query")
    }

    /// A `limit` value that is not a positive integer.
    pub fn invalid_limit() -> Self {
        Self::new(ErrorCode::InvalidPagination, "Invalid limit query")
    }

    /// A `p` value that is not a positive integer.
    pub fn invalid_page() -> Self {
        Self::new(ErrorCode::InvalidPagination, "Invalid p query")
    }

    /// A well-formed `article_id` with no matching row.
    pub fn non_existent_article_id() -> Self {
        Self::new(ErrorCode::NotFound, "Non-existent article_id")
    }

    /// A well-formed `comment_id` with no matching row.
    pub fn non_existent_comment_id() -> Self {
        Self::new(ErrorCode::NotFound, "Non-existent comment_id")
    }

    /// A topic slug with no matching row.
    pub fn non_existent_slug() -> Self {
        Self::new(ErrorCode::NotFound, "Non-existent slug")
    }

    /// An underlying store failure; `msg` is kept for logging only.
    pub fn store_failure(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreFailure, msg)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::store_failure(err.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_carry_the_contract_messages() {
        assert_eq!(Error::invalid_article_id().msg(), "Invalid article_id");
        assert_eq!(Error::invalid_patch_body().msg(), "Invalid PATCH body");
        assert_eq!(
            Error::non_existent_article_id().msg(),
            "Non-existent article_id"
        );
        assert_eq!(Error::non_existent_comment_id().code(), ErrorCode::NotFound);
    }

    #[test]
    fn store_errors_map_to_store_failure() {
        let err = Error::from(StoreError::query("boom"));
        assert_eq!(err.code(), ErrorCode::StoreFailure);
    }
}
