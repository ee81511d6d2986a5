//! Query resolution: sort, order, filter, and pagination parameters.
//!
//! Raw query-string values resolve into closed enumerations and bounded
//! integers here, before any repository sees them. SQL column text is only
//! ever derived from the enumerations, never from client input.

use crate::domain::Error;
use crate::domain::article::parse_positive;

/// Default page size when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 10;

/// Whitelist of sortable article columns.
///
/// Adding a sortable field is a single variant edit; the parser and the SQL
/// text both follow from the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    /// Resolve an optional raw `sort_by` value, defaulting to `created_at`.
    ///
    /// # Errors
    /// Returns the `Invalid sort_by query` domain error for values outside
    /// the whitelist.
    pub fn resolve(raw: Option<&str>) -> Result<Self, Error> {
        match raw {
            None => Ok(SortColumn::CreatedAt),
            Some("article_id") => Ok(SortColumn::ArticleId),
            Some("title") => Ok(SortColumn::Title),
            Some("topic") => Ok(SortColumn::Topic),
            Some("author") => Ok(SortColumn::Author),
            Some("created_at") => Ok(SortColumn::CreatedAt),
            Some("votes") => Ok(SortColumn::Votes),
            Some("comment_count") => Ok(SortColumn::CommentCount),
            Some(_) => Err(Error::invalid_sort_by()),
        }
    }

    /// Column text for ORDER BY clauses. Derived from the enumeration only.
    pub const fn as_sql(self) -> &'static str {
        match self {
            SortColumn::ArticleId => "article_id",
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

/// Sort direction, `desc` by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Resolve an optional raw `order` value, case-insensitively.
    ///
    /// # Errors
    /// Returns the `Invalid order query` domain error for anything other
    /// than `asc`/`desc`.
    pub fn resolve(raw: Option<&str>) -> Result<Self, Error> {
        match raw {
            None => Ok(SortOrder::Desc),
            Some(value) if value.eq_ignore_ascii_case("asc") => Ok(SortOrder::Asc),
            Some(value) if value.eq_ignore_ascii_case("desc") => Ok(SortOrder::Desc),
            Some(_) => Err(Error::invalid_order()),
        }
    }

    /// Direction text for ORDER BY clauses.
    pub const fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Resolved offset/limit pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    page: i64,
}

impl Pagination {
    /// Resolve optional raw `limit` and `p` values.
    ///
    /// Defaults to `limit = 10`, `p = 1`; both must be positive integers
    /// when present.
    ///
    /// # Errors
    /// Returns the matching `Invalid … query` domain error on the first
    /// parameter that fails to parse.
    pub fn resolve(limit: Option<&str>, page: Option<&str>) -> Result<Self, Error> {
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(raw) => parse_positive(raw).ok_or_else(Error::invalid_limit)?,
        };
        let page = match page {
            None => 1,
            Some(raw) => parse_positive(raw).ok_or_else(Error::invalid_page)?,
        };
        Ok(Self { limit, page })
    }

    /// Page size.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of rows to skip: `(p - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Fully resolved article listing specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    /// Equality filter on the topic slug. A topic with no rows yields an
    /// empty page, not an error.
    pub topic: Option<String>,
    pub pagination: Pagination,
}

impl ArticleListQuery {
    /// Resolve the raw listing parameters in contract order: sort column,
    /// then direction, then pagination.
    ///
    /// # Errors
    /// Propagates the first resolution failure.
    pub fn resolve(
        sort_by: Option<&str>,
        order: Option<&str>,
        topic: Option<String>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> Result<Self, Error> {
        Ok(Self {
            sort_by: SortColumn::resolve(sort_by)?,
            order: SortOrder::resolve(order)?,
            topic,
            pagination: Pagination::resolve(limit, page)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, SortColumn::CreatedAt)]
    #[case(Some("votes"), SortColumn::Votes)]
    #[case(Some("comment_count"), SortColumn::CommentCount)]
    #[case(Some("title"), SortColumn::Title)]
    fn sort_column_resolves_whitelisted_values(
        #[case] raw: Option<&str>,
        #[case] expected: SortColumn,
    ) {
        assert_eq!(SortColumn::resolve(raw).expect("whitelisted"), expected);
    }

    #[rstest]
    #[case("droptable")]
    #[case("created_at; DROP TABLE articles")]
    #[case("CREATED_AT")]
    fn sort_column_rejects_everything_else(#[case] raw: &str) {
        let err = SortColumn::resolve(Some(raw)).expect_err("must reject");
        assert_eq!(err.msg(), "Invalid sort_by query");
    }

    #[rstest]
    #[case(Some("asc"), SortOrder::Asc)]
    #[case(Some("ASC"), SortOrder::Asc)]
    #[case(Some("Desc"), SortOrder::Desc)]
    #[case(None, SortOrder::Desc)]
    fn order_resolves_case_insensitively(#[case] raw: Option<&str>, #[case] expected: SortOrder) {
        assert_eq!(SortOrder::resolve(raw).expect("valid"), expected);
    }

    #[test]
    fn order_rejects_unknown_directions() {
        let err = SortOrder::resolve(Some("sideways")).expect_err("must reject");
        assert_eq!(err.msg(), "Invalid order query");
    }

    #[test]
    fn pagination_defaults_to_first_page_of_ten() {
        let page = Pagination::resolve(None, None).expect("defaults");
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn pagination_computes_the_offset() {
        let page = Pagination::resolve(Some("5"), Some("3")).expect("valid");
        assert_eq!(page.limit(), 5);
        assert_eq!(page.offset(), 10);
    }

    #[rstest]
    #[case(Some("nope"), None, "Invalid limit query")]
    #[case(Some("0"), None, "Invalid limit query")]
    #[case(None, Some("-2"), "Invalid p query")]
    #[case(None, Some("two"), "Invalid p query")]
    fn pagination_rejects_non_positive_values(
        #[case] limit: Option<&str>,
        #[case] page: Option<&str>,
        #[case] expected: &str,
    ) {
        let err = Pagination::resolve(limit, page).expect_err("must reject");
        assert_eq!(err.msg(), expected);
    }

    #[test]
    fn list_query_resolves_sort_before_pagination() {
        let err = ArticleListQuery::resolve(Some("droptable"), None, None, Some("bad"), None)
            .expect_err("sort checked first");
        assert_eq!(err.msg(), "Invalid sort_by query");
    }
}
