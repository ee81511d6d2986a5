//! PostgreSQL-backed article adapter.
//!
//! Listing and single reads aggregate the comment count in one pass; vote
//! increments are a single delta-update statement, so concurrent increments
//! never race through a read-modify-write cycle. ORDER BY text is derived
//! only from the resolved sort enumerations; client strings reach the query
//! exclusively as bind parameters.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Text};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ArticlePage, ArticleRepository, StoreError};
use crate::domain::query::ArticleListQuery;
use crate::domain::{Article, ArticleId, VoteDelta};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{ArticleWithCountRow, PagedArticleRow};
use super::pool::DbPool;
use super::schema::articles;

const ARTICLE_COLUMNS: &str = "a.article_id, a.title, a.topic, a.author, a.body, a.created_at, \
     a.votes, COUNT(c.comment_id) AS comment_count";

const FIND_BY_ID_SQL: &str = "\
SELECT a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes, \
       COUNT(c.comment_id) AS comment_count \
FROM articles a \
LEFT JOIN comments c ON c.article_id = a.article_id \
WHERE a.article_id = $1 \
GROUP BY a.article_id";

const INCREMENT_VOTES_SQL: &str = "\
UPDATE articles \
SET votes = votes + $1 \
WHERE article_id = $2 \
RETURNING article_id, title, topic, author, body, created_at, votes, \
          (SELECT COUNT(*) FROM comments c \
           WHERE c.article_id = articles.article_id) AS comment_count";

/// Diesel-backed implementation of the article port.
#[derive(Clone)]
pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Assemble the listing statement. Bind positions shift by one when the
/// topic filter is present.
fn list_sql(query: &ArticleListQuery) -> String {
    let (filter, limit_bind, offset_bind) = if query.topic.is_some() {
        (" WHERE a.topic = $1", "$2", "$3")
    } else {
        ("", "$1", "$2")
    };
    format!(
        "SELECT {ARTICLE_COLUMNS}, COUNT(*) OVER () AS total_count \
         FROM articles a \
         LEFT JOIN comments c ON c.article_id = a.article_id{filter} \
         GROUP BY a.article_id \
         ORDER BY {sort} {order} \
         LIMIT {limit_bind} OFFSET {offset_bind}",
        sort = query.sort_by.as_sql(),
        order = query.order.as_sql(),
    )
}

#[async_trait]
impl ArticleRepository for DieselArticleRepository {
    async fn list(&self, query: &ArticleListQuery) -> Result<ArticlePage, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let statement = list_sql(query);
        let rows: Vec<PagedArticleRow> = if let Some(topic) = &query.topic {
            sql_query(statement)
                .bind::<Text, _>(topic)
                .bind::<BigInt, _>(query.pagination.limit())
                .bind::<BigInt, _>(query.pagination.offset())
                .load(&mut conn)
                .await
        } else {
            sql_query(statement)
                .bind::<BigInt, _>(query.pagination.limit())
                .bind::<BigInt, _>(query.pagination.offset())
                .load(&mut conn)
                .await
        }
        .map_err(|err| map_diesel_error(err, "article listing"))?;

        let total_count = <[PagedArticleRow]>::first(&rows).map_or(0, |row| row.total_count);
        let articles = rows
            .into_iter()
            .map(|row| Article::from(row.article))
            .collect();
        Ok(ArticlePage {
            articles,
            total_count,
        })
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ArticleWithCountRow> = sql_query(FIND_BY_ID_SQL)
            .bind::<BigInt, _>(id.get())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "article lookup"))?;
        Ok(rows.into_iter().next().map(Article::from))
    }

    async fn exists(&self, id: ArticleId) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(articles::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "article existence probe"))
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> Result<Option<Article>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ArticleWithCountRow> = sql_query(INCREMENT_VOTES_SQL)
            .bind::<BigInt, _>(delta.get())
            .bind::<BigInt, _>(id.get())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "article vote increment"))?;
        Ok(rows.into_iter().next().map(Article::from))
    }
}
