//! PostgreSQL-backed comment adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::BigInt;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, StoreError};
use crate::domain::query::Pagination;
use crate::domain::{ArticleId, Comment, CommentId, NewComment, VoteDelta};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;

const INCREMENT_VOTES_SQL: &str = "\
UPDATE comments \
SET votes = votes + $1 \
WHERE comment_id = $2 \
RETURNING comment_id, article_id, author, body, votes, created_at";

/// Diesel-backed implementation of the comment port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn list_for_article(
        &self,
        article: ArticleId,
        page: &Pagination,
    ) -> Result<Vec<Comment>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CommentRow> = comments::table
            .filter(comments::article_id.eq(article.get()))
            .order(comments::created_at.desc())
            .limit(page.limit())
            .offset(page.offset())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "comment listing"))?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert(&self, article: ArticleId, new: &NewComment) -> Result<Comment, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CommentRow = diesel::insert_into(comments::table)
            .values(NewCommentRow {
                article_id: article.get(),
                author: new.author(),
                body: new.body(),
            })
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "comment insert"))?;
        Ok(Comment::from(row))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(comments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "comment delete"))?;
        Ok(deleted > 0)
    }

    async fn increment_votes(
        &self,
        id: CommentId,
        delta: VoteDelta,
    ) -> Result<Option<Comment>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CommentRow> = sql_query(INCREMENT_VOTES_SQL)
            .bind::<BigInt, _>(delta.get())
            .bind::<BigInt, _>(id.get())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "comment vote increment"))?;
        Ok(rows.into_iter().next().map(Comment::from))
    }
}
