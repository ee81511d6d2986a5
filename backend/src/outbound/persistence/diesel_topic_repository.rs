//! PostgreSQL-backed topic adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Topic;
use crate::domain::ports::{StoreError, TopicRepository};
use crate::domain::query::Pagination;

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::TopicRow;
use super::pool::DbPool;
use super::schema::topics;

/// Diesel-backed implementation of the topic port.
#[derive(Clone)]
pub struct DieselTopicRepository {
    pool: DbPool,
}

impl DieselTopicRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for DieselTopicRepository {
    async fn list(&self, page: &Pagination) -> Result<Vec<Topic>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TopicRow> = topics::table
            .order(topics::slug.asc())
            .limit(page.limit())
            .offset(page.offset())
            .select(TopicRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "topic listing"))?;
        Ok(rows.into_iter().map(Topic::from).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<TopicRow> = topics::table
            .find(slug)
            .select(TopicRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "topic lookup"))?;
        Ok(row.map(Topic::from))
    }
}
