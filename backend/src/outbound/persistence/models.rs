//! Diesel row models and their conversions into domain types.
//!
//! The aggregate rows (`ArticleWithCountRow`, `PagedArticleRow`) are read
//! through `sql_query`, so they declare their SQL types by name; the plain
//! rows ride the DSL via `Queryable`/`Selectable`.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text, Timestamptz};

use crate::domain::{Article, Comment, Topic, User};

use super::schema::{comments, topics, users};

/// Queryable row for topics.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TopicRow {
    pub slug: String,
    pub description: String,
}

impl From<TopicRow> for Topic {
    fn from(row: TopicRow) -> Self {
        Topic {
            slug: row.slug,
            description: row.description,
        }
    }
}

/// Queryable row for users.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            username: row.username,
            name: row.name,
            avatar_url: row.avatar_url,
        }
    }
}

/// Row for comments; readable both through the DSL and `sql_query`
/// (the vote-increment RETURNING path).
#[derive(Debug, Clone, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            comment_id: row.comment_id,
            article_id: row.article_id,
            author: row.author,
            body: row.body,
            votes: row.votes,
            created_at: row.created_at,
        }
    }
}

/// Insertable row for comment creation; `votes` and `created_at` come from
/// column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub article_id: i64,
    pub author: &'a str,
    pub body: &'a str,
}

/// An article row joined with its aggregated comment count.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct ArticleWithCountRow {
    #[diesel(sql_type = BigInt)]
    pub article_id: i64,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Text)]
    pub topic: String,
    #[diesel(sql_type = Text)]
    pub author: String,
    #[diesel(sql_type = Text)]
    pub body: String,
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
    #[diesel(sql_type = BigInt)]
    pub votes: i64,
    #[diesel(sql_type = BigInt)]
    pub comment_count: i64,
}

impl From<ArticleWithCountRow> for Article {
    fn from(row: ArticleWithCountRow) -> Self {
        Article {
            article_id: row.article_id,
            author: row.author,
            title: row.title,
            body: row.body,
            topic: row.topic,
            created_at: row.created_at,
            votes: row.votes,
            comment_count: row.comment_count,
        }
    }
}

/// Listing row carrying the filter-wide total alongside each article.
#[derive(Debug, Clone, QueryableByName)]
pub(crate) struct PagedArticleRow {
    #[diesel(embed)]
    pub article: ArticleWithCountRow,
    #[diesel(sql_type = BigInt)]
    pub total_count: i64,
}
