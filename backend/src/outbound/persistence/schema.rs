//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for type-safe SQL generation. Regenerate with `diesel print-schema`
//! when migrations change.

diesel::table! {
    /// Discussion topics.
    topics (slug) {
        /// Primary key: URL-safe identifier.
        slug -> Varchar,
        /// Human-readable description.
        description -> Varchar,
    }
}

diesel::table! {
    /// Registered users.
    users (username) {
        /// Primary key: login name.
        username -> Varchar,
        /// Display name.
        name -> Varchar,
        /// Avatar image URL.
        avatar_url -> Varchar,
    }
}

diesel::table! {
    /// Articles posted under a topic.
    articles (article_id) {
        /// Primary key.
        article_id -> Int8,
        /// Headline.
        title -> Varchar,
        /// References `topics.slug`.
        topic -> Varchar,
        /// References `users.username`.
        author -> Varchar,
        /// Article text.
        body -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Vote tally, mutated only by delta updates.
        votes -> Int8,
    }
}

diesel::table! {
    /// Comments attached to articles.
    comments (comment_id) {
        /// Primary key.
        comment_id -> Int8,
        /// References `articles.article_id`.
        article_id -> Int8,
        /// References `users.username`.
        author -> Varchar,
        /// Comment text.
        body -> Text,
        /// Vote tally, mutated only by delta updates.
        votes -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(comments -> articles (article_id));

diesel::allow_tables_to_appear_in_same_query!(topics, users, articles, comments);
