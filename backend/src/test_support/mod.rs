//! In-memory port implementations and the seed fixture for integration
//! tests.
//!
//! The store mirrors the persistence adapters' observable semantics
//! (sorting, pagination, derived comment counts, delta-applied votes), so
//! endpoint tests exercise the full HTTP stack without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::ports::{
    ArticlePage, ArticleRepository, CommentRepository, StoreError, TopicRepository, UserRepository,
};
use crate::domain::query::{ArticleListQuery, Pagination, SortColumn, SortOrder};
use crate::domain::{Article, ArticleId, Comment, CommentId, NewComment, Topic, User, VoteDelta};
use crate::inbound::http::state::HttpState;

/// Stored article without its derived fields.
#[derive(Debug, Clone)]
struct ArticleRecord {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i64,
}

#[derive(Debug, Default)]
struct StoreState {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<ArticleRecord>,
    comments: Vec<Comment>,
    next_comment_id: i64,
}

/// Thread-safe in-memory store implementing all four repository ports.
#[derive(Debug)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

fn fixture_time(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, month, day, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn fixture_user(username: &str, name: &str) -> User {
    User {
        username: username.to_owned(),
        name: name.to_owned(),
        avatar_url: format!("https://avatars.example.com/{username}.png"),
    }
}

fn fixture_article(
    article_id: i64,
    title: &str,
    topic: &str,
    author: &str,
    day: u32,
    votes: i64,
) -> ArticleRecord {
    ArticleRecord {
        article_id,
        title: title.to_owned(),
        topic: topic.to_owned(),
        author: author.to_owned(),
        body: format!("Body of article {article_id}"),
        created_at: fixture_time(1, day),
        votes,
    }
}

fn fixture_comment(comment_id: i64, article_id: i64, author: &str, day: u32) -> Comment {
    Comment {
        comment_id,
        article_id,
        author: author.to_owned(),
        body: format!("Comment {comment_id} on article {article_id}"),
        votes: comment_id,
        created_at: fixture_time(2, day),
    }
}

impl InMemoryStore {
    /// A store with no rows at all.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(StoreState {
                next_comment_id: 1,
                ..StoreState::default()
            }),
        })
    }

    /// The seed fixture: 3 topics, 4 users, 12 articles; article 1 owns 11
    /// comments, article 3 owns 2, article 2 owns none.
    pub fn seeded() -> Arc<Self> {
        let topics = vec![
            Topic {
                slug: "cats".to_owned(),
                description: "Not dogs".to_owned(),
            },
            Topic {
                slug: "mitch".to_owned(),
                description: "The man, the Mitch, the legend".to_owned(),
            },
            Topic {
                slug: "paper".to_owned(),
                description: "what books are made of".to_owned(),
            },
        ];

        let users = vec![
            fixture_user("butter_bridge", "Jonny"),
            fixture_user("icellusedkars", "Sam"),
            fixture_user("rogersop", "Paul"),
            fixture_user("lurker", "Do Nothing"),
        ];

        let articles = vec![
            fixture_article(1, "Living in the shadow of a great man", "mitch", "butter_bridge", 1, 100),
            fixture_article(2, "Sony Vaio; or, The Laptop", "mitch", "icellusedkars", 2, 0),
            fixture_article(3, "Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", 3, 0),
            fixture_article(4, "Student SUES Mitch!", "mitch", "rogersop", 4, 0),
            fixture_article(5, "UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", 5, 0),
            fixture_article(6, "A", "mitch", "icellusedkars", 6, 0),
            fixture_article(7, "Z", "mitch", "icellusedkars", 7, 0),
            fixture_article(8, "Does Mitch predate civilisation?", "mitch", "icellusedkars", 8, 0),
            fixture_article(9, "They're not exactly dogs, are they?", "mitch", "butter_bridge", 9, 0),
            fixture_article(10, "Seven inspirational thought leaders from Manchester", "mitch", "rogersop", 10, 0),
            fixture_article(11, "Am I a cat?", "mitch", "icellusedkars", 11, 0),
            fixture_article(12, "Moustache", "mitch", "butter_bridge", 12, 0),
        ];

        let authors = ["butter_bridge", "icellusedkars", "rogersop"];
        let mut comments = Vec::new();
        for i in 0..11_i64 {
            let author = authors[usize::try_from(i).expect("index fits") % authors.len()];
            let day = u32::try_from(i + 1).expect("day fits");
            comments.push(fixture_comment(i + 1, 1, author, day));
        }
        comments.push(fixture_comment(12, 3, "icellusedkars", 15));
        comments.push(fixture_comment(13, 3, "butter_bridge", 16));

        Arc::new(Self {
            state: Mutex::new(StoreState {
                topics,
                users,
                articles,
                comments,
                next_comment_id: 14,
            }),
        })
    }

    /// Bundle this store into handler state, one `Arc` per port.
    pub fn http_state(self: &Arc<Self>) -> HttpState {
        HttpState {
            topics: self.clone(),
            articles: self.clone(),
            comments: self.clone(),
            users: self.clone(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().expect("state lock")
    }
}

fn comment_count(state: &StoreState, article_id: i64) -> i64 {
    i64::try_from(
        state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .count(),
    )
    .expect("comment count fits")
}

fn shape_article(state: &StoreState, record: &ArticleRecord) -> Article {
    Article {
        article_id: record.article_id,
        author: record.author.clone(),
        title: record.title.clone(),
        body: record.body.clone(),
        topic: record.topic.clone(),
        created_at: record.created_at,
        votes: record.votes,
        comment_count: comment_count(state, record.article_id),
    }
}

fn compare(sort_by: SortColumn, a: &Article, b: &Article) -> std::cmp::Ordering {
    match sort_by {
        SortColumn::ArticleId => a.article_id.cmp(&b.article_id),
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Topic => a.topic.cmp(&b.topic),
        SortColumn::Author => a.author.cmp(&b.author),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
    }
}

fn paginate<T>(rows: Vec<T>, page: &Pagination) -> Vec<T> {
    let offset = usize::try_from(page.offset()).expect("offset fits");
    let limit = usize::try_from(page.limit()).expect("limit fits");
    rows.into_iter().skip(offset).take(limit).collect()
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn list(&self, page: &Pagination) -> Result<Vec<Topic>, StoreError> {
        let state = self.lock();
        let mut topics = state.topics.clone();
        topics.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(paginate(topics, page))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, StoreError> {
        let state = self.lock();
        Ok(state.topics.iter().find(|topic| topic.slug == slug).cloned())
    }
}

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn list(&self, query: &ArticleListQuery) -> Result<ArticlePage, StoreError> {
        let state = self.lock();
        let mut articles: Vec<Article> = state
            .articles
            .iter()
            .filter(|record| {
                query
                    .topic
                    .as_ref()
                    .is_none_or(|topic| record.topic == *topic)
            })
            .map(|record| shape_article(&state, record))
            .collect();
        articles.sort_by(|a, b| compare(query.sort_by, a, b));
        if matches!(query.order, SortOrder::Desc) {
            articles.reverse();
        }
        let total_count = i64::try_from(articles.len()).expect("total fits");
        Ok(ArticlePage {
            articles: paginate(articles, &query.pagination),
            total_count,
        })
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, StoreError> {
        let state = self.lock();
        Ok(state
            .articles
            .iter()
            .find(|record| record.article_id == id.get())
            .map(|record| shape_article(&state, record)))
    }

    async fn exists(&self, id: ArticleId) -> Result<bool, StoreError> {
        let state = self.lock();
        Ok(state
            .articles
            .iter()
            .any(|record| record.article_id == id.get()))
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> Result<Option<Article>, StoreError> {
        let mut state = self.lock();
        let Some(index) = state
            .articles
            .iter()
            .position(|record| record.article_id == id.get())
        else {
            return Ok(None);
        };
        state.articles[index].votes += delta.get();
        let record = state.articles[index].clone();
        Ok(Some(shape_article(&state, &record)))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_for_article(
        &self,
        article: ArticleId,
        page: &Pagination,
    ) -> Result<Vec<Comment>, StoreError> {
        let state = self.lock();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|comment| comment.article_id == article.get())
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(comments, page))
    }

    async fn insert(&self, article: ArticleId, new: &NewComment) -> Result<Comment, StoreError> {
        let mut state = self.lock();
        let comment = Comment {
            comment_id: state.next_comment_id,
            article_id: article.get(),
            author: new.author().to_owned(),
            body: new.body().to_owned(),
            votes: 0,
            created_at: Utc::now(),
        };
        state.next_comment_id += 1;
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: CommentId) -> Result<bool, StoreError> {
        let mut state = self.lock();
        let before = state.comments.len();
        state
            .comments
            .retain(|comment| comment.comment_id != id.get());
        Ok(state.comments.len() < before)
    }

    async fn increment_votes(
        &self,
        id: CommentId,
        delta: VoteDelta,
    ) -> Result<Option<Comment>, StoreError> {
        let mut state = self.lock();
        let Some(comment) = state
            .comments
            .iter_mut()
            .find(|comment| comment.comment_id == id.get())
        else {
            return Ok(None);
        };
        comment.votes += delta.get();
        Ok(Some(comment.clone()))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let state = self.lock();
        let mut users = state.users.clone();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        let state = self.lock();
        Ok(state.users.iter().any(|user| user.username == username))
    }
}
