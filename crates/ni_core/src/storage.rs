use async_trait::async_trait;

use crate::draft::ArticleDraft;
use crate::types::{Article, EngagementKind};
use crate::Result;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Full, authoritative article collection.
    async fn articles(&self) -> Result<Vec<Article>>;

    /// Bumped by every mutation. Cached query results computed at an older
    /// revision are stale.
    fn revision(&self) -> u64 {
        0
    }
}

#[async_trait]
pub trait ArticleSink: Send + Sync {
    /// Build an article from `draft` and add it to the collection
    async fn create_article(&self, draft: ArticleDraft) -> Result<Article>;

    /// Flip the archived flag of an article
    async fn toggle_archive(&self, id: &str) -> Result<Article>;

    /// Remove an article from the collection
    async fn delete_article(&self, id: &str) -> Result<()>;

    /// Increment one engagement counter from reading activity
    async fn record_engagement(&self, id: &str, kind: EngagementKind) -> Result<Article>;
}

pub trait ArticleStore: ArticleSource + ArticleSink {}

impl<T: ArticleSource + ArticleSink> ArticleStore for T {}
