use async_trait::async_trait;
use chrono::Utc;
use ni_core::{Article, ArticleDraft, ArticleSink, ArticleSource, EngagementKind, Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Article> {
        self.articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Newest authored articles go to the front of the collection.
    pub fn insert(&mut self, article: Article) {
        if self.articles.iter().any(|a| a.slug == article.slug) {
            warn!(
                "⚠️ Slug collision for '{}', slug lookups resolve to the newest article",
                article.slug
            );
        }
        self.articles.insert(0, article);
    }

    pub fn toggle_archive(&mut self, id: &str) -> Result<Article> {
        let article = self.find_mut(id)?;
        article.is_archived = !article.is_archived;
        article.updated_at = Utc::now();
        Ok(article.clone())
    }

    pub fn remove(&mut self, id: &str) -> Result<Article> {
        let index = self
            .articles
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.articles.remove(index))
    }

    pub fn record(&mut self, id: &str, kind: EngagementKind) -> Result<Article> {
        let article = self.find_mut(id)?;
        article.record(kind);
        Ok(article.clone())
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }
}

/// Shared in-memory article collection. Every successful mutation bumps the
/// revision so cached feed results go stale.
pub struct InMemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
    revision: AtomicU64,
}

impl InMemoryStorage {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new(articles))),
            revision: AtomicU64::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::new(crate::fixtures::seed_articles())
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.articles().len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn bump(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl ArticleSource for InMemoryStorage {
    async fn articles(&self) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store.articles().to_vec())
    }

    fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleSink for InMemoryStorage {
    async fn create_article(&self, draft: ArticleDraft) -> Result<Article> {
        let article = draft.into_article(Utc::now())?;
        let mut store = self.store.write().await;
        store.insert(article.clone());
        let revision = self.bump();
        info!("📝 Created article '{}' ({}) at revision {}", article.title, article.id, revision);
        Ok(article)
    }

    async fn toggle_archive(&self, id: &str) -> Result<Article> {
        let mut store = self.store.write().await;
        let article = store.toggle_archive(id)?;
        self.bump();
        info!("🗄️ Article {} archived={}", id, article.is_archived);
        Ok(article)
    }

    async fn delete_article(&self, id: &str) -> Result<()> {
        let mut store = self.store.write().await;
        let removed = store.remove(id)?;
        self.bump();
        info!("🗑️ Deleted article '{}' ({})", removed.title, id);
        Ok(())
    }

    async fn record_engagement(&self, id: &str, kind: EngagementKind) -> Result<Article> {
        let mut store = self.store.write().await;
        let article = store.record(id, kind)?;
        self.bump();
        Ok(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ni_core::Category;

    fn draft(title: &str) -> ArticleDraft {
        ArticleDraft {
            excerpt: "Test excerpt".to_string(),
            content: "This is a test article about politics.".to_string(),
            category: Some(Category::Politics),
            tags: "politics, test".to_string(),
            ..ArticleDraft::new(title, "Test Author")
        }
    }

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = InMemoryStorage::empty();
        let article = storage.create_article(draft("Test Article")).await.unwrap();

        let articles = storage.articles().await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, article.id);
        assert_eq!(articles[0].slug, "test-article");
        assert_eq!(storage.revision(), 1);
    }

    #[tokio::test]
    async fn test_created_articles_are_prepended() {
        let storage = InMemoryStorage::seeded();
        let before = storage.len().await;
        let article = storage.create_article(draft("Fresh Take")).await.unwrap();
        let articles = storage.articles().await.unwrap();
        assert_eq!(articles.len(), before + 1);
        assert_eq!(articles[0].id, article.id);
    }

    #[tokio::test]
    async fn test_toggle_archive_round_trips() {
        let storage = InMemoryStorage::seeded();
        let archived = storage.toggle_archive("1").await.unwrap();
        assert!(archived.is_archived);
        let restored = storage.toggle_archive("1").await.unwrap();
        assert!(!restored.is_archived);
        assert_eq!(storage.revision(), 2);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let storage = InMemoryStorage::seeded();
        storage.delete_article("2").await.unwrap();
        let articles = storage.articles().await.unwrap();
        assert!(articles.iter().all(|a| a.id != "2"));
        assert!(matches!(storage.delete_article("2").await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_id_leaves_revision_alone() {
        let storage = InMemoryStorage::seeded();
        assert!(storage.toggle_archive("missing").await.is_err());
        assert!(storage.record_engagement("missing", EngagementKind::Like).await.is_err());
        assert_eq!(storage.revision(), 0);
    }

    #[tokio::test]
    async fn test_record_engagement_increments_counter() {
        let storage = InMemoryStorage::seeded();
        let before = storage.articles().await.unwrap()[0].views;
        let article = storage.record_engagement("1", EngagementKind::View).await.unwrap();
        assert_eq!(article.views, before + 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_stored() {
        let storage = InMemoryStorage::empty();
        let bad = ArticleDraft {
            featured_image: "not a url".to_string(),
            ..draft("Broken")
        };
        assert!(matches!(storage.create_article(bad).await, Err(Error::InvalidUrl(_))));
        assert!(storage.is_empty().await);
    }
}
