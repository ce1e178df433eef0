use async_trait::async_trait;
use ni_core::{Article, ArticleSource, Result, SearchResult};
use std::sync::Arc;

/// Where suggestion lookups are answered. A remote search backend plugs in
/// here; debounce and supersede rules stay in `SearchSuggestions`.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Case-insensitive substring match on title or excerpt.
pub fn matches(article: &Article, query: &str) -> bool {
    let needle = query.to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article.excerpt.to_lowercase().contains(&needle)
}

/// Scans the full article collection, keeping collection order.
pub struct ArticleSuggestions {
    source: Arc<dyn ArticleSource>,
}

impl ArticleSuggestions {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl SuggestionSource for ArticleSuggestions {
    async fn lookup(&self, query: &str) -> Result<Vec<SearchResult>> {
        let articles = self.source.articles().await?;
        Ok(articles
            .iter()
            .filter(|article| matches(article, query))
            .map(SearchResult::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ni_core::ResultKind;
    use ni_storage::InMemoryStorage;

    #[tokio::test]
    async fn test_connectivity_matches_title() {
        let suggestions = ArticleSuggestions::new(Arc::new(InMemoryStorage::seeded()));
        let results = suggestions.lookup("connectivity").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Digital Connectivity Trends Show Unexpected Social Benefits");
        assert_eq!(results[0].kind, ResultKind::Article);
    }

    #[tokio::test]
    async fn test_excerpt_match_keeps_collection_order() {
        let suggestions = ArticleSuggestions::new(Arc::new(InMemoryStorage::seeded()));
        let results = suggestions.lookup("REVEAL").await.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty() {
        let suggestions = ArticleSuggestions::new(Arc::new(InMemoryStorage::seeded()));
        assert!(suggestions.lookup("quantum").await.unwrap().is_empty());
    }
}
