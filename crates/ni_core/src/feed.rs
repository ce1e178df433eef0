use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::pipeline::{group_sections, query, FeedSections};
use crate::storage::ArticleSource;
use crate::types::{Article, FilterOptions};
use crate::Result;

struct CachedFeed {
    options: FilterOptions,
    revision: u64,
    articles: Vec<Article>,
}

/// Home-feed query front: runs the pipeline over an injected source and
/// keeps the last published result until the options or the source
/// revision change.
pub struct ArticleFeed {
    source: Arc<dyn ArticleSource>,
    latency: Duration,
    cache: RwLock<Option<CachedFeed>>,
    in_flight: AtomicUsize,
}

struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ArticleFeed {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self {
            source,
            latency: Duration::ZERO,
            cache: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Delay waited before every fresh computation, standing in for a
    /// network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn load(&self, options: &FilterOptions) -> Result<Vec<Article>> {
        let revision = self.source.revision();
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.revision == revision && &cached.options == options {
                    debug!("📰 Feed cache hit at revision {}", revision);
                    return Ok(cached.articles.clone());
                }
            }
        }

        let articles = {
            let _loading = LoadingGuard::enter(&self.in_flight);
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            self.source.articles().await?
        };

        let result = query(&articles, options);
        info!(
            "📰 Feed refreshed: {} of {} articles (category={}, sort={:?})",
            result.len(),
            articles.len(),
            options.category,
            options.sort_by
        );
        *self.cache.write().await = Some(CachedFeed {
            options: options.clone(),
            revision,
            articles: result.clone(),
        });
        Ok(result)
    }

    pub async fn sections(&self, options: &FilterOptions) -> Result<FeedSections> {
        let articles = self.load(options).await?;
        Ok(group_sections(&articles))
    }

    /// Last published result, if any.
    pub async fn current(&self) -> Option<Vec<Article>> {
        self.cache.read().await.as_ref().map(|c| c.articles.clone())
    }

    pub async fn invalidate(&self) {
        self.cache.write().await.take();
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn source(&self) -> &Arc<dyn ArticleSource> {
        &self.source
    }
}
